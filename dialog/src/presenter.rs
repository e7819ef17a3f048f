use std::io::{BufRead, Write};
use std::sync::{Arc, Mutex, PoisonError};

use futures::channel::oneshot;
use owo_colors::OwoColorize;
use unicode_width::UnicodeWidthStr;

use crate::{Dialog, DialogError, DialogType, Presenter, sys};

/// Shows dialogs as platform message boxes.
///
/// Without the `native` feature, or on targets lacking a desktop backend, every
/// call fails with [`DialogError::EnvironmentUnavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePresenter;

impl Presenter for NativePresenter {
    fn show(&self, dialog: Dialog) -> impl Future<Output = Result<(), DialogError>> + Send {
        log::debug!("presenting native dialog {:?}", dialog.title);
        sys::show_alert(dialog)
    }
}

/// Shows dialogs as a framed box on stderr and waits for Enter on stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn show(&self, dialog: Dialog) -> impl Future<Output = Result<(), DialogError>> + Send {
        async move {
            let (tx, rx) = oneshot::channel();

            std::thread::Builder::new()
                .name("infobox-terminal".to_owned())
                .spawn(move || {
                    let res = prompt(
                        &dialog,
                        &mut std::io::stdin().lock(),
                        &mut std::io::stderr().lock(),
                        true,
                    );
                    let _ = tx.send(res);
                })?;

            rx.await.map_err(|_| DialogError::Closed)?
        }
    }
}

fn prompt<R: BufRead, W: Write>(
    dialog: &Dialog,
    input: &mut R,
    output: &mut W,
    paint: bool,
) -> Result<(), DialogError> {
    output.write_all(frame(dialog, paint).as_bytes())?;
    writeln!(output, "Press Enter to dismiss.")?;
    output.flush()?;

    // EOF counts as dismissal.
    let mut line = String::new();
    input.read_line(&mut line)?;
    log::debug!("terminal dialog dismissed");
    Ok(())
}

const fn icon(type_: DialogType) -> &'static str {
    match type_ {
        DialogType::Info => "(i)",
        DialogType::Warning => "(!)",
        DialogType::Error => "(x)",
    }
}

/// Lay out `dialog` as a box: icon and title on top, one row per message line.
/// Widths are terminal columns, so wide glyphs take two.
fn frame(dialog: &Dialog, paint: bool) -> String {
    let icon = icon(dialog.type_);
    let heading_width = icon.width() + 1 + dialog.title.width();
    let body: Vec<&str> = dialog.message.lines().collect();
    let width = body
        .iter()
        .map(|l| l.width())
        .chain(std::iter::once(heading_width))
        .max()
        .unwrap_or(0);

    let rule = format!("+{}+\n", "-".repeat(width + 2));
    let heading = if paint {
        format!("{} {}", icon.blue().bold(), dialog.title.bold())
    } else {
        format!("{icon} {}", dialog.title)
    };

    let mut out = String::new();
    out.push_str(&rule);
    out.push_str(&format!(
        "| {heading}{} |\n",
        " ".repeat(width - heading_width)
    ));
    out.push_str(&rule);
    for line in &body {
        let pad = width - line.width();
        out.push_str(&format!("| {line}{} |\n", " ".repeat(pad)));
    }
    if !body.is_empty() {
        out.push_str(&rule);
    }
    out
}

/// Records dialogs instead of showing them. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct HeadlessPresenter {
    shown: Arc<Mutex<Vec<Dialog>>>,
    unavailable: bool,
}

impl HeadlessPresenter {
    /// A presenter that accepts and records every dialog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A presenter that behaves like a machine without a display.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Dialogs presented so far, oldest first.
    #[must_use]
    pub fn presented(&self) -> Vec<Dialog> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Presenter for HeadlessPresenter {
    fn show(&self, dialog: Dialog) -> impl Future<Output = Result<(), DialogError>> + Send {
        let res = if self.unavailable {
            Err(DialogError::EnvironmentUnavailable(
                "headless presenter has no display".to_string(),
            ))
        } else {
            self.shown
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(dialog);
            Ok(())
        };
        std::future::ready(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_pads_to_widest_line() {
        let dialog = Dialog::new("InfoBox: Hi", "short\na much longer line");
        let expected = "\
+--------------------+
| (i) InfoBox: Hi    |
+--------------------+
| short              |
| a much longer line |
+--------------------+
";
        assert_eq!(frame(&dialog, false), expected);
    }

    #[test]
    fn frame_with_empty_message_has_only_heading() {
        let dialog = Dialog::new("InfoBox: ", "");
        assert_eq!(
            frame(&dialog, false),
            "+---------------+\n| (i) InfoBox:  |\n+---------------+\n"
        );
    }

    #[test]
    fn icon_follows_dialog_type() {
        let dialog = Dialog::new("t", "m").with_type(DialogType::Error);
        assert!(frame(&dialog, false).contains("| (x) t |"));
    }

    #[test]
    fn frame_counts_wide_glyphs_as_two_columns() {
        let dialog = Dialog::new("t", "日本\nabcde");
        let expected = "\
+-------+
| (i) t |
+-------+
| 日本  |
| abcde |
+-------+
";
        assert_eq!(frame(&dialog, false), expected);
    }

    #[test]
    fn prompt_dismissed_by_enter() {
        let mut input: &[u8] = b"\nleftover\n";
        let mut output = Vec::new();

        prompt(&Dialog::new("t", "m"), &mut input, &mut output, false).unwrap();

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.starts_with("+-------+\n| (i) t |\n"), "{shown}");
        assert!(shown.ends_with("Press Enter to dismiss.\n"), "{shown}");
        assert_eq!(input, &b"leftover\n"[..]);
    }

    #[test]
    fn prompt_dismissed_by_eof() {
        let mut input: &[u8] = b"";
        let mut output = Vec::new();

        prompt(&Dialog::new("t", "m"), &mut input, &mut output, false).unwrap();

        assert!(!output.is_empty());
    }

    #[tokio::test]
    async fn headless_records_in_order() {
        let presenter = HeadlessPresenter::new();
        let observer = presenter.clone();

        presenter.show(Dialog::new("one", "1")).await.unwrap();
        presenter.show(Dialog::new("two", "2")).await.unwrap();

        let titles: Vec<_> = observer.presented().into_iter().map(|d| d.title).collect();
        assert_eq!(titles, ["one", "two"]);
    }

    #[tokio::test]
    async fn unavailable_headless_records_nothing() {
        let presenter = HeadlessPresenter::unavailable();

        let err = presenter.show(Dialog::new("t", "m")).await.unwrap_err();

        assert!(err.is_environment_unavailable());
        assert!(presenter.presented().is_empty());
    }
}

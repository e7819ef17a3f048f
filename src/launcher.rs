use std::io::Write;

use infobox_dialog::{Dialog, DialogType, Presenter};

use crate::LaunchError;
use crate::args::Invocation;

/// Prefix of every dialog window title.
pub const TITLE_PREFIX: &str = "InfoBox: ";

/// Shows one information dialog per invocation and reports back on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogLauncher;

impl DialogLauncher {
    /// The line written after the dialog is dismissed. Never depends on the input.
    #[must_use]
    pub fn identifier() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// The dialog shown for `message` and `title`.
    #[must_use]
    pub fn dialog(message: &str, title: &str) -> Dialog {
        Dialog::new(format!("{TITLE_PREFIX}{title}"), message).with_type(DialogType::Info)
    }

    /// Present an information dialog and wait until the user dismisses it.
    ///
    /// # Errors
    /// Propagates presenter failures; a missing display surfaces as
    /// [`LaunchError::EnvironmentUnavailable`].
    pub async fn show_info<P: Presenter>(
        presenter: &P,
        message: &str,
        title: &str,
    ) -> Result<(), LaunchError> {
        presenter.show(Self::dialog(message, title)).await?;
        log::debug!("dialog dismissed");
        Ok(())
    }

    /// Show the dialog for `invocation`, then write the diagnostic to `out`.
    ///
    /// # Errors
    /// Fails if the dialog cannot be shown or `out` cannot be written. Nothing is
    /// written when the dialog fails.
    pub async fn run<P: Presenter, W: Write>(
        presenter: &P,
        invocation: &Invocation,
        out: &mut W,
    ) -> Result<(), LaunchError> {
        Self::show_info(presenter, &invocation.message, &invocation.title).await?;
        write_diagnostic(out)?;
        Ok(())
    }
}

/// Three blank lines, then the launcher's identifier.
fn write_diagnostic<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\n\n\n{}", DialogLauncher::identifier())?;
    out.flush()
}

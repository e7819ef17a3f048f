use crate::{Dialog, DialogError, DialogType};
use futures::channel::oneshot;
use native_dialog::{MessageDialog, MessageType};

/// Show an alert dialog.
///
/// The toolkit call blocks, so it runs on its own thread and the result comes
/// back over a oneshot channel.
///
/// # Errors
/// Returns [`DialogError::EnvironmentUnavailable`] without a display or dialog
/// helper, and [`DialogError::Platform`] when the toolkit reports a failure.
pub async fn show_alert(dialog: Dialog) -> Result<(), DialogError> {
    ensure_display()?;

    let (tx, rx) = oneshot::channel();

    std::thread::Builder::new()
        .name("infobox-dialog".to_owned())
        .spawn(move || {
            let type_ = match dialog.type_ {
                DialogType::Info => MessageType::Info,
                DialogType::Warning => MessageType::Warning,
                DialogType::Error => MessageType::Error,
            };

            let res = MessageDialog::new()
                .set_type(type_)
                .set_title(&dialog.title)
                .set_text(&dialog.message)
                .show_alert()
                .map_err(toolkit_error);

            let _ = tx.send(res);
        })?;

    rx.await.map_err(|_| DialogError::Closed)?
}

fn toolkit_error(err: native_dialog::Error) -> DialogError {
    match err {
        native_dialog::Error::NoImplementation => DialogError::EnvironmentUnavailable(
            "no dialog implementation found (kdialog/zenity)".to_string(),
        ),
        other => {
            log::error!("native dialog failed: {other}");
            DialogError::Platform(other.to_string())
        }
    }
}

// X11 and Wayland toolkits need a compositor or X server to talk to.
#[cfg(all(unix, not(target_os = "macos")))]
fn ensure_display() -> Result<(), DialogError> {
    display_from(|key| std::env::var_os(key))
}

#[cfg(all(unix, not(target_os = "macos")))]
fn display_from(lookup: impl Fn(&str) -> Option<std::ffi::OsString>) -> Result<(), DialogError> {
    let set = |key: &str| lookup(key).is_some_and(|v| !v.is_empty());

    if set("DISPLAY") || set("WAYLAND_DISPLAY") {
        Ok(())
    } else {
        Err(DialogError::EnvironmentUnavailable(
            "neither DISPLAY nor WAYLAND_DISPLAY is set".to_string(),
        ))
    }
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
#[allow(clippy::unnecessary_wraps)]
const fn ensure_display() -> Result<(), DialogError> {
    Ok(())
}

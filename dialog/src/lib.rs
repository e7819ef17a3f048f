//! Modal information dialogs.
//!
//! A [`Dialog`] describes what to show; a [`Presenter`] shows it and resolves
//! once the user has dismissed it. Three presenters ship with the crate:
//!
//! - [`NativePresenter`]: the platform message box (requires the `native` feature
//!   for a real backend).
//! - [`TerminalPresenter`]: a framed box on stderr, dismissed with Enter.
//! - [`HeadlessPresenter`]: records dialogs without showing anything.
//!
//! ```rust,no_run
//! use infobox_dialog::{Dialog, NativePresenter, Presenter};
//!
//! async fn greet() -> Result<(), infobox_dialog::DialogError> {
//!     NativePresenter.show(Dialog::new("Greeting", "Hello")).await
//! }
//! ```

#![warn(missing_docs)]

mod error;
mod presenter;
mod sys;

pub use error::DialogError;
pub use presenter::{HeadlessPresenter, NativePresenter, TerminalPresenter};

/// Types of dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogType {
    /// Information dialog.
    #[default]
    Info,
    /// Warning dialog.
    Warning,
    /// Error dialog.
    Error,
}

/// A modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    /// Title of the dialog window.
    pub title: String,
    /// Message content of the dialog.
    pub message: String,
    /// Type/Icon of the dialog.
    pub type_: DialogType,
}

impl Dialog {
    /// Create a new dialog with default Info type.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            type_: DialogType::Info,
        }
    }

    /// Set the dialog type.
    #[must_use]
    pub fn with_type(mut self, type_: DialogType) -> Self {
        self.type_ = type_;
        self
    }
}

/// Something able to put a [`Dialog`] in front of the user.
///
/// The returned future completes once the dialog has been dismissed.
pub trait Presenter {
    /// Present `dialog` and wait for the user to dismiss it.
    ///
    /// # Errors
    /// Returns [`DialogError::EnvironmentUnavailable`] when the backend has nowhere
    /// to show the dialog, or another [`DialogError`] when presentation fails.
    fn show(&self, dialog: Dialog) -> impl Future<Output = Result<(), DialogError>> + Send;
}

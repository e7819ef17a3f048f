use infobox_dialog::DialogError;
use thiserror::Error;

/// Errors that stop the launcher.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// A required positional argument was not supplied.
    #[error("missing argument <{name}> at position {position}\n\n{usage}")]
    MissingArgument {
        /// Name of the missing argument.
        name: &'static str,
        /// One-based position the argument was expected at.
        position: usize,
        /// Rendered usage line.
        usage: String,
    },

    /// There is no display or windowing subsystem to show the dialog on.
    #[error("cannot show dialog: {0}")]
    EnvironmentUnavailable(String),

    /// The diagnostic line could not be written.
    #[error("failed to write diagnostic: {0}")]
    Io(#[from] std::io::Error),

    /// Presenting the dialog failed for another reason.
    #[error(transparent)]
    Dialog(DialogError),
}

impl From<DialogError> for LaunchError {
    fn from(err: DialogError) -> Self {
        match err {
            DialogError::EnvironmentUnavailable(reason) => Self::EnvironmentUnavailable(reason),
            other => Self::Dialog(other),
        }
    }
}

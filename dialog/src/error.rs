use thiserror::Error;

/// Errors that can occur when presenting a dialog.
#[derive(Error, Debug)]
pub enum DialogError {
    /// There is no display or windowing subsystem to show the dialog on.
    #[error("Display environment unavailable: {0}")]
    EnvironmentUnavailable(String),

    /// An error occurred in the underlying platform implementation.
    #[error("Platform error: {0}")]
    Platform(String),

    /// The worker presenting the dialog went away before reporting dismissal.
    #[error("Dialog worker exited before the dialog was dismissed")]
    Closed,

    /// An IO error occurred while talking to the terminal.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DialogError {
    /// Whether the error means no dialog could be shown at all in this environment.
    #[must_use]
    pub const fn is_environment_unavailable(&self) -> bool {
        matches!(self, Self::EnvironmentUnavailable(_))
    }
}

//! # InfoBox
//!
//! Show a modal information dialog built from a message and a title, then print
//! an identifying line once the user has dismissed it.
//!
//! ```text
//! infobox <MESSAGE> <TITLE>
//! ```
//!
//! The window title is `"InfoBox: " + TITLE`. Presentation goes through an
//! [`infobox_dialog::Presenter`]; the binary picks [`DefaultPresenter`].
//!
//! ## Features
//!
//! - `native` (default): platform message boxes. Without it the dialog is drawn on
//!   the terminal.

pub mod args;
mod error;
mod launcher;

pub use args::{Invocation, parse_from};
pub use error::LaunchError;
pub use infobox_dialog as dialog;
pub use launcher::{DialogLauncher, TITLE_PREFIX};

/// Presenter used by the `infobox` binary.
#[cfg(feature = "native")]
pub type DefaultPresenter = infobox_dialog::NativePresenter;

/// Presenter used by the `infobox` binary.
#[cfg(not(feature = "native"))]
pub type DefaultPresenter = infobox_dialog::TerminalPresenter;

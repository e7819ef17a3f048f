//! Command-line arguments.
//!
//! Both values are taken verbatim by position, so `--`, `-v` and anything else
//! hyphen-leading are ordinary strings. clap only renders the usage line.

use std::ffi::OsString;

use clap::{Arg, Command};

use crate::LaunchError;

/// The validated arguments of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Body text of the dialog.
    pub message: String,
    /// Title suffix.
    pub title: String,
}

fn command() -> Command {
    Command::new("infobox")
        .about("Show a modal information dialog")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("MESSAGE")
                .help("Body text of the dialog")
                .required(true),
        )
        .arg(
            Arg::new("TITLE")
                .help("Appended to \"InfoBox: \" to form the window title")
                .required(true),
        )
}

/// Parse process-style arguments; the first item is the program name.
///
/// Arguments that are not valid Unicode are decoded lossily. Anything after the
/// title is ignored.
///
/// # Errors
/// Returns [`LaunchError::MissingArgument`] when the message or title is absent.
pub fn parse_from<I, T>(args: I) -> Result<Invocation, LaunchError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut values = args.into_iter().skip(1).map(Into::<OsString>::into);

    let message = values.next().ok_or_else(|| missing("MESSAGE", 1))?;
    let title = values.next().ok_or_else(|| missing("TITLE", 2))?;

    let extra = values.count();
    if extra > 0 {
        log::warn!("ignoring {extra} extra argument(s)");
    }

    let invocation = Invocation {
        message: lossy(message),
        title: lossy(title),
    };
    log::debug!("message={:?} title={:?}", invocation.message, invocation.title);
    Ok(invocation)
}

fn lossy(value: OsString) -> String {
    value
        .into_string()
        .unwrap_or_else(|raw| raw.to_string_lossy().into_owned())
}

fn missing(name: &'static str, position: usize) -> LaunchError {
    LaunchError::MissingArgument {
        name,
        position,
        usage: command().render_usage().to_string(),
    }
}

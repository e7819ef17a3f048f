//! `infobox <MESSAGE> <TITLE>`: show an information dialog, then print the launcher identifier.

use anyhow::Result;
use infobox::{DefaultPresenter, DialogLauncher};

fn main() -> Result<()> {
    env_logger::init();

    let invocation = infobox::parse_from(std::env::args_os())?;
    let presenter = DefaultPresenter::default();
    log::debug!("using {}", std::any::type_name::<DefaultPresenter>());

    futures::executor::block_on(DialogLauncher::run(
        &presenter,
        &invocation,
        &mut std::io::stdout(),
    ))?;

    Ok(())
}

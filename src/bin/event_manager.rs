use std::io;

use agendarank_cli::cli::EventManagerCli;
use agendarank_cli::{commands, logging};
use agendarank_core::config::GlobalConfig;
use agendarank_core::date_range::DateRange;
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = EventManagerCli::parse();
    let config = GlobalConfig::load()?;
    logging::init(&config.logging.level);

    let range = DateRange::from_args(cli.start.as_deref(), cli.end.as_deref())?;
    commands::events::run(&cli.file, range, io::stdout().lock())?;

    Ok(())
}

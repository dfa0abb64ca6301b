use std::io;

use agendarank_cli::cli::MusicManagerCli;
use agendarank_cli::commands::import::{self, ImportOptions};
use agendarank_cli::logging;
use agendarank_core::config::GlobalConfig;
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = MusicManagerCli::parse();
    let config = GlobalConfig::load()?;
    logging::init(&config.logging.level);

    let options = ImportOptions::resolve(cli, &config.importer);
    import::run(&options, io::stdout().lock())?;

    Ok(())
}

use std::io;

use anyhow::Result;
use clap::Parser;
use mailprefs::{
    cli::{self, Args},
    config::Config,
    logging,
};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();

    let config = Config::load_from_file(args.config.as_deref())?;

    cli::run(&args, &config, &mut io::stdout().lock())
}

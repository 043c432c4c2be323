mod contact;
mod delete;
mod export;
mod folders;
mod import;

use std::{io::Write, path::PathBuf};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};

use crate::{account::Account, config::Config, store::Store};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Config file, defaults to `$XDG_CONFIG_HOME/mailprefs/config.toml`
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Account to operate on, may be omitted if only one account is configured
    #[arg(long)]
    pub account: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show what deleting a message from a folder does
    Delete {
        /// Server id of the folder
        folder: String,
    },
    /// List the folders of the account with their settings
    Folders,
    /// Export folder settings that differ from the defaults
    Export {
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Import previously exported folder settings
    Import { file: PathBuf },
    /// Show the contact name for an email address
    Contact { address: String },
}

pub fn run(args: &Args, config: &Config, out: &mut impl Write) -> Result<()> {
    let store = Store::open(config.statedir()).context("state should be loadable")?;
    let (name, account_config) = config.account(args.account.as_deref())?;
    let account = Account::resolve(name, account_config, &store)
        .with_context(|| format!("account {name} should be resolvable"))?;

    match &args.command {
        Command::Delete { folder } => delete::run(&store, &account, folder, out),
        Command::Folders => folders::run(&store, &account, out),
        Command::Export { output } => export::run(&store, &account, output.as_deref(), out),
        Command::Import { file } => import::run(&store, &account, file),
        Command::Contact { address } => contact::run(&store, address, out),
    }
}

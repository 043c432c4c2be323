use std::io::Write;

use anyhow::{Context as _, Result, anyhow};

use crate::{account::Account, delete::LocalDeleteOperation, folder::FolderRepository};

pub fn run(
    folders: &impl FolderRepository,
    account: &Account,
    server_id: &str,
    out: &mut impl Write,
) -> Result<()> {
    let folder_id = folders
        .folder_id(account.name(), server_id)
        .context("folder should be queryable")?
        .ok_or_else(|| anyhow!("folder {server_id} does not exist in {}", account.name()))?;
    let operation = LocalDeleteOperation::decide(account, folder_id);

    writeln!(out, "{operation}, {}", account.delete_policy())?;
    Ok(())
}

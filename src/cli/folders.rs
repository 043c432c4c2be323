use std::io::Write;

use anyhow::{Context as _, Result};

use crate::{
    account::Account,
    folder::{FolderFlag, FolderRepository},
};

pub fn run(folders: &impl FolderRepository, account: &Account, out: &mut impl Write) -> Result<()> {
    let details = folders
        .remote_folder_details(account)
        .context("folders should be queryable")?;
    for details in details {
        let folder = details.folder();
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            folder.id(),
            folder.server_id(),
            folder.folder_type(),
            FolderFlag::format(details.flags()).unwrap_or_default()
        )?;
    }

    Ok(())
}

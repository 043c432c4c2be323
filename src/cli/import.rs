use std::{fs::read_to_string, path::Path};

use anyhow::{Context as _, Result};

use crate::{
    account::Account,
    folder::FolderRepository,
    settings::{SettingsDescriptions, import_folder_settings},
};

pub fn run(folders: &impl FolderRepository, account: &Account, file: &Path) -> Result<()> {
    let contents = read_to_string(file)
        .with_context(|| format!("folder settings {} should be readable", file.display()))?;
    import_folder_settings(&contents, account, folders, &SettingsDescriptions::folder())?;

    Ok(())
}

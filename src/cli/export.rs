use std::{io::Write, path::Path};

use anyhow::{Context as _, Result};

use crate::{
    account::Account,
    folder::FolderRepository,
    settings::{FolderSettingsExport, FolderSettingsProvider},
};

pub fn run<R: FolderRepository>(
    folders: &R,
    account: &Account,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let provider = FolderSettingsProvider::new(folders);
    let export = FolderSettingsExport::collect(account, &provider)
        .context("folder settings should be collectable")?;

    if let Some(output) = output {
        export
            .write_to(output)
            .with_context(|| format!("folder settings should be writable to {}", output.display()))?;
    } else {
        out.write_all(export.to_toml()?.as_bytes())?;
    }

    Ok(())
}

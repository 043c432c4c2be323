use std::{fs, io, path::Path};

use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::{
    account::Account,
    folder::FolderRepository,
    repository::RepositoryError,
    settings::{FolderSettings, FolderSettingsProvider, SETTINGS_VERSION},
};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("reading folders failed: {0}")]
    Repository(#[from] RepositoryError),
    #[error("serializing folder settings failed: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("writing folder settings failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Serialize)]
pub struct FolderSettingsExport<'a> {
    settings_version: u32,
    account: &'a str,
    folders: Vec<FolderSettings>,
}

impl<'a> FolderSettingsExport<'a> {
    pub fn new(account: &'a Account, folders: Vec<FolderSettings>) -> Self {
        Self {
            settings_version: SETTINGS_VERSION,
            account: account.name(),
            folders,
        }
    }

    pub fn collect<R: FolderRepository>(
        account: &'a Account,
        provider: &FolderSettingsProvider<'_, R>,
    ) -> Result<Self, RepositoryError> {
        Ok(Self::new(account, provider.folder_settings(account)?))
    }

    pub fn folders(&self) -> &[FolderSettings] {
        &self.folders
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), ExportError> {
        fs::write(path, self.to_toml()?)?;
        info!(
            account = self.account;
            "exported settings of {} folders to {}",
            self.folders.len(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use rstest::*;
    use tempfile::tempdir;

    use super::*;
    use crate::folder::FolderFlag;
    use crate::store::{NewFolderBuilder, Store};

    #[fixture]
    fn account() -> Account {
        Account::new("work")
    }

    #[rstest]
    fn test_export_writes_header_and_one_table_per_folder(account: Account) {
        let export = FolderSettingsExport::new(
            &account,
            vec![
                FolderSettings::from_flags("INBOX".to_string(), FolderFlag::TopGroup.into()),
                FolderSettings::from_flags("Lists".to_string(), FolderFlag::Visible.into()),
            ],
        );

        let toml = assert_ok!(export.to_toml());

        assert_starts_with!(toml, "settings_version = 3\naccount = \"work\"\n");
        assert_eq!(2, toml.matches("[[folders]]").count());
        assert_contains!(toml, "server_id = \"Lists\"");
    }

    #[rstest]
    fn test_collect_only_exports_deviating_folders(account: Account) {
        let store = assert_ok!(Store::open_in_memory());
        for (server_id, flags) in [
            ("INBOX", FolderFlag::Visible | FolderFlag::PushEnabled),
            ("Archive", FolderFlag::Visible.into()),
        ] {
            let folder = assert_ok!(
                NewFolderBuilder::default()
                    .account("work")
                    .server_id(server_id)
                    .flags(flags)
                    .build()
            );
            assert_ok!(store.insert_folder(&folder));
        }

        let provider = FolderSettingsProvider::new(&store);
        let export = assert_ok!(FolderSettingsExport::collect(&account, &provider));

        assert_eq!(1, export.folders().len());
        assert_eq!("INBOX", export.folders()[0].server_id());
    }

    #[rstest]
    fn test_write_to_creates_file(account: Account) {
        let dir = assert_ok!(tempdir());
        let file = dir.path().join("folders.toml");
        let export = FolderSettingsExport::new(&account, Vec::new());

        assert_ok!(export.write_to(&file));

        let contents = assert_ok!(fs::read_to_string(file));
        assert_contains!(contents, "account = \"work\"");
    }
}

use enumflags2::BitFlags;
use log::{debug, trace};

use crate::{
    account::Account,
    folder::{FolderFlag, FolderRepository, RemoteFolderDetails},
    repository::RepositoryError,
    settings::{FolderSettings, SettingsDescriptions},
};

/// Collects the folder settings of an account that differ from the defaults.
pub struct FolderSettingsProvider<'a, R> {
    folders: &'a R,
    descriptions: SettingsDescriptions,
}

impl<'a, R: FolderRepository> FolderSettingsProvider<'a, R> {
    pub fn new(folders: &'a R) -> Self {
        Self::with_descriptions(folders, SettingsDescriptions::folder())
    }

    pub fn with_descriptions(folders: &'a R, descriptions: SettingsDescriptions) -> Self {
        Self {
            folders,
            descriptions,
        }
    }

    /// # Panics
    ///
    /// Panics if the descriptions table lacks one of the folder settings.
    pub fn folder_settings(
        &self,
        account: &Account,
    ) -> Result<Vec<FolderSettings>, RepositoryError> {
        let details = self.folders.remote_folder_details(account)?;
        let total = details.len();
        let settings: Vec<FolderSettings> = details
            .into_iter()
            .filter(|details| !self.contains_only_default_values(details))
            .map(FolderSettings::from)
            .collect();
        debug!(
            account = account.name().as_str();
            "{} of {total} folders deviate from defaults",
            settings.len()
        );

        Ok(settings)
    }

    fn contains_only_default_values(&self, details: &RemoteFolderDetails) -> bool {
        let flags = details.flags();
        let only_defaults = BitFlags::<FolderFlag>::all().iter().all(|flag| {
            flags.contains(flag) == self.descriptions.default_value(flag.setting_key())
        });
        trace!(
            "folder {} only has defaults: {only_defaults}",
            details.folder().server_id()
        );
        only_defaults
    }
}

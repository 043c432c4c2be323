use enumflags2::BitFlags;
use log::{debug, info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    account::Account,
    folder::{FolderFlag, FolderRepository},
    repository::RepositoryError,
    settings::{SETTINGS_VERSION, SettingsDescriptions},
};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("folder settings are not parseable: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("settings version {0} is newer than the supported version {SETTINGS_VERSION}")]
    UnsupportedVersion(u32),
    #[error("applying folder settings failed: {0}")]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Deserialize)]
struct ImportedSettings {
    settings_version: u32,
    #[serde(default)]
    account: Option<String>,
    #[serde(default)]
    folders: Vec<ImportedFolder>,
}

#[derive(Debug, Deserialize)]
struct ImportedFolder {
    server_id: String,
    #[serde(rename = "inTopGroup")]
    in_top_group: Option<bool>,
    integrate: Option<bool>,
    #[serde(rename = "syncEnabled")]
    sync_enabled: Option<bool>,
    visible: Option<bool>,
    #[serde(rename = "notificationsEnabled")]
    notifications_enabled: Option<bool>,
    #[serde(rename = "pushEnabled")]
    push_enabled: Option<bool>,
}

impl ImportedFolder {
    fn flags(&self, descriptions: &SettingsDescriptions) -> BitFlags<FolderFlag> {
        [
            (FolderFlag::TopGroup, self.in_top_group),
            (FolderFlag::Integrate, self.integrate),
            (FolderFlag::SyncEnabled, self.sync_enabled),
            (FolderFlag::Visible, self.visible),
            (FolderFlag::NotificationsEnabled, self.notifications_enabled),
            (FolderFlag::PushEnabled, self.push_enabled),
        ]
        .into_iter()
        .filter(|(flag, value)| {
            value.unwrap_or_else(|| descriptions.default_value(flag.setting_key()))
        })
        .map(|(flag, _)| flag)
        .collect()
    }
}

#[derive(Debug, Default, Eq, PartialEq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Applies an exported folder settings document to `account`.
///
/// Settings missing from a folder entry take their default value. Folders the repository does not
/// know are skipped.
pub fn import_folder_settings(
    contents: &str,
    account: &Account,
    folders: &impl FolderRepository,
    descriptions: &SettingsDescriptions,
) -> Result<ImportSummary, ImportError> {
    let account_name = account.name().as_str();
    let settings: ImportedSettings = toml::from_str(contents)?;
    if settings.settings_version > SETTINGS_VERSION {
        return Err(ImportError::UnsupportedVersion(settings.settings_version));
    }
    if let Some(exported_from) = settings
        .account
        .as_deref()
        .filter(|exported_from| *exported_from != account_name)
    {
        debug!(account = account_name; "importing settings exported from {exported_from}");
    }

    let updates: Vec<(String, BitFlags<FolderFlag>)> = settings
        .folders
        .iter()
        .map(|folder| (folder.server_id.clone(), folder.flags(descriptions)))
        .collect();
    let updated = folders.update_folder_flags(account_name, &updates)?;

    let mut summary = ImportSummary::default();
    for ((server_id, _), updated) in updates.iter().zip(updated) {
        if updated {
            debug!(account = account_name; "imported settings of folder {server_id}");
            summary.imported += 1;
        } else {
            warn!(account = account_name; "skipping settings of unknown folder {server_id}");
            summary.skipped += 1;
        }
    }
    info!(
        account = account_name;
        "imported settings of {} folders, skipped {}",
        summary.imported, summary.skipped
    );

    Ok(summary)
}

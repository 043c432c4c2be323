use derive_getters::Getters;
use enumflags2::BitFlags;
use serde::Serialize;

use crate::folder::{FolderFlag, RemoteFolderDetails};

/// Settings of a folder worth persisting, keyed by its server id.
#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize)]
pub struct FolderSettings {
    server_id: String,
    #[serde(rename = "inTopGroup")]
    #[getter(skip)]
    is_in_top_group: bool,
    #[serde(rename = "integrate")]
    #[getter(skip)]
    is_integrate: bool,
    #[serde(rename = "syncEnabled")]
    #[getter(skip)]
    is_sync_enabled: bool,
    #[serde(rename = "visible")]
    #[getter(skip)]
    is_visible: bool,
    #[serde(rename = "notificationsEnabled")]
    #[getter(skip)]
    is_notifications_enabled: bool,
    #[serde(rename = "pushEnabled")]
    #[getter(skip)]
    is_push_enabled: bool,
}

impl FolderSettings {
    pub fn from_flags(server_id: String, flags: BitFlags<FolderFlag>) -> Self {
        Self {
            server_id,
            is_in_top_group: flags.contains(FolderFlag::TopGroup),
            is_integrate: flags.contains(FolderFlag::Integrate),
            is_sync_enabled: flags.contains(FolderFlag::SyncEnabled),
            is_visible: flags.contains(FolderFlag::Visible),
            is_notifications_enabled: flags.contains(FolderFlag::NotificationsEnabled),
            is_push_enabled: flags.contains(FolderFlag::PushEnabled),
        }
    }

    pub fn is_in_top_group(&self) -> bool {
        self.is_in_top_group
    }

    pub fn is_integrate(&self) -> bool {
        self.is_integrate
    }

    pub fn is_sync_enabled(&self) -> bool {
        self.is_sync_enabled
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn is_notifications_enabled(&self) -> bool {
        self.is_notifications_enabled
    }

    pub fn is_push_enabled(&self) -> bool {
        self.is_push_enabled
    }
}

impl From<RemoteFolderDetails> for FolderSettings {
    fn from(value: RemoteFolderDetails) -> Self {
        let flags = value.flags();
        Self::from_flags(value.folder().server_id().clone(), flags)
    }
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn test_from_flags_sets_matching_fields() {
        let settings = FolderSettings::from_flags(
            "Archive".to_string(),
            FolderFlag::Integrate | FolderFlag::NotificationsEnabled,
        );

        assert_eq!("Archive", settings.server_id());
        assert!(!settings.is_in_top_group());
        assert!(settings.is_integrate());
        assert!(!settings.is_sync_enabled());
        assert!(!settings.is_visible());
        assert!(settings.is_notifications_enabled());
        assert!(!settings.is_push_enabled());
    }

    #[rstest]
    fn test_serializes_under_setting_keys() {
        let settings = FolderSettings::from_flags("INBOX".to_string(), FolderFlag::Visible.into());

        let serialized = assert_ok!(toml::to_string(&settings));

        assert_contains!(serialized, "server_id = \"INBOX\"");
        assert_contains!(serialized, "inTopGroup = false");
        assert_contains!(serialized, "visible = true");
        assert_contains!(serialized, "pushEnabled = false");
    }
}

use std::collections::BTreeMap;

/// Current version of the settings schema.
pub const SETTINGS_VERSION: u32 = 3;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SettingDescription {
    default_value: bool,
}

impl SettingDescription {
    pub const fn new(default_value: bool) -> Self {
        Self { default_value }
    }

    pub fn default_value(self) -> bool {
        self.default_value
    }
}

/// Descriptions of one setting by the version they were introduced in. `None` marks the setting
/// as removed from that version on.
pub type VersionedSetting = BTreeMap<u32, Option<SettingDescription>>;

#[derive(Clone, Debug)]
pub struct SettingsDescriptions {
    settings: BTreeMap<&'static str, VersionedSetting>,
}

impl SettingsDescriptions {
    pub fn new(settings: BTreeMap<&'static str, VersionedSetting>) -> Self {
        Self { settings }
    }

    /// The folder settings known to this version.
    pub fn folder() -> Self {
        Self::new(BTreeMap::from([
            ("inTopGroup", versioned(&[(1, Some(false))])),
            ("integrate", versioned(&[(1, Some(false))])),
            ("syncEnabled", versioned(&[(1, Some(false))])),
            ("visible", versioned(&[(1, Some(true))])),
            ("notificationsEnabled", versioned(&[(2, Some(false))])),
            ("pushEnabled", versioned(&[(3, Some(false))])),
        ]))
    }

    /// Default of `key` at the highest version it is described in.
    ///
    /// # Panics
    ///
    /// Panics if `key` is unknown or was removed. Both mean the code and the descriptions table
    /// disagree.
    pub fn default_value(&self, key: &str) -> bool {
        let versioned_setting = self
            .settings
            .get(key)
            .unwrap_or_else(|| panic!("Key not found: {key}"));
        let setting = versioned_setting
            .last_key_value()
            .and_then(|(_, setting)| *setting)
            .unwrap_or_else(|| panic!("Setting description not found: {key}"));
        setting.default_value()
    }
}

fn versioned(entries: &[(u32, Option<bool>)]) -> VersionedSetting {
    entries
        .iter()
        .map(|(version, default)| (*version, default.map(SettingDescription::new)))
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;
    use crate::folder::FolderFlag;
    use enumflags2::BitFlags;

    #[rstest]
    #[case("inTopGroup", false)]
    #[case("integrate", false)]
    #[case("syncEnabled", false)]
    #[case("visible", true)]
    #[case("notificationsEnabled", false)]
    #[case("pushEnabled", false)]
    fn test_folder_defaults(#[case] key: &str, #[case] expected: bool) {
        assert_eq!(expected, SettingsDescriptions::folder().default_value(key));
    }

    #[rstest]
    fn test_every_folder_flag_is_described() {
        let descriptions = SettingsDescriptions::folder();
        for flag in BitFlags::<FolderFlag>::all() {
            descriptions.default_value(flag.setting_key());
        }
    }

    #[rstest]
    fn test_no_folder_setting_is_newer_than_settings_version() {
        let descriptions = SettingsDescriptions::folder();
        for versioned_setting in descriptions.settings.values() {
            let (version, _) = versioned_setting
                .last_key_value()
                .expect("described settings should have a version");
            assert!(*version <= SETTINGS_VERSION);
        }
    }

    #[rstest]
    fn test_default_value_uses_highest_version() {
        let descriptions = SettingsDescriptions::new(BTreeMap::from([(
            "visible",
            versioned(&[(1, Some(false)), (4, Some(true)), (2, Some(false))]),
        )]));

        assert!(descriptions.default_value("visible"));
    }

    #[rstest]
    #[should_panic(expected = "Key not found: pushEnabled")]
    fn test_default_value_panics_for_unknown_key() {
        let descriptions = SettingsDescriptions::new(BTreeMap::from([(
            "visible",
            versioned(&[(1, Some(true))]),
        )]));

        descriptions.default_value("pushEnabled");
    }

    #[rstest]
    #[should_panic(expected = "Setting description not found: integrate")]
    fn test_default_value_panics_for_removed_setting() {
        let descriptions = SettingsDescriptions::new(BTreeMap::from([(
            "integrate",
            versioned(&[(1, Some(false)), (2, None)]),
        )]));

        descriptions.default_value("integrate");
    }

    #[rstest]
    #[should_panic(expected = "Setting description not found: integrate")]
    fn test_default_value_panics_for_setting_without_versions() {
        let descriptions =
            SettingsDescriptions::new(BTreeMap::from([("integrate", VersionedSetting::new())]));

        descriptions.default_value("integrate");
    }
}

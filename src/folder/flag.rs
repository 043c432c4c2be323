use std::fmt::{Display, Write as _};

use enumflags2::{BitFlags, bitflags};

#[bitflags]
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
// DO NOT REORDER! The bitflags representation is stored in database. Changing the layout **will** break things.
pub enum FolderFlag {
    TopGroup,
    Integrate,
    SyncEnabled,
    Visible,
    NotificationsEnabled,
    PushEnabled,
}

impl FolderFlag {
    /// Key of the folder setting this flag is persisted under.
    pub fn setting_key(self) -> &'static str {
        match self {
            FolderFlag::TopGroup => "inTopGroup",
            FolderFlag::Integrate => "integrate",
            FolderFlag::SyncEnabled => "syncEnabled",
            FolderFlag::Visible => "visible",
            FolderFlag::NotificationsEnabled => "notificationsEnabled",
            FolderFlag::PushEnabled => "pushEnabled",
        }
    }

    pub fn format(flags: BitFlags<Self>) -> Option<String> {
        flags
            .iter()
            .map(|flag| flag.to_string())
            .reduce(|mut acc, flag| {
                write!(acc, " {flag}").expect("writing flag to formatting buffer should succeed");
                acc
            })
    }
}

impl Display for FolderFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.setting_key())
    }
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn test_flag_bits_keep_storage_layout() {
        assert_eq!(1, BitFlags::from(FolderFlag::TopGroup).bits());
        assert_eq!(8, BitFlags::from(FolderFlag::Visible).bits());
        assert_eq!(32, BitFlags::from(FolderFlag::PushEnabled).bits());
        assert_eq!(63, BitFlags::<FolderFlag>::all().bits());
    }

    #[rstest]
    fn test_format_joins_setting_keys() {
        let flags = FolderFlag::TopGroup | FolderFlag::Visible;
        assert_eq!("inTopGroup visible", assert_some!(FolderFlag::format(flags)));
        assert_none!(FolderFlag::format(BitFlags::empty()));
    }
}

use std::{fmt::Display, num::NonZeroI64};

#[repr(transparent)]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct FolderId(NonZeroI64);

impl TryFrom<i64> for FolderId {
    type Error = &'static str;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err("folder id should not be negative");
        }
        NonZeroI64::new(value)
            .map(Self)
            .ok_or("folder id should not be zero")
    }
}

impl TryFrom<u64> for FolderId {
    type Error = &'static str;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        i64::try_from(value)
            .map_err(|_| "folder id too large")?
            .try_into()
    }
}

impl From<FolderId> for i64 {
    fn from(value: FolderId) -> Self {
        value.0.get()
    }
}

impl From<&FolderId> for i64 {
    fn from(value: &FolderId) -> Self {
        value.0.get()
    }
}

impl Display for FolderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

use std::{fmt::Display, str::FromStr};

use derive_getters::Getters;
use enumflags2::BitFlags;
use thiserror::Error;

use crate::folder::{FolderFlag, FolderId};

#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum FolderType {
    #[default]
    Regular,
    Inbox,
    Outbox,
    Drafts,
    Sent,
    Trash,
    Spam,
    Archive,
}

impl Display for FolderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FolderType::Regular => "regular",
            FolderType::Inbox => "inbox",
            FolderType::Outbox => "outbox",
            FolderType::Drafts => "drafts",
            FolderType::Sent => "sent",
            FolderType::Trash => "trash",
            FolderType::Spam => "spam",
            FolderType::Archive => "archive",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
#[error("unknown folder type {folder_type}")]
pub struct UnknownFolderTypeError {
    folder_type: String,
}

impl FromStr for FolderType {
    type Err = UnknownFolderTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "regular" => Ok(FolderType::Regular),
            "inbox" => Ok(FolderType::Inbox),
            "outbox" => Ok(FolderType::Outbox),
            "drafts" => Ok(FolderType::Drafts),
            "sent" => Ok(FolderType::Sent),
            "trash" => Ok(FolderType::Trash),
            "spam" => Ok(FolderType::Spam),
            "archive" => Ok(FolderType::Archive),
            _ => Err(Self::Err {
                folder_type: value.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Getters)]
pub struct RemoteFolder {
    #[getter(skip)]
    id: FolderId,
    server_id: String,
    name: String,
    #[getter(skip)]
    folder_type: FolderType,
}

impl RemoteFolder {
    pub fn new(id: FolderId, server_id: String, name: String, folder_type: FolderType) -> Self {
        Self {
            id,
            server_id,
            name,
            folder_type,
        }
    }

    pub fn id(&self) -> FolderId {
        self.id
    }

    pub fn folder_type(&self) -> FolderType {
        self.folder_type
    }
}

/// A folder that exists on the server together with its local settings.
#[derive(Clone, Debug, Eq, PartialEq, Getters)]
pub struct RemoteFolderDetails {
    folder: RemoteFolder,
    #[getter(skip)]
    flags: BitFlags<FolderFlag>,
}

impl RemoteFolderDetails {
    pub fn new(folder: RemoteFolder, flags: BitFlags<FolderFlag>) -> Self {
        Self { folder, flags }
    }

    pub fn flags(&self) -> BitFlags<FolderFlag> {
        self.flags
    }

    pub fn is_in_top_group(&self) -> bool {
        self.flags.contains(FolderFlag::TopGroup)
    }

    pub fn is_integrate(&self) -> bool {
        self.flags.contains(FolderFlag::Integrate)
    }

    pub fn is_sync_enabled(&self) -> bool {
        self.flags.contains(FolderFlag::SyncEnabled)
    }

    pub fn is_visible(&self) -> bool {
        self.flags.contains(FolderFlag::Visible)
    }

    pub fn is_notifications_enabled(&self) -> bool {
        self.flags.contains(FolderFlag::NotificationsEnabled)
    }

    pub fn is_push_enabled(&self) -> bool {
        self.flags.contains(FolderFlag::PushEnabled)
    }
}

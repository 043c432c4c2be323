use thiserror::Error;

use crate::folder::UnknownFolderTypeError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database access failed: {0}")]
    Db(#[from] rusqlite::Error),
    #[error("stored folder is inconsistent: {0}")]
    FolderType(#[from] UnknownFolderTypeError),
    #[error("stored folder id {0} is invalid")]
    InvalidFolderId(i64),
    #[error("stored folder flags {0:#b} are invalid")]
    InvalidFolderFlags(u8),
}

mod flag;
mod folder_id;
mod remote_folder;

pub use flag::FolderFlag;
pub use folder_id::FolderId;
pub use remote_folder::FolderType;
pub use remote_folder::RemoteFolder;
pub use remote_folder::RemoteFolderDetails;
pub use remote_folder::UnknownFolderTypeError;

use enumflags2::BitFlags;

use crate::{account::Account, repository::RepositoryError};

/// Read and write access to the folders of all accounts.
pub trait FolderRepository {
    /// All folders of `account` that exist on the server, ordered by folder id.
    fn remote_folder_details(
        &self,
        account: &Account,
    ) -> Result<Vec<RemoteFolderDetails>, RepositoryError>;

    fn folder_id(
        &self,
        account: &str,
        server_id: &str,
    ) -> Result<Option<FolderId>, RepositoryError>;

    /// Applies every `(server_id, flags)` update or none of them. Reports per update whether the
    /// folder exists on the server; local-only and unknown folders are left untouched.
    fn update_folder_flags(
        &self,
        account: &str,
        updates: &[(String, BitFlags<FolderFlag>)],
    ) -> Result<Vec<bool>, RepositoryError>;
}

use derive_builder::Builder;
use enumflags2::BitFlags;
use log::trace;
use rusqlite::{OptionalExtension, Row, params};

use crate::{
    account::Account,
    folder::{FolderFlag, FolderId, FolderRepository, FolderType, RemoteFolder, RemoteFolderDetails},
    repository::RepositoryError,
    store::Store,
};

/// A folder as announced by the sync engine.
#[derive(Builder, Clone, Debug)]
#[builder(setter(into))]
pub struct NewFolder {
    account: String,
    server_id: String,
    /// Defaults to the server id.
    #[builder(default, setter(into, strip_option))]
    name: Option<String>,
    #[builder(default)]
    folder_type: FolderType,
    #[builder(default = "FolderFlag::Visible.into()")]
    flags: BitFlags<FolderFlag>,
    #[builder(default)]
    local_only: bool,
}

impl Store {
    pub fn insert_folder(&self, folder: &NewFolder) -> Result<FolderId, RepositoryError> {
        trace!("storing folder {folder:?}");
        let mut stmt = self.db.prepare_cached(
            "insert into folders (account,server_id,name,type,flags,local_only) values (?1,?2,?3,?4,?5,?6)",
        )?;
        stmt.execute(params![
            folder.account,
            folder.server_id,
            folder.name.as_deref().unwrap_or(&folder.server_id),
            folder.folder_type.to_string(),
            folder.flags.bits(),
            folder.local_only,
        ])?;
        let id = self.db.last_insert_rowid();

        FolderId::try_from(id).map_err(|_| RepositoryError::InvalidFolderId(id))
    }
}

fn remote_folder_details(row: &Row<'_>) -> Result<RemoteFolderDetails, RepositoryError> {
    let id: i64 = row.get(0)?;
    let id = FolderId::try_from(id).map_err(|_| RepositoryError::InvalidFolderId(id))?;
    let folder_type: String = row.get(3)?;
    let folder = RemoteFolder::new(id, row.get(1)?, row.get(2)?, folder_type.parse()?);
    let flags: u8 = row.get(4)?;
    let flags = BitFlags::<FolderFlag>::from_bits(flags)
        .map_err(|_| RepositoryError::InvalidFolderFlags(flags))?;

    Ok(RemoteFolderDetails::new(folder, flags))
}

impl FolderRepository for Store {
    fn remote_folder_details(
        &self,
        account: &Account,
    ) -> Result<Vec<RemoteFolderDetails>, RepositoryError> {
        trace!("getting remote folders of {}", account.name());
        let mut stmt = self.db.prepare_cached(
            "select id,server_id,name,type,flags from folders where account = ?1 and local_only = 0 order by id",
        )?;
        let mut rows = stmt.query([account.name()])?;
        let mut details = Vec::new();
        while let Some(row) = rows.next()? {
            details.push(remote_folder_details(row)?);
        }

        Ok(details)
    }

    fn folder_id(
        &self,
        account: &str,
        server_id: &str,
    ) -> Result<Option<FolderId>, RepositoryError> {
        trace!("getting id of folder {server_id} in {account}");
        let mut stmt = self
            .db
            .prepare_cached("select id from folders where account = ?1 and server_id = ?2")?;
        let id: Option<i64> = stmt
            .query_one([account, server_id], |row| row.get(0))
            .optional()?;

        id.map(|id| FolderId::try_from(id).map_err(|_| RepositoryError::InvalidFolderId(id)))
            .transpose()
    }

    fn update_folder_flags(
        &self,
        account: &str,
        updates: &[(String, BitFlags<FolderFlag>)],
    ) -> Result<Vec<bool>, RepositoryError> {
        let tx = self.db.unchecked_transaction()?;
        let mut updated = Vec::with_capacity(updates.len());
        {
            let mut stmt = tx.prepare_cached(
                "update folders set flags = ?1 where account = ?2 and server_id = ?3 and local_only = 0",
            )?;
            for (server_id, flags) in updates {
                trace!("updating flags of folder {server_id} in {account} to {flags:?}");
                updated.push(stmt.execute(params![flags.bits(), account, server_id])? > 0);
            }
        }
        tx.commit()?;

        Ok(updated)
    }
}

use std::fmt::Display;

use derive_getters::Getters;
use log::{debug, warn};
use serde::Deserialize;

use crate::{
    config::AccountConfig,
    folder::{FolderId, FolderRepository},
    repository::RepositoryError,
};

/// What happens on the server when a message is deleted locally.
#[derive(Copy, Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    Never,
    #[default]
    OnDelete,
    MarkAsRead,
}

impl Display for DeletePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeletePolicy::Never => write!(f, "keep on server"),
            DeletePolicy::OnDelete => write!(f, "delete on server"),
            DeletePolicy::MarkAsRead => write!(f, "mark as read on server"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Getters)]
pub struct Account {
    name: String,
    #[getter(skip)]
    trash_folder_id: Option<FolderId>,
    #[getter(skip)]
    spam_folder_id: Option<FolderId>,
    #[getter(skip)]
    delete_policy: DeletePolicy,
}

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            trash_folder_id: None,
            spam_folder_id: None,
            delete_policy: DeletePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_trash_folder(mut self, trash_folder_id: FolderId) -> Self {
        self.trash_folder_id = Some(trash_folder_id);
        self
    }

    #[must_use]
    pub fn with_spam_folder(mut self, spam_folder_id: FolderId) -> Self {
        self.spam_folder_id = Some(spam_folder_id);
        self
    }

    /// Builds the account from its configuration, looking up the configured special folders by
    /// server id.
    pub fn resolve(
        name: &str,
        config: &AccountConfig,
        folders: &impl FolderRepository,
    ) -> Result<Self, RepositoryError> {
        Ok(Self {
            name: name.to_string(),
            trash_folder_id: resolve_folder(name, config.trash_folder().as_deref(), folders)?,
            spam_folder_id: resolve_folder(name, config.spam_folder().as_deref(), folders)?,
            delete_policy: config.delete_policy(),
        })
    }

    pub fn has_trash_folder(&self) -> bool {
        self.trash_folder_id.is_some()
    }

    pub fn trash_folder_id(&self) -> Option<FolderId> {
        self.trash_folder_id
    }

    pub fn spam_folder_id(&self) -> Option<FolderId> {
        self.spam_folder_id
    }

    pub fn delete_policy(&self) -> DeletePolicy {
        self.delete_policy
    }
}

fn resolve_folder(
    account: &str,
    server_id: Option<&str>,
    folders: &impl FolderRepository,
) -> Result<Option<FolderId>, RepositoryError> {
    let Some(server_id) = server_id else {
        return Ok(None);
    };
    let folder_id = folders.folder_id(account, server_id)?;
    if let Some(folder_id) = folder_id {
        debug!(account; "resolved folder {server_id} to {folder_id}");
    } else {
        warn!(account; "configured folder {server_id} does not exist");
    }

    Ok(folder_id)
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use rstest::*;

    use super::*;
    use crate::store::{NewFolderBuilder, Store};

    #[fixture]
    fn store() -> Store {
        let store = assert_ok!(Store::open_in_memory());
        for server_id in ["INBOX", "Trash", "Junk"] {
            let folder = assert_ok!(
                NewFolderBuilder::default()
                    .account("work")
                    .server_id(server_id)
                    .build()
            );
            assert_ok!(store.insert_folder(&folder));
        }
        store
    }

    fn account_config(contents: &str) -> AccountConfig {
        assert_ok!(toml::from_str(contents))
    }

    #[rstest]
    fn test_resolve_looks_up_special_folders(store: Store) {
        let config = account_config(
            r#"
            trash_folder = "Trash"
            spam_folder = "Junk"
            delete_policy = "mark_as_read"
            "#,
        );

        let account = assert_ok!(Account::resolve("work", &config, &store));

        assert!(account.has_trash_folder());
        assert_eq!(
            account.trash_folder_id(),
            assert_ok!(store.folder_id("work", "Trash"))
        );
        assert_eq!(
            account.spam_folder_id(),
            assert_ok!(store.folder_id("work", "Junk"))
        );
        assert_eq!(DeletePolicy::MarkAsRead, account.delete_policy());
    }

    #[rstest]
    fn test_resolve_drops_unknown_folders(store: Store) {
        let config = account_config(r#"trash_folder = "Deleted Items""#);

        let account = assert_ok!(Account::resolve("work", &config, &store));

        assert!(!account.has_trash_folder());
        assert_none!(account.spam_folder_id());
        assert_eq!(DeletePolicy::OnDelete, account.delete_policy());
    }

    #[rstest]
    fn test_resolve_does_not_cross_accounts(store: Store) {
        let config = account_config(r#"trash_folder = "Trash""#);

        let account = assert_ok!(Account::resolve("private", &config, &store));

        assert!(!account.has_trash_folder());
    }
}

//! Local delete policy.
//!
//! This only decides what happens to the local copy of a message. The operation performed on the
//! server is controlled by [`Account::delete_policy`].

use std::fmt::Display;

use crate::{account::Account, folder::FolderId};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LocalDeleteOperation {
    DeleteImmediately,
    MoveToTrash,
}

impl LocalDeleteOperation {
    pub fn decide(account: &Account, folder_id: FolderId) -> Self {
        if is_delete_immediately(account, folder_id) {
            Self::DeleteImmediately
        } else {
            Self::MoveToTrash
        }
    }
}

impl Display for LocalDeleteOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocalDeleteOperation::DeleteImmediately => write!(f, "delete immediately"),
            LocalDeleteOperation::MoveToTrash => write!(f, "move to trash"),
        }
    }
}

/// Whether deleting a message in `folder_id` removes it right away instead of moving it to the
/// trash folder.
pub fn is_delete_immediately(account: &Account, folder_id: FolderId) -> bool {
    // without a trash folder there is nowhere to move messages to
    if !account.has_trash_folder() {
        return true;
    }

    // trash and spam are terminal, deleting from them must not create new trash entries
    let is_trash_folder = account.trash_folder_id() == Some(folder_id);
    let is_spam_folder = account.spam_folder_id() == Some(folder_id);

    is_trash_folder || is_spam_folder
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use rstest::*;

    use super::*;

    fn folder_id(id: i64) -> FolderId {
        assert_ok!(FolderId::try_from(id))
    }

    #[fixture]
    fn account() -> Account {
        Account::new("work")
            .with_trash_folder(folder_id(2))
            .with_spam_folder(folder_id(3))
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(42)]
    fn test_without_trash_folder_every_delete_is_immediate(#[case] id: i64) {
        let account = Account::new("work").with_spam_folder(folder_id(3));

        assert!(is_delete_immediately(&account, folder_id(id)));
    }

    #[rstest]
    fn test_delete_from_trash_folder_is_immediate(account: Account) {
        assert!(is_delete_immediately(&account, folder_id(2)));
    }

    #[rstest]
    fn test_delete_from_spam_folder_is_immediate(account: Account) {
        assert!(is_delete_immediately(&account, folder_id(3)));
    }

    #[rstest]
    #[case(1)]
    #[case(4)]
    fn test_delete_from_other_folders_moves_to_trash(account: Account, #[case] id: i64) {
        assert!(!is_delete_immediately(&account, folder_id(id)));
        assert_eq!(
            LocalDeleteOperation::MoveToTrash,
            LocalDeleteOperation::decide(&account, folder_id(id))
        );
    }

    #[rstest]
    fn test_without_spam_folder_only_trash_is_immediate() {
        let account = Account::new("work").with_trash_folder(folder_id(2));

        assert!(is_delete_immediately(&account, folder_id(2)));
        assert!(!is_delete_immediately(&account, folder_id(3)));
    }

    #[rstest]
    fn test_operation_displays_decision(account: Account) {
        assert_eq!(
            "delete immediately",
            LocalDeleteOperation::decide(&account, folder_id(2)).to_string()
        );
        assert_eq!(
            "move to trash",
            LocalDeleteOperation::decide(&account, folder_id(1)).to_string()
        );
    }
}

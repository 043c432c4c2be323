use log::trace;
use rusqlite::{OptionalExtension, params};

use crate::{
    contact::{Contact, ContactRepository, EmailAddress},
    repository::RepositoryError,
    store::Store,
};

impl Store {
    /// Inserts or replaces the contact with the same address.
    pub fn insert_contact(&self, contact: &Contact) -> Result<(), RepositoryError> {
        trace!("storing contact {contact:?}");
        let mut stmt = self
            .db
            .prepare_cached("insert or replace into contacts (email,name) values (?1,?2)")?;
        stmt.execute(params![contact.email().as_str(), contact.name()])?;

        Ok(())
    }
}

impl ContactRepository for Store {
    fn contact_for(&self, email: &EmailAddress) -> Result<Option<Contact>, RepositoryError> {
        trace!("getting contact for {email}");
        let mut stmt = self
            .db
            .prepare_cached("select name from contacts where email = ?1")?;
        let name: Option<Option<String>> = stmt
            .query_one([email.as_str()], |row| row.get(0))
            .optional()?;

        Ok(name.map(|name| Contact::new(email.clone(), name)))
    }
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use rstest::*;

    use super::*;

    fn email(address: &str) -> EmailAddress {
        assert_ok!(address.parse::<EmailAddress>())
    }

    #[fixture]
    fn store() -> Store {
        assert_ok!(Store::open_in_memory())
    }

    #[rstest]
    fn test_contact_for_unknown_address_is_none(store: Store) {
        assert_none!(assert_ok!(store.contact_for(&email("bob@example.org"))));
    }

    #[rstest]
    fn test_insert_contact_replaces_existing(store: Store) {
        assert_ok!(store.insert_contact(&Contact::new(
            email("alice@example.org"),
            Some("Alice".to_string())
        )));
        assert_ok!(store.insert_contact(&Contact::new(
            email("ALICE@example.org"),
            Some("Alice Liddell".to_string())
        )));

        let contact = assert_some!(assert_ok!(store.contact_for(&email("alice@example.org"))));

        assert_eq!(&Some("Alice Liddell".to_string()), contact.name());
    }

    #[rstest]
    fn test_contact_without_name_is_found(store: Store) {
        assert_ok!(store.insert_contact(&Contact::new(email("noname@example.org"), None)));

        let contact = assert_some!(assert_ok!(store.contact_for(&email("noname@example.org"))));

        assert_none!(contact.name());
        assert_eq!(&email("noname@example.org"), contact.email());
    }
}

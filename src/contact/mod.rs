mod email_address;

pub use email_address::EmailAddress;
pub use email_address::InvalidEmailAddressError;

use derive_getters::Getters;
use log::{debug, warn};

use crate::repository::RepositoryError;

#[derive(Clone, Debug, Eq, Getters, PartialEq)]
pub struct Contact {
    email: EmailAddress,
    name: Option<String>,
}

impl Contact {
    pub fn new(email: EmailAddress, name: Option<String>) -> Self {
        Self { email, name }
    }
}

pub trait ContactRepository {
    /// Looks up the contact for `email`, ignoring case.
    fn contact_for(&self, email: &EmailAddress) -> Result<Option<Contact>, RepositoryError>;
}

pub trait ContactNameProvider {
    fn name_for_address(&self, address: &str) -> Option<String>;
}

pub struct RealContactNameProvider<'a, R> {
    contacts: &'a R,
}

impl<'a, R: ContactRepository> RealContactNameProvider<'a, R> {
    pub fn new(contacts: &'a R) -> Self {
        Self { contacts }
    }
}

impl<R: ContactRepository> ContactNameProvider for RealContactNameProvider<'_, R> {
    fn name_for_address(&self, address: &str) -> Option<String> {
        let email = match address.parse::<EmailAddress>() {
            Ok(email) => email,
            Err(err) => {
                debug!("not looking up contact: {err}");
                return None;
            }
        };

        match self.contacts.contact_for(&email) {
            Ok(contact) => contact.and_then(|contact| contact.name),
            Err(err) => {
                warn!("looking up contact {email} failed: {err}");
                None
            }
        }
    }
}

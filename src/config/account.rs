use derive_getters::Getters;
use serde::Deserialize;

use crate::account::DeletePolicy;

#[derive(Debug, Deserialize, Getters)]
pub struct AccountConfig {
    trash_folder: Option<String>,
    spam_folder: Option<String>,
    #[serde(default)]
    #[getter(skip)]
    delete_policy: DeletePolicy,
}

impl AccountConfig {
    pub fn delete_policy(&self) -> DeletePolicy {
        self.delete_policy
    }
}

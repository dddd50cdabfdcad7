use serde::{Deserialize, Serialize};

use super::ids::{AccountId, AccountImageId};

/// An image attached to a company profile. Managed outside of provisioning; only read
/// here to build profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountImage {
    pub id: AccountImageId,
    pub account_id: AccountId,
    pub url: String,
}

impl AccountImage {
    pub fn new(account_id: AccountId, url: impl Into<String>) -> Self {
        Self {
            id: AccountImageId::new(),
            account_id,
            url: url.into(),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{AccessTokenId, AccountId};

/// Opaque access credential issued on sign-up and sign-in. Clients only ever see the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub id: AccessTokenId,
    pub account_id: AccountId,
    /// Whether the token was issued in an elevated context.
    pub elevated: bool,
    pub issued_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn issue(account_id: AccountId, elevated: bool) -> Self {
        Self {
            id: AccessTokenId::new(),
            account_id,
            elevated,
            issued_at: Utc::now(),
        }
    }
}

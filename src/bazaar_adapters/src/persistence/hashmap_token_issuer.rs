use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use bazaar_core::{AccessToken, AccessTokenId, AccountId, TokenIssuer, TokenIssuerError};

#[derive(Default, Clone)]
pub struct HashMapTokenIssuer {
    tokens: Arc<RwLock<HashMap<AccessTokenId, AccessToken>>>,
}

impl HashMapTokenIssuer {
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn get(&self, id: &AccessTokenId) -> Option<AccessToken> {
        self.tokens.read().await.get(id).cloned()
    }

    pub async fn tokens_for(&self, account_id: &AccountId) -> Vec<AccessToken> {
        let tokens = self.tokens.read().await;
        tokens
            .values()
            .filter(|token| &token.account_id == account_id)
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl TokenIssuer for HashMapTokenIssuer {
    async fn create_access_token(
        &self,
        elevated: bool,
        account_id: &AccountId,
    ) -> Result<AccessToken, TokenIssuerError> {
        let token = AccessToken::issue(*account_id, elevated);
        self.tokens.write().await.insert(token.id, token.clone());
        Ok(token)
    }
}

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use bazaar_core::{AccountId, AccountImage, AccountImageRepository, AccountImageRepositoryError};

#[derive(Default, Clone)]
pub struct HashMapAccountImageRepository {
    images: Arc<RwLock<HashMap<AccountId, Vec<AccountImage>>>>,
}

impl HashMapAccountImageRepository {
    pub fn new() -> Self {
        Self {
            images: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn attach(&self, image: AccountImage) {
        self.images
            .write()
            .await
            .entry(image.account_id)
            .or_default()
            .push(image);
    }
}

#[async_trait::async_trait]
impl AccountImageRepository for HashMapAccountImageRepository {
    async fn find_by_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<AccountImage>, AccountImageRepositoryError> {
        let images = self.images.read().await;
        Ok(images.get(account_id).cloned().unwrap_or_default())
    }
}

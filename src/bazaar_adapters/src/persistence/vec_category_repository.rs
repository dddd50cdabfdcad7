use std::sync::Arc;
use tokio::sync::RwLock;

use bazaar_core::{Category, CategoryFilter, CategoryRepository, CategoryRepositoryError};

/// In-memory category store. Keeps insertion order, which is the order lookups scan in.
#[derive(Default, Clone)]
pub struct VecCategoryRepository {
    categories: Arc<RwLock<Vec<Category>>>,
}

impl VecCategoryRepository {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories: Arc::new(RwLock::new(categories)),
        }
    }

    /// Seed a category. Categories are managed outside provisioning; this exists for
    /// setup code and tests.
    pub async fn insert(&self, category: Category) {
        self.categories.write().await.push(category);
    }
}

#[async_trait::async_trait]
impl CategoryRepository for VecCategoryRepository {
    async fn find_one(
        &self,
        filter: &CategoryFilter,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        let categories = self.categories.read().await;
        Ok(categories
            .iter()
            .find(|category| filter.matches(category))
            .cloned())
    }
}

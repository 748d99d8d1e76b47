use super::{ProductRepository, RepositoryError, name_matches};
use crate::models::ProductRecord;
use async_trait::async_trait;
use chrono::Local;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

#[derive(Debug)]
pub struct InMemoryProductRepository {
    products: RwLock<BTreeMap<i64, ProductRecord>>,
    next_id: AtomicI64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<ProductRecord>, RepositoryError> {
        Ok(self.products.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductRecord>, RepositoryError> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<ProductRecord>, RepositoryError> {
        let needle = name.trim().to_lowercase();
        Ok(self
            .products
            .read()
            .await
            .values()
            .filter(|product| name_matches(product.name.as_deref(), &needle))
            .cloned()
            .collect())
    }

    async fn create(&self, mut product: ProductRecord) -> Result<ProductRecord, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let now = Local::now().naive_local();
        product.id = Some(id);
        product.created_at = Some(now);
        product.updated_at = Some(now);

        self.products.write().await.insert(id, product.clone());
        Ok(product)
    }

    async fn update(
        &self,
        id: i64,
        mut product: ProductRecord,
    ) -> Result<Option<ProductRecord>, RepositoryError> {
        let mut products = self.products.write().await;
        let Some(existing) = products.get_mut(&id) else {
            return Ok(None);
        };

        product.id = Some(id);
        product.created_at = existing.created_at;
        product.updated_at = Some(Local::now().naive_local());
        *existing = product.clone();
        Ok(Some(product))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.products.write().await.remove(&id).is_some())
    }
}

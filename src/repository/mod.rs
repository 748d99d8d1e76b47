use crate::config::AppConfig;
use crate::models::ProductRecord;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Process-local store, used when no database is configured.
pub mod memory;

/// MongoDB-backed store with a counter document for numeric ids.
pub mod mongo;

pub use memory::InMemoryProductRepository;
pub use mongo::MongoProductRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("mongodb error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("product id sequence unavailable")]
    SequenceUnavailable,
}

/// Storage seam for product records.
///
/// Implementations assign `id`, `createdAt` and `updatedAt`; callers are
/// expected to have validated the record beforehand. Listings are ordered
/// by ascending id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<ProductRecord>, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductRecord>, RepositoryError>;

    /// Case-insensitive substring match on `name`. An empty query matches everything.
    async fn search_by_name(&self, name: &str) -> Result<Vec<ProductRecord>, RepositoryError>;

    /// Stores a new record under a fresh id and returns it as stored.
    async fn create(&self, product: ProductRecord) -> Result<ProductRecord, RepositoryError>;

    /// Replaces the record at `id`, keeping its creation time. `None` if absent.
    async fn update(
        &self,
        id: i64,
        product: ProductRecord,
    ) -> Result<Option<ProductRecord>, RepositoryError>;

    /// Returns `false` when nothing was stored under `id`.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}

pub type SharedRepository = Arc<dyn ProductRepository>;

/// Picks the backing store from configuration: MongoDB when `MONGODB_URI`
/// is set, the in-memory store otherwise.
pub async fn from_config(config: &AppConfig) -> Result<SharedRepository, RepositoryError> {
    match &config.mongodb_uri {
        Some(uri) => {
            let repository =
                MongoProductRepository::connect(uri, &config.db_name, &config.products_collection)
                    .await?;
            tracing::info!(
                database = %config.db_name,
                collection = %config.products_collection,
                "using mongodb product repository"
            );
            Ok(Arc::new(repository))
        }
        None => {
            tracing::info!("MONGODB_URI not set, using in-memory product repository");
            Ok(Arc::new(InMemoryProductRepository::new()))
        }
    }
}

pub(crate) fn name_matches(name: Option<&str>, needle_lowercase: &str) -> bool {
    needle_lowercase.is_empty()
        || name.is_some_and(|name| name.to_lowercase().contains(needle_lowercase))
}

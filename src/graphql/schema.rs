use super::health::HealthQuery;
use super::product::ProductQuery;
use crate::repository::SharedRepository;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

/// Root query: health/info plus product reads.
#[derive(MergedObject, Default)]
pub struct QueryRoot(HealthQuery, ProductQuery);

/// Writes go through the REST API, which validates every record, so the
/// schema is query-only.
pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Builds the schema with the product repository available to resolvers.
///
/// ```rust,no_run
/// use catalog_backend::graphql::schema::create_schema;
/// use catalog_backend::repository::InMemoryProductRepository;
/// use std::sync::Arc;
///
/// let schema = create_schema(Arc::new(InMemoryProductRepository::new()));
/// ```
pub fn create_schema(repository: SharedRepository) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        EmptyMutation::default(),
        EmptySubscription::default(),
    )
    .data(repository)
    .finish()
}

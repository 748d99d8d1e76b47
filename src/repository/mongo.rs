use super::{ProductRepository, RepositoryError};
use crate::models::ProductRecord;
use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const COUNTERS_COLLECTION: &str = "counters";

#[derive(Debug, Deserialize)]
struct Counter {
    seq: i64,
}

/// Stored shape of a product. The price is kept as a decimal string so no
/// digits are lost to BSON doubles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductDocument {
    id: i64,
    name: Option<String>,
    description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    price: Option<Decimal>,
    stock: Option<i32>,
    created_at: Option<NaiveDateTime>,
    updated_at: Option<NaiveDateTime>,
}

impl ProductDocument {
    fn new(id: i64, product: ProductRecord) -> Self {
        Self {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl From<ProductDocument> for ProductRecord {
    fn from(document: ProductDocument) -> Self {
        Self {
            id: Some(document.id),
            name: document.name,
            description: document.description,
            price: document.price,
            stock: document.stock,
            created_at: document.created_at,
            updated_at: document.updated_at,
        }
    }
}

/// Stores products as documents keyed by a numeric `id` field.
///
/// Ids come from a per-collection counter document that is incremented
/// atomically, so concurrent creates never share an id.
#[derive(Clone)]
pub struct MongoProductRepository {
    products: Collection<ProductDocument>,
    counters: Collection<Document>,
    sequence_name: String,
}

impl MongoProductRepository {
    pub async fn connect(
        uri: &str,
        db_name: &str,
        collection_name: &str,
    ) -> Result<Self, RepositoryError> {
        let client = Client::with_uri_str(uri).await?;
        let database = client.database(db_name);
        Ok(Self {
            products: database.collection(collection_name),
            counters: database.collection(COUNTERS_COLLECTION),
            sequence_name: collection_name.to_string(),
        })
    }

    async fn next_id(&self) -> Result<i64, RepositoryError> {
        let counter = self
            .counters
            .find_one_and_update(
                doc! { "_id": self.sequence_name.as_str() },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or(RepositoryError::SequenceUnavailable)?;

        let counter: Counter = mongodb::bson::from_document(counter)
            .map_err(|_| RepositoryError::SequenceUnavailable)?;
        Ok(counter.seq)
    }

    async fn find_many(&self, filter: Document) -> Result<Vec<ProductRecord>, RepositoryError> {
        let cursor = self.products.find(filter).sort(doc! { "id": 1 }).await?;
        let documents: Vec<ProductDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(ProductRecord::from).collect())
    }
}

/// Escapes regex metacharacters so the query is matched literally.
fn literal_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if "\\^$.|?*+()[]{}".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    async fn find_all(&self) -> Result<Vec<ProductRecord>, RepositoryError> {
        self.find_many(doc! {}).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductRecord>, RepositoryError> {
        let document = self.products.find_one(doc! { "id": id }).await?;
        Ok(document.map(ProductRecord::from))
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<ProductRecord>, RepositoryError> {
        let pattern = literal_pattern(name.trim());
        self.find_many(doc! { "name": { "$regex": pattern, "$options": "i" } })
            .await
    }

    async fn create(&self, mut product: ProductRecord) -> Result<ProductRecord, RepositoryError> {
        let now = Local::now().naive_local();
        let id = self.next_id().await?;
        product.created_at = Some(now);
        product.updated_at = Some(now);

        let document = ProductDocument::new(id, product);
        self.products.insert_one(&document).await?;
        tracing::debug!(id, "product inserted");
        Ok(document.into())
    }

    async fn update(
        &self,
        id: i64,
        mut product: ProductRecord,
    ) -> Result<Option<ProductRecord>, RepositoryError> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        product.created_at = existing.created_at;
        product.updated_at = Some(Local::now().naive_local());

        let document = ProductDocument::new(id, product);
        let result = self.products.replace_one(doc! { "id": id }, &document).await?;
        Ok((result.matched_count > 0).then(|| document.into()))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = self.products.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_pattern_escapes_metacharacters() {
        assert_eq!(literal_pattern("widget"), "widget");
        assert_eq!(literal_pattern("a.b"), "a\\.b");
        assert_eq!(literal_pattern("(x+y)*"), "\\(x\\+y\\)\\*");
        assert_eq!(literal_pattern(""), "");
    }

    #[test]
    fn test_literal_pattern_leaves_plain_punctuation() {
        // Outside a character class and without the `x` option these are literals.
        assert_eq!(literal_pattern("t-shirt"), "t-shirt");
        assert_eq!(literal_pattern("1/2 inch"), "1/2 inch");
        assert_eq!(literal_pattern("#1 seller"), "#1 seller");
        assert_eq!(literal_pattern("[a-z]"), "\\[a-z\\]");
    }

    #[test]
    fn test_document_keeps_exact_price_as_string() {
        let product = ProductRecord::new("Widget", "12345678901234567.89".parse().unwrap(), 2);
        let document = ProductDocument::new(4, product);

        let bson = mongodb::bson::to_document(&document).unwrap();
        assert_eq!(bson.get_str("price").unwrap(), "12345678901234567.89");
        assert_eq!(bson.get_i64("id").unwrap(), 4);

        let back: ProductDocument = mongodb::bson::from_document(bson).unwrap();
        assert_eq!(back, document);
        let record = ProductRecord::from(back);
        assert_eq!(record.id, Some(4));
        assert_eq!(record.price, document.price);
    }

    /// Requires a running MongoDB reachable through `MONGODB_URI`.
    #[tokio::test]
    #[ignore]
    async fn test_mongo_round_trip() {
        dotenv::dotenv().ok();
        let uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
        let repository = MongoProductRepository::connect(&uri, "catalog_test", "products_test")
            .await
            .expect("Failed to connect to MongoDB");

        let created = repository
            .create(ProductRecord::new("Mongo Widget", rust_decimal::Decimal::new(5, 0), 1))
            .await
            .unwrap();
        let id = created.id.unwrap();

        let found = repository.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.name.as_deref(), Some("Mongo Widget"));
        assert!(!repository.search_by_name("mongo widget").await.unwrap().is_empty());
        assert!(repository.delete(id).await.unwrap());
    }
}

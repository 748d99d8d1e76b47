use crate::models::ProductRecord;
use crate::repository::SharedRepository;
use async_graphql::{Context, Object, Result};

/// Read-only product queries backed by the shared repository.
#[derive(Default)]
pub struct ProductQuery;

#[Object]
impl ProductQuery {
    async fn products(&self, ctx: &Context<'_>) -> Result<Vec<ProductRecord>> {
        let repository = ctx.data::<SharedRepository>()?;
        Ok(repository.find_all().await?)
    }

    async fn product(&self, ctx: &Context<'_>, id: i64) -> Result<Option<ProductRecord>> {
        let repository = ctx.data::<SharedRepository>()?;
        Ok(repository.find_by_id(id).await?)
    }

    /// Case-insensitive substring match on the product name.
    async fn search_products(&self, ctx: &Context<'_>, name: String) -> Result<Vec<ProductRecord>> {
        let repository = ctx.data::<SharedRepository>()?;
        Ok(repository.search_by_name(&name).await?)
    }
}

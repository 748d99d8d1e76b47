use crate::error::{ApiError, ErrorBody};
use crate::models::ProductRecord;
use crate::repository::ProductRepository;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring of the product name; empty matches all.
    #[serde(default)]
    pub name: String,
}

fn bad_request<E>(code: &'static str, err: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let body = ErrorBody {
        error: code,
        message: err.to_string(),
        violations: None,
    };
    actix_web::error::InternalError::from_response(err, HttpResponse::BadRequest().json(body))
        .into()
}

/// Rejects malformed JSON bodies with the same error shape as every other
/// client error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| bad_request("INVALID_BODY", err))
}

/// Non-numeric or out-of-range `{id}` segments.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| bad_request("INVALID_ID", err))
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| bad_request("INVALID_QUERY", err))
}

/// # List Products
///
/// Returns every stored product, ordered by id.
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products", body = [ProductRecord]),
        (status = 500, description = "Storage error", body = ErrorBody)
    ),
    tag = "Products"
)]
#[get("/products")]
pub async fn list_products(
    repository: web::Data<dyn ProductRepository>,
) -> Result<HttpResponse, ApiError> {
    let products = repository.find_all().await?;
    Ok(HttpResponse::Ok().json(products))
}

/// # Search Products
///
/// ```text
/// GET /api/products/search?name=widget
/// ```
#[utoipa::path(
    get,
    path = "/api/products/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching products", body = [ProductRecord]),
        (status = 500, description = "Storage error", body = ErrorBody)
    ),
    tag = "Products"
)]
#[get("/products/search")]
pub async fn search_products(
    query: web::Query<SearchQuery>,
    repository: web::Data<dyn ProductRepository>,
) -> Result<HttpResponse, ApiError> {
    let products = repository.search_by_name(&query.name).await?;
    Ok(HttpResponse::Ok().json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = ProductRecord),
        (status = 400, description = "Id is not a 64-bit integer", body = ErrorBody),
        (status = 404, description = "No product with this id", body = ErrorBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    ),
    tag = "Products"
)]
#[get("/products/{id}")]
pub async fn get_product(
    id: web::Path<i64>,
    repository: web::Data<dyn ProductRepository>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let product = repository
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound(id))?;
    Ok(HttpResponse::Ok().json(product))
}

/// # Create Product
///
/// The record is validated first; on failure every violation is returned
/// and nothing is stored. Client-supplied `id` and timestamps are ignored.
///
/// ## Example Request
/// ```json
/// { "name": "Widget", "description": "Blue", "price": 10.5, "stock": 3 }
/// ```
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductRecord,
    responses(
        (status = 201, description = "Product created", body = ProductRecord),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    ),
    tag = "Products"
)]
#[post("/products")]
pub async fn create_product(
    body: web::Json<ProductRecord>,
    repository: web::Data<dyn ProductRepository>,
) -> Result<HttpResponse, ApiError> {
    let product = body.into_inner();
    if let Err(errors) = product.validate() {
        tracing::debug!(%errors, "rejected product create");
        return Err(errors.into());
    }

    let created = repository.create(product).await?;
    tracing::info!(id = ?created.id, "product created");
    Ok(HttpResponse::Created().json(created))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductRecord,
    responses(
        (status = 200, description = "Product updated", body = ProductRecord),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 400, description = "Id is not a 64-bit integer", body = ErrorBody),
        (status = 404, description = "No product with this id", body = ErrorBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    ),
    tag = "Products"
)]
#[put("/products/{id}")]
pub async fn update_product(
    id: web::Path<i64>,
    body: web::Json<ProductRecord>,
    repository: web::Data<dyn ProductRepository>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let product = body.into_inner();
    if let Err(errors) = product.validate() {
        tracing::debug!(id, %errors, "rejected product update");
        return Err(errors.into());
    }

    let updated = repository
        .update(id, product)
        .await?
        .ok_or(ApiError::NotFound(id))?;
    tracing::info!(id, "product updated");
    Ok(HttpResponse::Ok().json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Id is not a 64-bit integer", body = ErrorBody),
        (status = 404, description = "No product with this id", body = ErrorBody),
        (status = 500, description = "Storage error", body = ErrorBody)
    ),
    tag = "Products"
)]
#[delete("/products/{id}")]
pub async fn delete_product(
    id: web::Path<i64>,
    repository: web::Data<dyn ProductRepository>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    if !repository.delete(id).await? {
        return Err(ApiError::NotFound(id));
    }
    tracing::info!(id, "product deleted");
    Ok(HttpResponse::NoContent().finish())
}

/// # Route Configuration
///
/// `search` is registered ahead of `{id}` so it is never parsed as an id.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .service(list_products)
        .service(search_products)
        .service(get_product)
        .service(create_product)
        .service(update_product)
        .service(delete_product);
}

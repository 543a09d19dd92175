//! HTTP handlers for Products API

use axum::{extract::State, routing::get, Json, Router};
use axum_helpers::{
    errors::responses::{InternalServerErrorResponse, ValidationErrorResponse},
    ValidatedJson, ValidatedQuery,
};
use database::mongodb::DocumentStore;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{CreatedProduct, Product, ProductQuery};
use crate::records::ProductRecord;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product),
    components(
        schemas(Product, CreatedProduct),
        responses(ValidationErrorResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Products", description = "Mobile catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router, mounted by the app under `/api/products`
pub fn router<S: DocumentStore + ?Sized + 'static>(service: ProductService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products::<S>).post(create_product::<S>))
        .with_state(shared_service)
}

/// List products
///
/// Records from the store carry a string `id`. When the query is for mobiles
/// (or has no category) and the store is empty or unreachable, the built-in
/// sample catalog is returned instead.
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Products, each with a string `id` unless from the sample catalog", body = Vec<Product>),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<S: DocumentStore + ?Sized>(
    State(service): State<Arc<ProductService<S>>>,
    ValidatedQuery(query): ValidatedQuery<ProductQuery>,
) -> ProductResult<Json<Vec<ProductRecord>>> {
    let products = service.list_products(query).await?;
    Ok(Json(products))
}

/// Create a product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = Product,
    responses(
        (status = 200, description = "Product created", body = CreatedProduct),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<S: DocumentStore + ?Sized>(
    State(service): State<Arc<ProductService<S>>>,
    ValidatedJson(input): ValidatedJson<Product>,
) -> ProductResult<Json<CreatedProduct>> {
    let created = service.create_product(input).await?;
    Ok(Json(created))
}

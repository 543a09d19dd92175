//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::{diagnostics, root};

/// Combined OpenAPI documentation for the Mobile Store API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rohan Mobile Store API",
        version = "0.1.0",
        description = "Mobile phone catalog backed by MongoDB, with a built-in sample catalog fallback"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(root::index, root::hello, diagnostics::test_connection),
    components(schemas(root::MessageResponse, diagnostics::DiagnosticsResponse)),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Store", description = "Service status endpoints"),
        (name = "Products", description = "Mobile catalog endpoints")
    )
)]
pub struct ApiDoc;

//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::ping::PingResponse;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        description = "PostgreSQL-backed REST API for creating and listing products"
    ),
    external_docs(url = "https://swagger.io", description = "Find more info here"),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(crate::api::ping::ping),
    components(schemas(PingResponse)),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Health", description = "Liveness check"),
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

//! Router assembly

use axum::Router;
use axum_helpers::server::create_router;
use domain_products::{ProductRepository, ProductService};

use crate::{api, openapi::ApiDoc};

/// Build the full application router
///
/// - `GET /ping`
/// - `POST /api/products`, `GET /api/products`
/// - Swagger UI at `/docs`, OpenAPI JSON at `/docs/openapi.json`
pub fn build_router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let routes = api::ping::router().nest("/api", api::routes(service));
    create_router::<ApiDoc>(routes)
}

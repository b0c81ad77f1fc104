//! API routes module

pub mod ping;
pub mod products;

use axum::Router;
use domain_products::{ProductRepository, ProductService};

/// Routes served under `/api`
pub fn routes<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new().nest("/products", products::router(service))
}

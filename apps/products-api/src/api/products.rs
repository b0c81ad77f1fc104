//! Products API routes

use axum::Router;
use database::postgres::DatabaseConnection;
use domain_products::{handlers, PgProductRepository, ProductRepository, ProductService};

/// Product service backed by PostgreSQL
pub fn pg_service(db: DatabaseConnection) -> ProductService<PgProductRepository> {
    ProductService::new(PgProductRepository::new(db))
}

/// Create products router
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    handlers::router(service)
}

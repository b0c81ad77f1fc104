//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with OpenAPI documentation under `/docs`
//! - Listener binding and serving with graceful shutdown
//! - Shutdown coordination with a bounded cleanup phase
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{bind, create_production_app, create_router};
//!
//! let router = create_router::<ApiDoc>(routes);
//! let listener = bind(&config.server).await?;
//! create_production_app(listener, router, Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod shutdown;

pub use app::{bind, create_production_app, create_router, DOCS_PATH, OPENAPI_JSON_PATH};
pub use shutdown::{shutdown_signal, ShutdownCoordinator};

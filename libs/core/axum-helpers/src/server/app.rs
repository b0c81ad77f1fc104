use super::shutdown::{shutdown_signal, ShutdownCoordinator};
use crate::errors::handlers::{method_not_allowed, not_found};
use axum::Router;
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};
use utoipa::OpenApi;
use utoipa_swagger_ui::{Config, SwaggerUi};

/// Path of the interactive API documentation.
pub const DOCS_PATH: &str = "/docs";

/// Path of the machine-readable OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/docs/openapi.json";

/// Creates a configured Axum router with documentation and common middleware.
///
/// This function sets up:
/// - Swagger UI at [`DOCS_PATH`] backed by `T::openapi()` at [`OPENAPI_JSON_PATH`],
///   with every operation expanded and deep linking off
/// - The application routes, merged at the root
/// - Request tracing
/// - JSON 404 and 405 fallbacks
///
/// Routes must already have their state applied.
///
/// # Example
/// ```ignore
/// use axum::{routing::get, Router};
/// use utoipa::OpenApi;
/// use axum_helpers::server::create_router;
///
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let routes = Router::new()
///     .route("/ping", get(ping))
///     .nest("/api", api_routes);
///
/// let router = create_router::<ApiDoc>(routes);
/// ```
pub fn create_router<T>(routes: Router) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .merge(
            SwaggerUi::new(DOCS_PATH)
                .url(OPENAPI_JSON_PATH, T::openapi())
                .config(Config::default().doc_expansion("full").deep_linking(false)),
        )
        .merge(routes)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Binds a TCP listener to the configured address.
///
/// A bind error is returned unlogged; the caller decides how to report it.
pub async fn bind(server_config: &ServerConfig) -> io::Result<TcpListener> {
    let listener = TcpListener::bind(server_config.address()).await?;

    info!("Server listening on {}", listener.local_addr()?);
    Ok(listener)
}

/// Production server with coordinated shutdown and cleanup.
///
/// On SIGINT/SIGTERM the server stops accepting connections and drains
/// in-flight requests. Once serving has ended the coordinator notifies the
/// cleanup task, which runs `cleanup` for at most `shutdown_timeout`.
///
/// # Example
/// ```ignore
/// use std::time::Duration;
/// use axum_helpers::server::{bind, create_production_app};
///
/// let db_for_cleanup = db.clone();
/// let cleanup = async move {
///     db_for_cleanup.close().await.ok();
/// };
///
/// let listener = bind(&config.server).await?;
/// create_production_app(listener, router, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    listener: TcpListener,
    router: Router,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (coordinator, shutdown_rx) = ShutdownCoordinator::new();
    let cleanup_task = tokio::spawn(run_cleanup(shutdown_rx, shutdown_timeout, cleanup));

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    coordinator.shutdown();

    if let Err(e) = cleanup_task.await {
        tracing::error!("Cleanup task failed: {}", e);
    }

    serve_result
}

/// Waits for the shutdown notification, then runs `cleanup` under `timeout`.
///
/// Returns `true` when cleanup finished in time.
async fn run_cleanup<F>(
    mut shutdown_rx: broadcast::Receiver<()>,
    timeout: Duration,
    cleanup: F,
) -> bool
where
    F: Future<Output = ()>,
{
    // A closed channel means the coordinator is gone; clean up anyway
    let _ = shutdown_rx.recv().await;

    info!("Starting cleanup tasks (timeout: {:?})", timeout);
    match tokio::time::timeout(timeout, cleanup).await {
        Ok(_) => {
            info!("Cleanup completed successfully");
            true
        }
        Err(_) => {
            tracing::warn!("Cleanup exceeded timeout of {:?}, forcing shutdown", timeout);
            false
        }
    }
}

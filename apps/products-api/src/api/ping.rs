//! Liveness endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct PingResponse {
    #[schema(example = "it worked!")]
    pub pong: String,
}

/// Check that the server is up
///
/// Never touches the database.
#[utoipa::path(
    get,
    path = "/ping",
    tag = "Health",
    responses(
        (status = 200, description = "Server is up", body = PingResponse)
    )
)]
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        pong: "it worked!".to_string(),
    })
}

pub fn router() -> Router {
    Router::new().route("/ping", get(ping))
}

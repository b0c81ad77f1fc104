//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserializes the body, then runs the `validator` crate's `Validate` trait.
/// Both a body that does not match `T` (missing or mistyped fields, bad JSON)
/// and a body that fails validation are rejected with 400 and a structured
/// [`ErrorResponse`](crate::errors::ErrorResponse); nothing reaches the handler.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateProduct {
///     #[validate(length(max = 255))]
///     title: String,
///     price: f64,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateProduct>) -> String {
///     format!("Creating product: {}", payload.title)
/// }
///
/// let app = Router::new().route("/products", post(create));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode, header},
        routing::post,
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use serde_json::Value;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Payload {
        #[validate(length(max = 5))]
        name: String,
        amount: f64,
    }

    async fn echo(ValidatedJson(payload): ValidatedJson<Payload>) -> String {
        format!("{}:{}", payload.name, payload.amount)
    }

    async fn send(body: &str) -> (StatusCode, Vec<u8>) {
        let app = Router::new().route("/", post(echo));
        let response = app
            .oneshot(
                HttpRequest::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_valid_payload_reaches_handler() {
        let (status, body) = send(r#"{"name":"pen","amount":2.5}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"pen:2.5");
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let (status, body) = send(r#"{"name":"pen"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "INVALID_JSON");
        assert!(json["message"].as_str().unwrap().contains("amount"));
    }

    #[tokio::test]
    async fn test_wrong_type_is_bad_request() {
        let (status, _) = send(r#"{"name":"pen","amount":"cheap"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (status, _) = send(r#"{"name":"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_failed_validation_is_bad_request() {
        let (status, body) = send(r#"{"name":"fountain pen","amount":2.5}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "VALIDATION_ERROR");
        assert!(json["details"]["name"].is_array());
    }
}

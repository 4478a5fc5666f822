//! Request extractors with JSON error responses

use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::warn;

use super::handlers::ErrorResponse;

/// JSON body extractor that returns proper JSON error responses
///
/// The body is decoded whatever the `Content-Type` header says, so clients
/// such as `curl -d` that send form headers with a JSON payload are accepted.
pub struct JsonRequest<T>(pub T);

impl<T, S> FromRequest<S> for JsonRequest<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            warn!("Failed to read request body: {}", e);
            bad_request("Failed to read request body".to_string())
        })?;

        serde_json::from_slice::<T>(&bytes).map(JsonRequest).map_err(|err| {
            let error_message = match err.classify() {
                Category::Data => format!("Invalid JSON data: {}", err),
                Category::Syntax | Category::Eof => "Malformed JSON".to_string(),
                Category::Io => "Invalid JSON request".to_string(),
            };

            warn!("JSON parsing error: {}", error_message);
            bad_request(error_message)
        })
    }
}

fn bad_request(message: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

/// The `{id}` path segment, or an empty string when the route has none.
///
/// Lets `/productos/` reach the handlers so they can answer the missing-id
/// case themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductoId(pub String);

impl<S> FromRequestParts<S> for ProductoId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = match Path::<HashMap<String, String>>::from_request_parts(parts, state).await {
            Ok(Path(mut params)) => params.remove("id").unwrap_or_default(),
            Err(_) => String::new(),
        };
        Ok(ProductoId(id))
    }
}

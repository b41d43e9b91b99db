use actix_web::{
    dev::Payload,
    http::{header, StatusCode},
    web, FromRequest, HttpRequest,
};
use futures_util::future::{ready, FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON body extractor that reports deserialization failures against the
/// offending field path (`company`, `experience_id`, ...).
///
/// The body size limit comes from `web::PayloadConfig` in app data.
/// Usage: take `payload: JsonBody<NewExperience>` in a handler.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for JsonBody<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if !is_json_content_type(req) {
            return ready(Err(AppError::UnsupportedMediaType(
                "Request must be application/json".to_string()
            ).into())).boxed_local();
        }

        let body = web::Bytes::from_request(req, payload);
        let path = req.path().to_string();

        async move {
            let body = body.await.map_err(|e| {
                tracing::debug!(path = %path, "Failed to read request body: {}", e);
                body_error(e)
            })?;

            parse_json(&body).map(JsonBody).map_err(|e| {
                tracing::debug!(path = %path, "Rejected JSON payload: {}", e);
                e.into()
            })
        }
        .boxed_local()
    }
}

/// Deserializes `body` the way `serde_json::from_slice` does, keeping the
/// path of the value that failed.
pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);

    let value = serde_path_to_error::deserialize(&mut deserializer)?;
    deserializer.end().map_err(AppError::from_trailing_json)?;

    Ok(value)
}

fn is_json_content_type(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|essence| {
            let essence = essence.trim().to_ascii_lowercase();
            essence == "application/json" || essence.ends_with("+json")
        })
        .unwrap_or(false)
}

fn body_error(err: actix_web::Error) -> AppError {
    if err.as_response_error().status_code() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.to_string())
    } else {
        AppError::BadRequest(err.to_string())
    }
}

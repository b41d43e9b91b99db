use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use serde::Serialize;

#[derive(Debug)]
pub enum AppError {
    ValidationError(Vec<FieldError>),
    BadRequest(String),
    UnsupportedMediaType(String),
    PayloadTooLarge(String),
    DatabaseUnavailable(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(errors) => {
                let messages = errors.iter()
                    .map(|e| format!("{}:{}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::UnsupportedMediaType(msg) => write!(f, "Unsupported media type: {}", msg),
            AppError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            AppError::DatabaseUnavailable(msg) => write!(f, "Database unavailable: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg)
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => {
                serde_json::json!({
                    "error": "Validation failed",
                    "details": errors
                })
            }
            // Storage details stay in the logs.
            AppError::DatabaseUnavailable(_) => {
                serde_json::json!({"error": "Database unavailable"})
            }
            AppError::InternalError(_) => {
                serde_json::json!({"error": "Internal server error"})
            }
            _ => {
                serde_json::json!({"error": self.to_string()})
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::DatabaseUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", err);

        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                AppError::DatabaseUnavailable(err.to_string())
            }
            _ => AppError::InternalError(format!("Database error: {}", err))
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for AppError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        let inner = err.into_inner();

        // An empty path renders as "."; missing fields are reported there too.
        let field = if path == "." {
            missing_field_name(&inner).unwrap_or_else(|| "body".to_string())
        } else {
            path
        };

        AppError::ValidationError(vec![FieldError { field, message: inner.to_string() }])
    }
}

impl AppError {
    pub fn from_trailing_json(err: serde_json::Error) -> Self {
        AppError::ValidationError(vec![FieldError {
            field: "body".to_string(),
            message: err.to_string(),
        }])
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

fn missing_field_name(err: &serde_json::Error) -> Option<String> {
    err.to_string()
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    #[allow(dead_code)]
    struct Payload {
        title: String,
        company: String,
    }

    fn decode(body: &str) -> AppError {
        let mut de = serde_json::Deserializer::from_str(body);
        serde_path_to_error::deserialize::<_, Payload>(&mut de)
            .map(|_| ())
            .map_err(AppError::from)
            .unwrap_err()
    }

    fn fields(err: AppError) -> Vec<FieldError> {
        match err {
            AppError::ValidationError(fields) => fields,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_field_is_named() {
        let fields = fields(decode(r#"{"company":"Acme"}"#));

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, "title");
        assert!(fields[0].message.starts_with("missing field"));
    }

    #[test]
    fn mistyped_field_is_named() {
        let err = decode(r#"{"title":"SRE","company":42}"#);

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(fields(err)[0].field, "company");
    }

    #[test]
    fn syntax_error_falls_back_to_body() {
        assert_eq!(fields(decode(r#"{"title":"#))[0].field, "body");
    }

    #[test]
    fn unsupported_media_type_maps_to_415() {
        let app_err = AppError::UnsupportedMediaType("text/plain".into());
        assert_eq!(app_err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn pool_timeout_is_reported_as_unavailable() {
        let app_err = AppError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(app_err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn other_database_errors_are_internal() {
        let app_err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(app_err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

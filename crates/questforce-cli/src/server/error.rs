//! Error envelopes and request extractors.

use std::any::Any;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{debug, error};
use questforce_core::{ErrorKind, QuestforceError};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// A failed request, rendered as `{"error": message}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: INTERNAL_MESSAGE.to_string(),
        }
    }

}

#[cfg(test)]
impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<QuestforceError> for ApiError {
    fn from(err: QuestforceError) -> Self {
        match err.kind() {
            ErrorKind::Validation => {
                debug!("Rejected request: {err}");
                let message = match err {
                    QuestforceError::InvalidInput { field, reason }
                        if !reason.starts_with(field.as_str()) =>
                    {
                        format!("{field} {reason}")
                    }
                    QuestforceError::InvalidInput { reason, .. } => reason,
                    other => other.to_string(),
                };
                Self::bad_request(message)
            }
            ErrorKind::NotFound => {
                debug!("{err}");
                Self {
                    status: StatusCode::NOT_FOUND,
                    message: err.to_string(),
                }
            }
            ErrorKind::Internal => {
                error!("Request failed: {err}");
                Self::internal()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!("Rejected request body: {rejection}");
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        debug!("Rejected query string: {rejection}");
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// JSON body extractor whose rejections use the `{error}` envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor whose rejections use the `{error}` envelope.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Catches handler panics and answers with a generic 500 envelope.
pub fn create_panic_handler() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response>
{
    CatchPanicLayer::custom(handle_panic)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let panic_message = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    error!("Handler panicked: {panic_message}");
    ApiError::internal().into_response()
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

use crate::session::SessionError;

/// ErrorBody
///
/// JSON shape of every error response: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct ErrorBody {
    pub error: String,
}

/// AppError
///
/// Failures a handler reports to the client. Guard rejections are not errors: they are
/// redirects produced by the `ActiveSession` extractor.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A form was submitted with missing or out-of-range fields.
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Session(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "request rejected");
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

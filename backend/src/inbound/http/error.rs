//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers turn
//! domain failures into consistent JSON bodies and status codes:
//!
//! ```json
//! {"status":"fail","code":"not_found","message":"pokemon 999 not found","traceId":"…"}
//! ```
//!
//! `status` is `fail` for caller errors and `error` for server faults.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

/// Wire shape of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// `fail` for 4xx responses, `error` for 5xx responses.
    #[schema(example = "fail")]
    pub status: String,
    /// Stable machine-readable error code.
    #[schema(value_type = String, example = "not_found")]
    pub code: ErrorCode,
    /// Human-readable description.
    #[schema(example = "pokemon 999 not found")]
    pub message: String,
    /// Correlation identifier matching the `Trace-Id` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Structured context for caller errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub details: Option<Value>,
}

// Conflict stays on 400: duplicate favourites are documented as a bad request.
fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest | ErrorCode::Conflict => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<&Error> for ErrorBody {
    fn from(error: &Error) -> Self {
        let code = error.code();
        let (status, message, details) = if code.is_client_error() {
            ("fail", error.message().to_owned(), error.details().cloned())
        } else if code == ErrorCode::ServiceUnavailable {
            ("error", error.message().to_owned(), None)
        } else {
            ("error", REDACTED_MESSAGE.to_owned(), None)
        };
        Self {
            status: status.to_owned(),
            code,
            message,
            trace_id: error.trace_id().map(str::to_owned),
            details,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(code = ?self.code(), message = %self.message(), "request failed");
        } else {
            warn!(code = ?self.code(), message = %self.message(), "request rejected");
        }

        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorBody::from(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(REDACTED_MESSAGE)
    }
}

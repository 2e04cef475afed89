use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Tracker service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("email not allowed")]
    EmailNotAllowed,
    #[error("invalid expense")]
    InvalidExpense,
    #[error("no code sent")]
    NoCodeSent,
    #[error("code expired")]
    CodeExpired,
    #[error("code mismatch")]
    CodeMismatch,
    #[error("unauthorized")]
    Unauthorized,
    #[error("expense not found")]
    ExpenseNotFound,
    #[error("transport failure: {0}")]
    Transport(anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl TrackerError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::EmailNotAllowed => "EMAIL_NOT_ALLOWED",
            Self::InvalidExpense => "INVALID_EXPENSE",
            Self::NoCodeSent => "NO_CODE_SENT",
            Self::CodeExpired => "CODE_EXPIRED",
            Self::CodeMismatch => "CODE_MISMATCH",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::ExpenseNotFound => "EXPENSE_NOT_FOUND",
            Self::Transport(_) => "TRANSPORT_FAILURE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidEmail | Self::InvalidExpense => StatusCode::BAD_REQUEST,
            Self::EmailNotAllowed => StatusCode::FORBIDDEN,
            Self::NoCodeSent | Self::CodeExpired | Self::CodeMismatch | Self::Unauthorized => {
                StatusCode::UNAUTHORIZED
            }
            Self::ExpenseNotFound => StatusCode::NOT_FOUND,
            Self::Transport(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 5xx only — the tower-http TraceLayer already records method/uri/status
        // for all requests. 4xx are expected client errors; logging them here would
        // be noise. Transport and internal errors need the anyhow chain logged so
        // the root cause is traceable.
        match &self {
            Self::Transport(e) => {
                tracing::error!(error = %e, kind = "TRANSPORT_FAILURE", "transport failure");
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, kind = "INTERNAL", "internal error");
            }
            _ => {}
        }
        let body = serde_json::json!({
            "success": false,
            "kind": self.kind(),
            "error": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

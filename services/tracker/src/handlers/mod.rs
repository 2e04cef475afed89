use axum::Json;
use serde::Serialize;

pub mod expense;
pub mod export;
pub mod login;

/// Acknowledgement body returned by every mutating endpoint.
#[derive(Serialize)]
pub struct Ack {
    pub success: bool,
}

pub(crate) fn ack() -> Json<Ack> {
    Json(Ack { success: true })
}

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use outlay_core::health::{healthz, readyz};
use outlay_core::middleware::request_id_layer;

use crate::handlers::{
    expense::{create_expense, delete_expense, list_expenses, update_expense},
    export::email_report,
    login::{request_code, verify_code},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Login
        .route("/api/request-code", post(request_code))
        .route("/api/verify-code", post(verify_code))
        // Expenses
        .route("/api/expenses", get(list_expenses))
        .route("/api/expenses", post(create_expense))
        .route("/api/expenses/{id}", put(update_expense))
        .route("/api/expenses/{id}", delete(delete_expense))
        // Export
        .route("/api/email-pdf", post(email_report))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TrackerError;
use crate::handlers::{Ack, ack};
use crate::session::Session;
use crate::state::AppState;
use crate::usecase::expense::{
    CreateExpenseInput, CreateExpenseUseCase, DeleteExpenseUseCase, ListExpensesUseCase,
    UpdateExpenseInput, UpdateExpenseUseCase,
};

// ── GET /api/expenses ────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ExpenseResponse {
    pub id: String,
    pub name: String,
    pub amount: f64,
    #[serde(serialize_with = "outlay_core::serde::to_rfc3339_ms")]
    pub date: chrono::DateTime<chrono::Utc>,
}

pub async fn list_expenses(
    _session: Session,
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpenseResponse>>, TrackerError> {
    let usecase = ListExpensesUseCase {
        repo: state.expense_repo(),
    };
    let expenses = usecase.execute().await?;
    Ok(Json(
        expenses
            .into_iter()
            .map(|e| ExpenseResponse {
                id: e.id.to_string(),
                name: e.name,
                amount: e.amount,
                date: e.created_at,
            })
            .collect(),
    ))
}

// ── POST /api/expenses ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ExpenseRequest {
    pub name: String,
    pub amount: f64,
}

pub async fn create_expense(
    _session: Session,
    State(state): State<AppState>,
    Json(body): Json<ExpenseRequest>,
) -> Result<Json<Ack>, TrackerError> {
    let usecase = CreateExpenseUseCase {
        repo: state.expense_repo(),
    };
    usecase
        .execute(CreateExpenseInput {
            name: body.name,
            amount: body.amount,
        })
        .await?;
    Ok(ack())
}

// ── PUT /api/expenses/{id} ───────────────────────────────────────────────────

pub async fn update_expense(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ExpenseRequest>,
) -> Result<Json<Ack>, TrackerError> {
    let usecase = UpdateExpenseUseCase {
        repo: state.expense_repo(),
    };
    usecase
        .execute(
            id,
            UpdateExpenseInput {
                name: body.name,
                amount: body.amount,
            },
        )
        .await?;
    Ok(ack())
}

// ── DELETE /api/expenses/{id} ────────────────────────────────────────────────

pub async fn delete_expense(
    _session: Session,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Ack>, TrackerError> {
    let usecase = DeleteExpenseUseCase {
        repo: state.expense_repo(),
    };
    usecase.execute(id).await?;
    Ok(ack())
}

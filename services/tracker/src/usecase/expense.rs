use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::ExpenseRepository;
use crate::domain::types::{Expense, valid_expense_fields};
use crate::error::TrackerError;

// ── CreateExpense ────────────────────────────────────────────────────────────

pub struct CreateExpenseInput {
    pub name: String,
    pub amount: f64,
}

pub struct CreateExpenseUseCase<R: ExpenseRepository> {
    pub repo: R,
}

impl<R: ExpenseRepository> CreateExpenseUseCase<R> {
    pub async fn execute(&self, input: CreateExpenseInput) -> Result<Expense, TrackerError> {
        if !valid_expense_fields(&input.name, input.amount) {
            return Err(TrackerError::InvalidExpense);
        }
        let expense = Expense {
            id: Uuid::now_v7(),
            name: input.name,
            amount: input.amount,
            created_at: Utc::now(),
        };
        self.repo.insert(&expense).await?;
        Ok(expense)
    }
}

// ── ListExpenses ─────────────────────────────────────────────────────────────

pub struct ListExpensesUseCase<R: ExpenseRepository> {
    pub repo: R,
}

impl<R: ExpenseRepository> ListExpensesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Expense>, TrackerError> {
        self.repo.list().await
    }
}

// ── UpdateExpense ────────────────────────────────────────────────────────────

pub struct UpdateExpenseInput {
    pub name: String,
    pub amount: f64,
}

pub struct UpdateExpenseUseCase<R: ExpenseRepository> {
    pub repo: R,
}

impl<R: ExpenseRepository> UpdateExpenseUseCase<R> {
    pub async fn execute(&self, id: Uuid, input: UpdateExpenseInput) -> Result<(), TrackerError> {
        if !valid_expense_fields(&input.name, input.amount) {
            return Err(TrackerError::InvalidExpense);
        }
        let updated = self.repo.update(id, &input.name, input.amount).await?;
        if !updated {
            return Err(TrackerError::ExpenseNotFound);
        }
        Ok(())
    }
}

// ── DeleteExpense ────────────────────────────────────────────────────────────

pub struct DeleteExpenseUseCase<R: ExpenseRepository> {
    pub repo: R,
}

impl<R: ExpenseRepository> DeleteExpenseUseCase<R> {
    /// Idempotent: deleting an id that was never inserted is not an error.
    pub async fn execute(&self, id: Uuid) -> Result<(), TrackerError> {
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            tracing::debug!(%id, "delete on absent expense (no-op)");
        }
        Ok(())
    }
}

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, QueryFilter, QueryOrder, sea_query::OnConflict,
};
use uuid::Uuid;

use outlay_tracker_schema::{expenses, login_codes};

use crate::domain::repository::{ExpenseRepository, LoginCodeRepository};
use crate::domain::types::{Expense, LoginCode};
use crate::error::TrackerError;

// ── Expense repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbExpenseRepository {
    pub db: DatabaseConnection,
}

impl ExpenseRepository for DbExpenseRepository {
    async fn insert(&self, expense: &Expense) -> Result<(), TrackerError> {
        expenses::ActiveModel {
            id: Set(expense.id),
            name: Set(expense.name.clone()),
            amount: Set(expense.amount),
            created_at: Set(expense.created_at),
        }
        .insert(&self.db)
        .await
        .context("insert expense")?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Expense>, TrackerError> {
        let models = expenses::Entity::find()
            .order_by_desc(expenses::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list expenses")?;
        Ok(models.into_iter().map(expense_from_model).collect())
    }

    async fn update(&self, id: Uuid, name: &str, amount: f64) -> Result<bool, TrackerError> {
        let Some(model) = expenses::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find expense by id")?
        else {
            return Ok(false);
        };
        let mut am = model.into_active_model();
        am.name = Set(name.to_owned());
        am.amount = Set(amount);
        am.update(&self.db).await.context("update expense")?;
        Ok(true)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, TrackerError> {
        let result = expenses::Entity::delete_many()
            .filter(expenses::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete expense")?;
        Ok(result.rows_affected > 0)
    }
}

fn expense_from_model(model: expenses::Model) -> Expense {
    Expense {
        id: model.id,
        name: model.name,
        amount: model.amount,
        created_at: model.created_at,
    }
}

// ── Login-code repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLoginCodeRepository {
    pub db: DatabaseConnection,
}

impl LoginCodeRepository for DbLoginCodeRepository {
    async fn put(&self, code: &LoginCode) -> Result<(), TrackerError> {
        let am = login_codes::ActiveModel {
            email: Set(code.email.clone()),
            code: Set(code.code.clone()),
            expires_at: Set(code.expires_at),
            created_at: Set(code.created_at),
        };
        // One pending code per email: a new request overwrites the old row.
        login_codes::Entity::insert(am)
            .on_conflict(
                OnConflict::column(login_codes::Column::Email)
                    .update_columns([
                        login_codes::Column::Code,
                        login_codes::Column::ExpiresAt,
                        login_codes::Column::CreatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .context("store login code")?;
        Ok(())
    }

    async fn find(&self, email: &str) -> Result<Option<LoginCode>, TrackerError> {
        let model = login_codes::Entity::find_by_id(email.to_owned())
            .one(&self.db)
            .await
            .context("find login code")?;
        Ok(model.map(login_code_from_model))
    }

    async fn delete(&self, email: &str) -> Result<(), TrackerError> {
        login_codes::Entity::delete_many()
            .filter(login_codes::Column::Email.eq(email))
            .exec(&self.db)
            .await
            .context("delete login code")?;
        Ok(())
    }
}

fn login_code_from_model(model: login_codes::Model) -> LoginCode {
    LoginCode {
        email: model.email,
        code: model.code,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}

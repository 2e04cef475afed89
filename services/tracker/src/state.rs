use sea_orm::DatabaseConnection;

use crate::infra::db::{DbExpenseRepository, DbLoginCodeRepository};
use crate::infra::mail::HttpMailer;
use crate::infra::render::HttpReportRenderer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub mailer: HttpMailer,
    pub renderer: HttpReportRenderer,
    pub jwt_secret: String,
    pub cookie_domain: String,
    pub allowed_email: Option<String>,
    pub invalidate_code_on_send_failure: bool,
    pub report_recipient: String,
}

impl AppState {
    pub fn expense_repo(&self) -> DbExpenseRepository {
        DbExpenseRepository {
            db: self.db.clone(),
        }
    }

    pub fn login_code_repo(&self) -> DbLoginCodeRepository {
        DbLoginCodeRepository {
            db: self.db.clone(),
        }
    }
}

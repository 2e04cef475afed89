use axum::{Json, extract::State};

use crate::error::TrackerError;
use crate::handlers::{Ack, ack};
use crate::session::Session;
use crate::state::AppState;
use crate::usecase::export::EmailReportUseCase;

// ── POST /api/email-pdf ──────────────────────────────────────────────────────

pub async fn email_report(
    _session: Session,
    State(state): State<AppState>,
) -> Result<Json<Ack>, TrackerError> {
    let usecase = EmailReportUseCase {
        expenses: state.expense_repo(),
        renderer: state.renderer.clone(),
        mailer: state.mailer.clone(),
        recipient: state.report_recipient.clone(),
    };
    usecase.execute().await?;
    Ok(ack())
}

use crate::domain::repository::{ExpenseRepository, Mailer, ReportRenderer};
use crate::error::TrackerError;

/// Render the current expense list into a PDF and hand the bytes to the mail
/// transport. Rendering and delivery are external collaborators; this is
/// orchestration only, and no bytes ever touch the filesystem.
pub struct EmailReportUseCase<R, D, M>
where
    R: ExpenseRepository,
    D: ReportRenderer,
    M: Mailer,
{
    pub expenses: R,
    pub renderer: D,
    pub mailer: M,
    pub recipient: String,
}

impl<R, D, M> EmailReportUseCase<R, D, M>
where
    R: ExpenseRepository,
    D: ReportRenderer,
    M: Mailer,
{
    pub async fn execute(&self) -> Result<(), TrackerError> {
        let expenses = self.expenses.list().await?;
        let pdf = self.renderer.render(&expenses).await?;
        self.mailer.send_report(&self.recipient, &pdf).await
    }
}

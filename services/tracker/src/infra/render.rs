use anyhow::anyhow;
use serde::Serialize;

use crate::domain::repository::ReportRenderer;
use crate::domain::types::Expense;
use crate::error::TrackerError;

/// Document-formatting collaborator: POSTs the tabular rows to an external
/// render service and receives PDF bytes back. Layout is entirely the
/// renderer's concern.
#[derive(Clone)]
pub struct HttpReportRenderer {
    client: reqwest::Client,
    api_url: String,
}

#[derive(Serialize)]
struct ReportRow<'a> {
    name: &'a str,
    amount: f64,
    date: String,
}

impl HttpReportRenderer {
    pub fn new(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }
}

impl ReportRenderer for HttpReportRenderer {
    async fn render(&self, expenses: &[Expense]) -> Result<Vec<u8>, TrackerError> {
        let rows: Vec<ReportRow<'_>> = expenses
            .iter()
            .map(|e| ReportRow {
                name: &e.name,
                amount: e.amount,
                date: e.created_at.format("%Y-%m-%d %H:%M").to_string(),
            })
            .collect();

        let resp = self
            .client
            .post(&self.api_url)
            .json(&rows)
            .send()
            .await
            .map_err(|e| TrackerError::Transport(anyhow!(e)))?;
        let resp = resp
            .error_for_status()
            .map_err(|e| TrackerError::Transport(anyhow!(e)))?;
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| TrackerError::Transport(anyhow!(e)))?;
        Ok(bytes.to_vec())
    }
}

#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Expense, LoginCode};
use crate::error::TrackerError;

/// Repository for expense records. Owns the canonical record set; the API
/// layer only reads and writes through it.
pub trait ExpenseRepository: Send + Sync {
    /// Persist a fully-formed record.
    async fn insert(&self, expense: &Expense) -> Result<(), TrackerError>;

    /// All records ordered by creation timestamp, most recent first.
    async fn list(&self) -> Result<Vec<Expense>, TrackerError>;

    /// Overwrite `name`/`amount` in place, leaving `id`/`created_at`
    /// untouched. Returns `false` if the id does not exist.
    async fn update(&self, id: Uuid, name: &str, amount: f64) -> Result<bool, TrackerError>;

    /// Delete a record. Returns `true` if a row was deleted, `false` if the
    /// id was absent (not an error).
    async fn delete(&self, id: Uuid) -> Result<bool, TrackerError>;
}

/// Store for pending one-time login codes, keyed by email.
pub trait LoginCodeRepository: Send + Sync {
    /// Store a code, overwriting any prior pending code for the same email
    /// (last-write-wins).
    async fn put(&self, code: &LoginCode) -> Result<(), TrackerError>;

    /// Find the pending code for an email, expired or not; the caller
    /// decides how staleness is reported.
    async fn find(&self, email: &str) -> Result<Option<LoginCode>, TrackerError>;

    /// Remove the pending code for an email, if any.
    async fn delete(&self, email: &str) -> Result<(), TrackerError>;
}

/// Outbound email transport. Delivery is external; failures are reported
/// once, never retried.
pub trait Mailer: Send + Sync {
    async fn send_code(&self, to: &str, code: &str) -> Result<(), TrackerError>;

    async fn send_report(&self, to: &str, pdf: &[u8]) -> Result<(), TrackerError>;
}

/// External document formatter: turns the expense list into PDF bytes.
pub trait ReportRenderer: Send + Sync {
    async fn render(&self, expenses: &[Expense]) -> Result<Vec<u8>, TrackerError>;
}

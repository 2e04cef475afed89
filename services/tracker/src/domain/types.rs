use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A single expense record.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

/// Pending one-time login code. One per email; overwritten by a new request,
/// deleted on successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCode {
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl LoginCode {
    /// Expiry is passive: checked here on read, never actively evicted.
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}

/// Login code time-to-live in seconds (5 minutes).
pub const LOGIN_CODE_TTL_SECS: i64 = 300;

/// Validate expense fields before they reach the repository.
pub fn valid_expense_fields(name: &str, amount: f64) -> bool {
    !name.trim().is_empty() && amount.is_finite() && amount >= 0.0
}

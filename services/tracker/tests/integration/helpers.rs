use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use chrono::{Duration, Utc};
use uuid::Uuid;

use outlay_tracker::domain::repository::{
    ExpenseRepository, LoginCodeRepository, Mailer, ReportRenderer,
};
use outlay_tracker::domain::types::{Expense, LOGIN_CODE_TTL_SECS, LoginCode};
use outlay_tracker::error::TrackerError;
use outlay_tracker::infra::mail::HttpMailer;
use outlay_tracker::infra::render::HttpReportRenderer;
use outlay_tracker::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-integration-tests";

// ── MockExpenseRepo ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockExpenseRepo {
    records: Arc<Mutex<Vec<Expense>>>,
}

impl MockExpenseRepo {
    pub fn new(records: Vec<Expense>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the record list for post-execution inspection.
    pub fn records_handle(&self) -> Arc<Mutex<Vec<Expense>>> {
        Arc::clone(&self.records)
    }
}

impl ExpenseRepository for MockExpenseRepo {
    async fn insert(&self, expense: &Expense) -> Result<(), TrackerError> {
        self.records.lock().unwrap().push(expense.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Expense>, TrackerError> {
        let mut records = self.records.lock().unwrap().clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn update(&self, id: Uuid, name: &str, amount: f64) -> Result<bool, TrackerError> {
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|e| e.id == id) {
            Some(e) => {
                e.name = name.to_owned();
                e.amount = amount;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, TrackerError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|e| e.id != id);
        Ok(records.len() < before)
    }
}

// ── MockLoginCodeRepo ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockLoginCodeRepo {
    codes: Arc<Mutex<HashMap<String, LoginCode>>>,
}

impl MockLoginCodeRepo {
    pub fn new(codes: Vec<LoginCode>) -> Self {
        Self {
            codes: Arc::new(Mutex::new(
                codes.into_iter().map(|c| (c.email.clone(), c)).collect(),
            )),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn codes_handle(&self) -> Arc<Mutex<HashMap<String, LoginCode>>> {
        Arc::clone(&self.codes)
    }
}

impl LoginCodeRepository for MockLoginCodeRepo {
    async fn put(&self, code: &LoginCode) -> Result<(), TrackerError> {
        self.codes
            .lock()
            .unwrap()
            .insert(code.email.clone(), code.clone());
        Ok(())
    }

    async fn find(&self, email: &str) -> Result<Option<LoginCode>, TrackerError> {
        Ok(self.codes.lock().unwrap().get(email).cloned())
    }

    async fn delete(&self, email: &str) -> Result<(), TrackerError> {
        self.codes.lock().unwrap().remove(email);
        Ok(())
    }
}

// ── MockMailer ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum SentMail {
    Code { to: String, code: String },
    Report { to: String, pdf: Vec<u8> },
}

#[derive(Clone)]
pub struct MockMailer {
    sent: Arc<Mutex<Vec<SentMail>>>,
    fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: false,
        }
    }

    /// A mailer whose every send fails with a transport error.
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: true,
        }
    }

    pub fn sent_handle(&self) -> Arc<Mutex<Vec<SentMail>>> {
        Arc::clone(&self.sent)
    }
}

impl Mailer for MockMailer {
    async fn send_code(&self, to: &str, code: &str) -> Result<(), TrackerError> {
        if self.fail {
            return Err(TrackerError::Transport(anyhow!("mail API unreachable")));
        }
        self.sent.lock().unwrap().push(SentMail::Code {
            to: to.to_owned(),
            code: code.to_owned(),
        });
        Ok(())
    }

    async fn send_report(&self, to: &str, pdf: &[u8]) -> Result<(), TrackerError> {
        if self.fail {
            return Err(TrackerError::Transport(anyhow!("mail API unreachable")));
        }
        self.sent.lock().unwrap().push(SentMail::Report {
            to: to.to_owned(),
            pdf: pdf.to_vec(),
        });
        Ok(())
    }
}

// ── MockRenderer ─────────────────────────────────────────────────────────────

pub const MOCK_PDF: &[u8] = b"%PDF-1.4 mock report";

#[derive(Clone)]
pub struct MockRenderer {
    rendered: Arc<Mutex<Vec<Vec<Expense>>>>,
    fail: bool,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self {
            rendered: Arc::new(Mutex::new(vec![])),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            rendered: Arc::new(Mutex::new(vec![])),
            fail: true,
        }
    }

    /// Input snapshots seen by `render`, in call order.
    pub fn rendered_handle(&self) -> Arc<Mutex<Vec<Vec<Expense>>>> {
        Arc::clone(&self.rendered)
    }
}

impl ReportRenderer for MockRenderer {
    async fn render(&self, expenses: &[Expense]) -> Result<Vec<u8>, TrackerError> {
        if self.fail {
            return Err(TrackerError::Transport(anyhow!("render service unreachable")));
        }
        self.rendered.lock().unwrap().push(expenses.to_vec());
        Ok(MOCK_PDF.to_vec())
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_expense(name: &str, amount: f64) -> Expense {
    Expense {
        id: Uuid::now_v7(),
        name: name.to_owned(),
        amount,
        created_at: Utc::now(),
    }
}

pub fn pending_code(email: &str, code: &str) -> LoginCode {
    let now = Utc::now();
    LoginCode {
        email: email.to_owned(),
        code: code.to_owned(),
        expires_at: now + Duration::seconds(LOGIN_CODE_TTL_SECS),
        created_at: now,
    }
}

/// A code issued just over five minutes ago, one second past its window.
pub fn expired_code(email: &str, code: &str) -> LoginCode {
    let now = Utc::now();
    LoginCode {
        email: email.to_owned(),
        code: code.to_owned(),
        expires_at: now - Duration::seconds(1),
        created_at: now - Duration::seconds(LOGIN_CODE_TTL_SECS + 1),
    }
}

/// App state for router-level tests. The database is disconnected, so only
/// routes that reject before touching storage may be exercised with it.
pub fn test_state() -> AppState {
    AppState {
        db: sea_orm::DatabaseConnection::Disconnected,
        mailer: HttpMailer::new(
            reqwest::Client::new(),
            "http://mail.invalid".to_owned(),
            "test-key".to_owned(),
            "outlay@example.com".to_owned(),
        ),
        renderer: HttpReportRenderer::new(
            reqwest::Client::new(),
            "http://render.invalid".to_owned(),
        ),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        cookie_domain: "example.com".to_owned(),
        allowed_email: None,
        invalidate_code_on_send_failure: false,
        report_recipient: "user@example.com".to_owned(),
    }
}

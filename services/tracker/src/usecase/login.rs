use chrono::{Duration, Utc};
use rand::RngExt;

use outlay_auth_types::token::issue_session_token;

use crate::domain::repository::{LoginCodeRepository, Mailer};
use crate::domain::types::{LOGIN_CODE_TTL_SECS, LoginCode};
use crate::error::TrackerError;

/// Uniform draw over the 900000 six-digit values, [100000, 999999].
fn generate_code() -> String {
    let mut rng = rand::rng();
    rng.random_range(100_000..1_000_000).to_string()
}

// ── RequestCode ──────────────────────────────────────────────────────────────

pub struct RequestCodeInput {
    pub email: String,
}

pub struct RequestCodeUseCase<C, M>
where
    C: LoginCodeRepository,
    M: Mailer,
{
    pub codes: C,
    pub mailer: M,
    /// When set, only this address may request a code.
    pub allowed_email: Option<String>,
    /// When `true`, a failed send also removes the stored code, so the code
    /// is only ever usable after confirmed delivery. Default is `false`:
    /// delivery may have partially succeeded, so verification stays possible.
    pub invalidate_on_send_failure: bool,
}

impl<C, M> RequestCodeUseCase<C, M>
where
    C: LoginCodeRepository,
    M: Mailer,
{
    pub async fn execute(&self, input: RequestCodeInput) -> Result<(), TrackerError> {
        let email = input.email.trim();
        if email.is_empty() {
            return Err(TrackerError::InvalidEmail);
        }
        if let Some(ref allowed) = self.allowed_email {
            if email != allowed {
                return Err(TrackerError::EmailNotAllowed);
            }
        }

        let code_value = generate_code();
        let now = Utc::now();
        let code = LoginCode {
            email: email.to_owned(),
            code: code_value.clone(),
            expires_at: now + Duration::seconds(LOGIN_CODE_TTL_SECS),
            created_at: now,
        };

        // Store before sending: the code must be verifiable even when
        // delivery partially succeeds.
        self.codes.put(&code).await?;

        if let Err(e) = self.mailer.send_code(email, &code_value).await {
            if self.invalidate_on_send_failure {
                self.codes.delete(email).await?;
            }
            return Err(e);
        }
        Ok(())
    }
}

// ── VerifyCode ───────────────────────────────────────────────────────────────

pub struct VerifyCodeInput {
    pub email: String,
    pub code: String,
}

#[derive(Debug)]
pub struct VerifyCodeOutput {
    pub session_token: String,
    pub expires_at: u64,
}

pub struct VerifyCodeUseCase<C: LoginCodeRepository> {
    pub codes: C,
    pub jwt_secret: String,
}

impl<C: LoginCodeRepository> VerifyCodeUseCase<C> {
    pub async fn execute(&self, input: VerifyCodeInput) -> Result<VerifyCodeOutput, TrackerError> {
        let pending = self
            .codes
            .find(&input.email)
            .await?
            .ok_or(TrackerError::NoCodeSent)?;

        if pending.is_expired() {
            return Err(TrackerError::CodeExpired);
        }
        if pending.code != input.code {
            return Err(TrackerError::CodeMismatch);
        }

        // Single-use: the stored code dies with the verification that used it.
        self.codes.delete(&input.email).await?;

        let (session_token, expires_at) = issue_session_token(&input.email, &self.jwt_secret)
            .map_err(|e| TrackerError::Internal(e.into()))?;

        Ok(VerifyCodeOutput {
            session_token,
            expires_at,
        })
    }
}

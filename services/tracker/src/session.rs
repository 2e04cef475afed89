//! Session-gate extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use outlay_auth_types::cookie::OUTLAY_SESSION;
use outlay_auth_types::token::validate_session_token;

use crate::error::TrackerError;
use crate::state::AppState;

/// Live session extracted from the session cookie.
///
/// Every gated endpoint takes this extractor first: a missing, malformed, or
/// expired cookie rejects with 401 before any handler code runs, regardless
/// of payload validity. The gate never refreshes the TTL on access.
#[derive(Debug, Clone)]
pub struct Session {
    pub email: String,
}

impl FromRequestParts<AppState> for Session {
    type Rejection = TrackerError;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = CookieJar::from_headers(&parts.headers)
            .get(OUTLAY_SESSION)
            .map(|c| c.value().to_owned());
        let secret = state.jwt_secret.clone();

        async move {
            let token = token.ok_or(TrackerError::Unauthorized)?;
            let info =
                validate_session_token(&token, &secret).map_err(|_| TrackerError::Unauthorized)?;
            Ok(Self { email: info.email })
        }
    }
}

use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use outlay_auth_types::cookie::set_session_cookie;

use crate::error::TrackerError;
use crate::handlers::{Ack, ack};
use crate::state::AppState;
use crate::usecase::login::{
    RequestCodeInput, RequestCodeUseCase, VerifyCodeInput, VerifyCodeUseCase,
};

// ── POST /api/request-code ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RequestCodeRequest {
    pub email: String,
}

pub async fn request_code(
    State(state): State<AppState>,
    Json(body): Json<RequestCodeRequest>,
) -> Result<Json<Ack>, TrackerError> {
    let usecase = RequestCodeUseCase {
        codes: state.login_code_repo(),
        mailer: state.mailer.clone(),
        allowed_email: state.allowed_email.clone(),
        invalidate_on_send_failure: state.invalidate_code_on_send_failure,
    };
    usecase
        .execute(RequestCodeInput { email: body.email })
        .await?;
    Ok(ack())
}

// ── POST /api/verify-code ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyCodeRequest {
    pub email: String,
    pub code: String,
}

pub async fn verify_code(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<VerifyCodeRequest>,
) -> Result<impl IntoResponse, TrackerError> {
    let usecase = VerifyCodeUseCase {
        codes: state.login_code_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(VerifyCodeInput {
            email: body.email,
            code: body.code,
        })
        .await?;

    let jar = set_session_cookie(jar, out.session_token, state.cookie_domain.clone());
    Ok((jar, ack()))
}

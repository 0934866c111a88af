use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use emlak_auth_types::cookie::{clear_access_token_cookie, set_access_token_cookie};

use crate::error::ApiError;
use crate::handlers::user::UserResponse;
use crate::state::AppState;
use crate::usecase::auth::{LoginInput, LoginUseCase};

/// Answer for both reset-flow endpoints, deliberately independent of
/// whether the email exists.
const RESET_FLOW_MESSAGE: &str =
    "If this email is registered in our system, a password reset link has been sent.";

// ── POST /auth/login ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(flatten)]
    pub user: UserResponse,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = LoginUseCase {
        repo: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };

    let out = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;

    let jar = set_access_token_cookie(jar, out.access_token.clone(), &state.cookie_domain);
    let body = LoginResponse {
        access_token: out.access_token,
        user: out.user.into(),
    };
    Ok((StatusCode::OK, jar, Json(body)))
}

// ── POST /auth/logout ────────────────────────────────────────────────────────

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = clear_access_token_cookie(jar, &state.cookie_domain);
    let body = serde_json::json!({ "message": "Logout successful" });
    (StatusCode::OK, jar, Json(body))
}

// ── POST /auth/forgot-password / POST /auth/reset-password ───────────────────
//
// The reset flow is disabled: both endpoints acknowledge with a generic
// message and perform no token issuance, validation, or consumption. The
// reset_tokens table exists for schema parity only.

#[derive(Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

pub async fn forgot_password(
    Json(_body): Json<ForgotPasswordRequest>,
) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": RESET_FLOW_MESSAGE }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

pub async fn reset_password(Json(_body): Json<ResetPasswordRequest>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": RESET_FLOW_MESSAGE }))
}

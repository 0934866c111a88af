//! Bearer/cookie identity extractor.

use axum::extract::FromRequestParts;
use axum_extra::extract::cookie::CookieJar;
use http::StatusCode;
use http::header::AUTHORIZATION;
use http::request::Parts;
use uuid::Uuid;

use emlak_domain::role::Role;

use crate::cookie::ACCESS_TOKEN_COOKIE;
use crate::token::validate_access_token;

/// Source of the HMAC secret used for token validation.
///
/// Implemented by the service `AppState` so the extractor can run against
/// any state type that can hand out the signing secret.
pub trait JwtSecret {
    fn jwt_secret(&self) -> &str;
}

/// Caller identity proven by a valid access token, taken from the
/// `Authorization: Bearer` header or, failing that, the `accessToken` cookie.
///
/// Returns 401 when the token is absent, expired, or fails validation.
/// Role enforcement (403) is done by handlers after extraction.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::to_owned)
}

fn cookie_token(parts: &Parts) -> Option<String> {
    CookieJar::from_headers(&parts.headers)
        .get(ACCESS_TOKEN_COOKIE)
        .map(|c| c.value().to_owned())
}

impl<S> FromRequestParts<S> for Identity
where
    S: JwtSecret + Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let verified = bearer_token(parts)
            .or_else(|| cookie_token(parts))
            .and_then(|token| validate_access_token(&token, state.jwt_secret()).ok());

        async move {
            let info = verified.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self {
                user_id: info.user_id,
                email: info.email,
                role: info.role,
            })
        }
    }
}

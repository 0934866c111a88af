//! Auth helpers for integration tests.
//!
//! Handlers authenticate callers through the bearer/cookie [`Identity`]
//! extractor. In tests, `TestAuth` mints a real signed token with a known
//! secret so requests pass validation without a login round trip.
//!
//! [`Identity`]: emlak_auth_types::identity::Identity

use http::{HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

use emlak_auth_types::token::issue_access_token;
use emlak_domain::role::Role;

/// Configurable identity minted into a signed access token for tests.
pub struct TestAuth {
    pub user_id: Uuid,
    pub token: String,
}

impl TestAuth {
    /// Mint a token for a fresh user with the given role.
    pub fn mint(role: Role, secret: &str) -> Self {
        let user_id = Uuid::new_v4();
        let (token, _) = issue_access_token(user_id, "test@example.com", role, secret)
            .expect("token issuance in tests");
        Self { user_id, token }
    }

    /// Return headers carrying the token as a bearer credential.
    pub fn bearer_headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_static("authorization"),
            HeaderValue::from_str(&format!("Bearer {}", self.token)).unwrap(),
        );
        map
    }

    /// Return headers carrying the token as the access-token cookie.
    pub fn cookie_headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_static("cookie"),
            HeaderValue::from_str(&format!(
                "{}={}",
                emlak_auth_types::cookie::ACCESS_TOKEN_COOKIE,
                self.token
            ))
            .unwrap(),
        );
        map
    }
}

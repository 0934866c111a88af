//! Cookie builder for the access token.
//!
//! Cookie name and attributes match the legacy system (Compat requirement):
//! HTTP-only, Secure, path `/`, one-hour Max-Age.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name for the access token.
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Access-token JWT lifetime and cookie Max-Age in seconds (1 hour).
pub const ACCESS_TOKEN_EXP: u64 = 3600;

fn build(value: String, domain: &str, max_age: Duration) -> Cookie<'static> {
    let mut builder = Cookie::build((ACCESS_TOKEN_COOKIE, value))
        .path("/")
        .max_age(max_age)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax);
    // Empty domain means host-only cookie (local development).
    if !domain.is_empty() {
        builder = builder.domain(domain.to_owned());
    }
    builder.build()
}

/// Set the access-token cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use emlak_auth_types::cookie::{set_access_token_cookie, ACCESS_TOKEN_COOKIE};
///
/// let jar = CookieJar::new();
/// let jar = set_access_token_cookie(jar, "token_value".to_string(), "example.com");
/// let cookie = jar.get(ACCESS_TOKEN_COOKIE).unwrap();
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.domain(), Some("example.com"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(3600)));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn set_access_token_cookie(jar: CookieJar, value: String, domain: &str) -> CookieJar {
    jar.add(build(value, domain, Duration::seconds(ACCESS_TOKEN_EXP as i64)))
}

/// Clear the access-token cookie by setting Max-Age to 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use emlak_auth_types::cookie::{
///     clear_access_token_cookie, set_access_token_cookie, ACCESS_TOKEN_COOKIE,
/// };
///
/// let jar = CookieJar::new();
/// let jar = set_access_token_cookie(jar, "a".to_string(), "example.com");
/// let jar = clear_access_token_cookie(jar, "example.com");
/// let cookie = jar.get(ACCESS_TOKEN_COOKIE).unwrap();
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_access_token_cookie(jar: CookieJar, domain: &str) -> CookieJar {
    jar.add(build(String::new(), domain, Duration::ZERO))
}

//! Cookie builders for the admin session token.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::token::ADMIN_TOKEN_TTL_SECS;

/// Cookie name for the admin session token.
pub const ADMIN_TOKEN: &str = "admin_token";

/// Set the `admin_token` cookie on the jar.
///
/// Max-Age matches the token lifetime, so the cookie and the JWT inside it
/// expire together.
///
/// ```
/// use axum_extra::extract::cookie::{CookieJar, SameSite};
/// use folio_auth_types::cookie::{set_admin_token_cookie, ADMIN_TOKEN};
///
/// let jar = set_admin_token_cookie(CookieJar::new(), "token_value".to_string());
/// let cookie = jar.get(ADMIN_TOKEN).unwrap();
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(14400)));
/// assert_eq!(cookie.same_site(), Some(SameSite::Strict));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn set_admin_token_cookie(jar: CookieJar, value: String) -> CookieJar {
    let cookie = Cookie::build((ADMIN_TOKEN, value))
        .path("/")
        .max_age(Duration::seconds(ADMIN_TOKEN_TTL_SECS as i64))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .build();
    jar.add(cookie)
}

/// Clear the `admin_token` cookie by setting Max-Age to 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use folio_auth_types::cookie::{
///     clear_admin_token_cookie, set_admin_token_cookie, ADMIN_TOKEN,
/// };
///
/// let jar = set_admin_token_cookie(CookieJar::new(), "a".to_string());
/// let jar = clear_admin_token_cookie(jar);
/// let cookie = jar.get(ADMIN_TOKEN).unwrap();
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_admin_token_cookie(jar: CookieJar) -> CookieJar {
    let cookie = Cookie::build((ADMIN_TOKEN, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .build();
    jar.add(cookie)
}

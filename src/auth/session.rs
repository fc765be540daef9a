//! Session cookies

use axum::http::{header::SET_COOKIE, HeaderMap};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use super::provider::AuthSession;

pub const ACCESS_TOKEN_COOKIE: &str = "artune_access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "artune_refresh_token";

fn session_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Store a freshly issued session in the jar
pub fn start(jar: CookieJar, session: &AuthSession, secure: bool) -> CookieJar {
    jar.add(session_cookie(
        ACCESS_TOKEN_COOKIE,
        session.access_token.clone(),
        secure,
    ))
    .add(session_cookie(
        REFRESH_TOKEN_COOKIE,
        session.refresh_token.clone(),
        secure,
    ))
}

pub fn end(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(ACCESS_TOKEN_COOKIE).path("/"))
        .remove(Cookie::build(REFRESH_TOKEN_COOKIE).path("/"))
}

pub fn access_token(jar: &CookieJar) -> Option<&str> {
    non_empty(jar, ACCESS_TOKEN_COOKIE)
}

pub fn refresh_token(jar: &CookieJar) -> Option<&str> {
    non_empty(jar, REFRESH_TOKEN_COOKIE)
}

fn non_empty<'a>(jar: &'a CookieJar, name: &str) -> Option<&'a str> {
    jar.get(name).map(|c| c.value()).filter(|value| !value.is_empty())
}

/// Whether a response already starts or ends a session itself
pub fn is_set_by(headers: &HeaderMap) -> bool {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.starts_with(&format!("{}=", ACCESS_TOKEN_COOKIE)))
}

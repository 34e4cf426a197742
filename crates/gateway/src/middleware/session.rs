//! Session cookie helpers.
//!
//! The session token travels in a single `sessionid` cookie. It is always
//! `HttpOnly` with `Path=/` and no expiry, so browsers drop it when they
//! close. Secure deployments also mark it `Secure` and `SameSite=Strict`.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use schoolkit_core::SessionToken;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE_NAME: &str = "sessionid";

/// Build the cookie that hands a freshly issued token to the browser.
#[must_use]
pub fn session_cookie(token: &SessionToken, secure: bool) -> Cookie<'static> {
    let mut builder = Cookie::build((SESSION_COOKIE_NAME, token.as_str().to_owned()))
        .path("/")
        .http_only(true);

    if secure {
        builder = builder.secure(true).same_site(SameSite::Strict);
    }

    builder.build()
}

/// Build the cookie used to clear the session on the client.
///
/// The value is blank and `Max-Age` is zero. Add it to the jar with
/// `CookieJar::add` so it is sent even when the request carried no cookie.
#[must_use]
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE_NAME)
        .path("/")
        .http_only(true)
        .build();
    cookie.make_removal();
    cookie
}

/// Raw session token from the request cookies, if any.
#[must_use]
pub fn session_token(jar: &CookieJar) -> Option<&str> {
    jar.get(SESSION_COOKIE_NAME).map(Cookie::value)
}

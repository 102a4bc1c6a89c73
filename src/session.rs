/// Cookie-backed session store. The API hands out an opaque bearer token on
/// login; it lives in the `token` cookie and nothing here inspects it.
use leptos::logging::log;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

pub const TOKEN_COOKIE: &str = "token";

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// Looks up `name` in a raw `Cookie`-style header string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

/// Current session token, or `None` when unauthenticated.
pub fn token() -> Option<String> {
    let document = html_document()?;
    let cookies = document.cookie().ok()?;
    cookie_value(&cookies, TOKEN_COOKIE).filter(|t| !t.is_empty())
}

/// Stores the session token with an explicit expiry `ttl_days` from now.
pub fn set_token(token: &str, ttl_days: u32) {
    let expires = js_sys::Date::new_0();
    expires.set_time(expires.get_time() + f64::from(ttl_days) * 24.0 * 60.0 * 60.0 * 1000.0);
    let cookie = format!(
        "{}={}; expires={}; path=/; SameSite=Lax",
        TOKEN_COOKIE,
        token,
        expires.to_utc_string()
    );
    write_cookie(&cookie);
}

/// Clears the session by overwriting the cookie with a past expiry.
pub fn delete_token() {
    let cookie = format!(
        "{}=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/; SameSite=Lax",
        TOKEN_COOKIE
    );
    write_cookie(&cookie);
}

/// Returns the token if present, otherwise kicks the browser to the login
/// page and returns `None`. The redirect does not halt the current task, so
/// callers must bail out on `None` themselves.
pub fn check_or_redirect() -> Option<String> {
    let token = token();
    if token.is_none() {
        log!("[SESSION] No token, redirecting to login");
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
    token
}

fn write_cookie(cookie: &str) {
    if let Some(document) = html_document() {
        if document.set_cookie(cookie).is_err() {
            leptos::logging::error!("[SESSION] Failed to write cookie");
        }
    }
}

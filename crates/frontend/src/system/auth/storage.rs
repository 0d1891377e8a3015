//! Session cookies. The console only checks presence and caches the
//! resolved identity; credential validation stays on the backend.

use contracts::system::auth::UserInfo;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

const AUTH_FLAG_COOKIE: &str = "is_authenticated";
const AUTH_TOKEN_COOKIE: &str = "auth_token";
const USER_DATA_COOKIE: &str = "user_data";

const SESSION_MAX_AGE_SECS: i64 = 60 * 60 * 12;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

fn cookie(name: &str) -> Option<String> {
    let cookies = html_document()?.cookie().ok()?;
    for pair in cookies.split(';') {
        if let Some((key, value)) = pair.trim().split_once('=') {
            if key == name && !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

fn set_cookie(name: &str, value: &str, max_age: i64) {
    if let Some(document) = html_document() {
        let _ = document.set_cookie(&format!(
            "{}={}; path=/; max-age={}; samesite=lax",
            name, value, max_age
        ));
    }
}

pub fn auth_token() -> Option<String> {
    cookie(AUTH_TOKEN_COOKIE)
}

pub fn has_session() -> bool {
    cookie(AUTH_FLAG_COOKIE).is_some() && auth_token().is_some()
}

pub fn save_session(token: &str, user: &UserInfo) {
    set_cookie(AUTH_FLAG_COOKIE, "1", SESSION_MAX_AGE_SECS);
    set_cookie(AUTH_TOKEN_COOKIE, token, SESSION_MAX_AGE_SECS);
    if let Ok(json) = serde_json::to_string(user) {
        set_cookie(USER_DATA_COOKIE, &urlencoding::encode(&json), SESSION_MAX_AGE_SECS);
    }
}

/// Identity cached at login; the provider still re-resolves it from the
/// backend so revoked permissions do not linger.
pub fn cached_user() -> Option<UserInfo> {
    let raw = cookie(USER_DATA_COOKIE)?;
    let json = urlencoding::decode(&raw).ok()?;
    serde_json::from_str(&json).ok()
}

pub fn clear_session() {
    for name in [AUTH_FLAG_COOKIE, AUTH_TOKEN_COOKIE, USER_DATA_COOKIE] {
        set_cookie(name, "", 0);
    }
}

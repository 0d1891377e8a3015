//! Helpers for constructing API URLs.

/// Base URL for API requests, derived from the current window location.
/// The console is served from the same origin as the API gateway.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

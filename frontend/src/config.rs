use shared::constants::REGISTER_USER_ENDPOINT;
use web_sys::window;

pub fn get_api_base_url() -> String {
    // Served by the registration service itself, so the API shares our origin.
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            if !host.is_empty() {
                let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
                return format!("{}//{}", protocol, host);
            }
        }
    }

    "http://127.0.0.1:3000".to_string()
}

pub fn register_user_url() -> String {
    format!("{}{}", get_api_base_url(), REGISTER_USER_ENDPOINT)
}

/// The page visitors share, without query or fragment.
pub fn page_url() -> String {
    window()
        .and_then(|w| {
            let location = w.location();
            let origin = location.origin().ok()?;
            let path = location.pathname().unwrap_or_default();
            Some(format!("{}{}", origin, path))
        })
        .unwrap_or_else(|| format!("{}/", get_api_base_url()))
}

pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

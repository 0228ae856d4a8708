//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::AppConfig;

/// Origin of the current page, e.g. "https://feirinha.example.com"
///
/// Returns `None` outside a browser window.
pub fn page_origin() -> Option<String> {
    let window = web_sys::window()?;
    window.location().origin().ok()
}

/// Build a full API URL from an endpoint path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&config, "/check-registration");
/// ```
pub fn api_url(config: &AppConfig, path: &str) -> String {
    format!("{}{}", config.api_base_url, path)
}

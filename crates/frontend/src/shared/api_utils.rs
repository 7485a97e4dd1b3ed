//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::{API_BASE_OVERRIDE, DEFAULT_API_PORT};

/// Get the base URL for API requests
///
/// A `DASHBOARD_API_BASE` value set at build time wins. Otherwise the base is
/// built from the current window location with the backend port.
///
/// # Returns
/// - API base URL like "http://localhost:5001"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path and an already encoded query string
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/data/overview", "search=");
/// ```
pub fn api_url(path: &str, query: &str) -> String {
    join_url(&api_base(), path, query)
}

fn join_url(base: &str, path: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{}{}", base, path)
    } else {
        format!("{}{}?{}", base, path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:5001", "/api/data/overview", "search="),
            "http://localhost:5001/api/data/overview?search="
        );
        assert_eq!(join_url("", "/api/data/overview", ""), "/api/data/overview");
    }
}

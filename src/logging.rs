//! Request and response logging with header redaction.
//!
//! Method and URL are logged at info level, headers at debug, bodies at
//! trace. Cookie and credential headers never reach the log output.

use crate::constants;
use tracing::{debug, info, trace};

/// Checks if a header name should be redacted
#[must_use]
pub fn should_redact_header(header_name: &str) -> bool {
    let lower = header_name.to_lowercase();
    matches!(
        lower.as_str(),
        "authorization" | "proxy-authorization" | "cookie" | "set-cookie" | "x-api-key" | "token"
    )
}

fn log_headers(label: &str, headers: &reqwest::header::HeaderMap) {
    debug!(target: "timeline::client", "{label}:");
    for (name, value) in headers {
        let header_str = name.as_str();
        let display_value = if should_redact_header(header_str) {
            "[REDACTED]".to_string()
        } else {
            String::from_utf8_lossy(value.as_bytes()).to_string()
        };
        debug!(target: "timeline::client", "  {}: {}", header_str, display_value);
    }
}

/// Logs an outgoing HTTP request
pub fn log_request(request: &reqwest::Request) {
    info!(
        target: "timeline::client",
        "→ {} {}",
        request.method(),
        request.url()
    );
    log_headers("Request headers", request.headers());

    if let Some(body) = request.body().and_then(reqwest::Body::as_bytes) {
        trace!(
            target: "timeline::client",
            "Request body: {}",
            String::from_utf8_lossy(body)
        );
    }
}

/// Logs the status line and headers of an HTTP response
pub fn log_response(response: &reqwest::Response, duration_ms: u128) {
    info!(
        target: "timeline::client",
        "← {} ({}ms)",
        response.status(),
        duration_ms
    );
    log_headers("Response headers", response.headers());
}

/// Logs a response body at trace level, truncated to `max_body_len` characters
pub fn log_response_body(body: &str, max_body_len: usize) {
    match body.char_indices().nth(max_body_len) {
        Some((cut, _)) => trace!(
            target: "timeline::client",
            "Response body: {} (truncated at {} chars)",
            &body[..cut],
            max_body_len
        ),
        None => trace!(target: "timeline::client", "Response body: {}", body),
    }
}

/// Gets the maximum logged body length from `TIMELINE_LOG_MAX_BODY`
#[must_use]
pub fn get_max_body_len() -> usize {
    std::env::var(constants::ENV_TIMELINE_LOG_MAX_BODY)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_redact_credential_headers() {
        assert!(should_redact_header("Cookie"));
        assert!(should_redact_header("SET-COOKIE"));
        assert!(should_redact_header("authorization"));
    }

    #[test]
    fn test_should_not_redact_browser_headers() {
        assert!(!should_redact_header("Origin"));
        assert!(!should_redact_header("User-Agent"));
        assert!(!should_redact_header("Accept"));
    }

    #[test]
    fn test_log_response_body_handles_multibyte_cut() {
        // Must not panic when the cut lands inside a multi-byte character.
        log_response_body("héllo wörld", 2);
        log_response_body("short", 100);
    }
}

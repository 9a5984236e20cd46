//! Rendering layer for server responses.
//!
//! Turns a raw [`reqwest::Response`] (or, in dry-run mode, the request that
//! would have been sent) into the text printed on stdout in the requested
//! format. Non-2xx responses become [`Error::HttpStatus`] here; the client
//! itself never looks at status codes.

use crate::cli::OutputFormat;
use crate::error::Error;
use crate::logging;
use serde_json::Value;
use std::collections::BTreeMap;

/// Formats a JSON value for output.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized in the chosen format.
pub fn render_value(value: &Value, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?.trim_end().to_string()),
    }
}

/// Reads and renders a response body.
///
/// Returns `None` for an empty body.
///
/// # Errors
///
/// Returns an error for non-2xx statuses, unreadable bodies and bodies that
/// are not valid JSON.
pub async fn render_response(
    response: reqwest::Response,
    format: OutputFormat,
) -> Result<Option<String>, Error> {
    let status = response.status();
    let text = response.text().await?;
    logging::log_response_body(&text, logging::get_max_body_len());

    if !status.is_success() {
        return Err(Error::http_status(status.as_u16(), text));
    }
    if text.trim().is_empty() {
        return Ok(None);
    }
    let value: Value = serde_json::from_str(&text)?;
    render_value(&value, format).map(Some)
}

/// Describes a prepared request without sending it.
///
/// # Errors
///
/// Returns an error if the request body is not JSON or cannot be rendered.
pub fn render_dry_run(request: &reqwest::Request, format: OutputFormat) -> Result<String, Error> {
    let headers: BTreeMap<&str, String> = request
        .headers()
        .iter()
        .map(|(name, value)| {
            let shown = if logging::should_redact_header(name.as_str()) {
                "[REDACTED]".to_string()
            } else {
                value.to_str().unwrap_or("<binary>").to_string()
            };
            (name.as_str(), shown)
        })
        .collect();

    let body = request
        .body()
        .and_then(reqwest::Body::as_bytes)
        .map(serde_json::from_slice::<Value>)
        .transpose()?;

    let dry_run_info = serde_json::json!({
        "dry_run": true,
        "method": request.method().as_str(),
        "url": request.url().as_str(),
        "headers": headers,
        "body": body,
    });
    render_value(&dry_run_info, format)
}

//! Tracing subscriber setup for the `timeline` binary.

use crate::constants;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Parses `TIMELINE_LOG_FORMAT`; `None` means the value was not recognised.
    fn parse(value: Option<&str>) -> Option<Self> {
        match value.map(str::to_lowercase).as_deref() {
            None | Some("text") => Some(Self::Text),
            Some("json") => Some(Self::Json),
            Some(_) => None,
        }
    }
}

/// Maps `-v` occurrences to a filter; with none, `TIMELINE_LOG` decides.
fn log_level(verbosity: u8, env_level: Option<String>) -> String {
    match verbosity {
        0 => env_level
            .filter(|level| !level.is_empty())
            .unwrap_or_else(|| "warn".to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Log destination: `TIMELINE_LOG_FILE` when it can be opened, else stderr.
fn log_writer(path: Option<String>) -> BoxMakeWriter {
    let Some(path) = path else {
        return BoxMakeWriter::new(std::io::stderr);
    };
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(e) => {
            // Tracing is not initialized yet.
            eprintln!("Warning: Could not open log file '{path}': {e}. Using stderr.");
            BoxMakeWriter::new(std::io::stderr)
        }
    }
}

/// Installs the global subscriber. Call once, before any command runs.
pub fn init_tracing(verbosity: u8) {
    let level = log_level(verbosity, std::env::var(constants::ENV_TIMELINE_LOG).ok());
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let raw_format = std::env::var(constants::ENV_TIMELINE_LOG_FORMAT).ok();
    let format = LogFormat::parse(raw_format.as_deref()).unwrap_or_else(|| {
        eprintln!(
            "Warning: Unrecognized {} '{}'. Valid values: 'json', 'text'. Using 'text'.",
            constants::ENV_TIMELINE_LOG_FORMAT,
            raw_format.as_deref().unwrap_or_default()
        );
        LogFormat::Text
    });

    let writer = log_writer(std::env::var(constants::ENV_TIMELINE_LOG_FILE).ok());
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(writer),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(writer),
            )
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_overrides_env() {
        assert_eq!(log_level(0, None), "warn");
        assert_eq!(log_level(0, Some(String::new())), "warn");
        assert_eq!(log_level(0, Some("timeline=info".to_string())), "timeline=info");
        assert_eq!(log_level(1, Some("error".to_string())), "debug");
        assert_eq!(log_level(5, None), "trace");
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse(None), Some(LogFormat::Text));
        assert_eq!(LogFormat::parse(Some("JSON")), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse(Some("xml")), None);
    }
}

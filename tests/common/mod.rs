//! Shared test utilities

#![allow(dead_code)]

use std::path::Path;
use timeline_cli::cli::Cli;
use timeline_cli::config::Config;

/// Command for the `timeline` binary, isolated from the caller's environment
/// and configuration.
#[allow(deprecated)]
pub fn timeline_cmd(config_dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("timeline").unwrap();
    cmd.env("TIMELINE_CONFIG_DIR", config_dir)
        .env_remove("TIMELINE_REPO")
        .env_remove("TIMELINE_SERVER")
        .env_remove("TIMELINE_LOG")
        .env_remove("TIMELINE_LOG_FORMAT")
        .env_remove("TIMELINE_LOG_FILE");
    cmd
}

/// Parses CLI arguments, panicking on invalid input.
pub fn parse(args: &[&str]) -> Cli {
    let mut full = vec!["timeline"];
    full.extend_from_slice(args);
    <Cli as clap::Parser>::try_parse_from(full).unwrap()
}

/// Configuration pointing at `server_url` with an optional repository.
pub fn config(server_url: &str, repo_id: Option<&str>) -> Config {
    Config {
        server_url: server_url.to_string(),
        repo_id: repo_id.map(str::to_string),
        json_errors: false,
    }
}

//! Centralized string constants for the timeline CLI
//!
//! Endpoint paths, header values, environment variable names and the
//! user-facing hint strings shared between the client and the CLI.

// Server
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:12002";

// API endpoints
pub const PATH_OPEN_REPOSITORIES: &str = "/api/open-repositories";
pub const PATH_FILE_SELECTOR_ROOTS: &str = "/api/file-selector-roots";
pub const PATH_OPEN_REPOSITORY: &str = "/api/open-repository";
pub const PATH_SEARCH_ITEMS: &str = "/api/search-items";
pub const PATH_SEARCH_ENTITIES: &str = "/api/search-entities";
pub const PATH_DATA_SOURCES: &str = "/api/data-sources";
pub const PATH_CHARTS: &str = "/api/charts";
pub const PATH_IMPORT: &str = "/api/import";

// Query and body keys
pub const PARAM_REPO: &str = "repo";
pub const PARAM_REPO_ID: &str = "repo_id";
pub const PARAM_REPO_PATH: &str = "repo_path";
pub const PARAM_CREATE: &str = "create";
pub const PARAM_NAME: &str = "name";

// Header values sent with import requests
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
pub const BROWSER_ACCEPT: &str = "application/json, text/plain, */*";
pub const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

// Content Types
pub const CONTENT_TYPE_JSON: &str = "application/json";

// Search defaults
pub const SEARCH_DATA_SOURCE: &str = "firefox";

// Entity attribute names
pub const ATTRIBUTE_NAME: &str = "name";
pub const ATTRIBUTE_PHONE: &str = "phone_number";
pub const ATTRIBUTE_EMAIL: &str = "email_address";

// Environment Variables
pub const ENV_TIMELINE_REPO: &str = "TIMELINE_REPO";
pub const ENV_TIMELINE_SERVER: &str = "TIMELINE_SERVER";
pub const ENV_TIMELINE_CONFIG_DIR: &str = "TIMELINE_CONFIG_DIR";
pub const ENV_TIMELINE_LOG: &str = "TIMELINE_LOG";
pub const ENV_TIMELINE_LOG_FORMAT: &str = "TIMELINE_LOG_FORMAT";
pub const ENV_TIMELINE_LOG_FILE: &str = "TIMELINE_LOG_FILE";
pub const ENV_TIMELINE_LOG_MAX_BODY: &str = "TIMELINE_LOG_MAX_BODY";

// Files
pub const CONFIG_FILENAME: &str = "config.toml";
pub const CONFIG_DIR_NAME: &str = "timeline";

// Common Response Messages
pub const EMPTY_RESPONSE: &str = "(empty response)";

// Error Context Messages
pub const ERR_MISSING_REPO: &str =
    "Pass --repo <ID>, export TIMELINE_REPO, or set default_repo in config.toml.";
pub const ERR_NOT_FOUND: &str = "Check that the repository id and request parameters are correct.";
pub const ERR_SERVER_ERROR: &str = "The timeline server reported an internal error. Check its logs.";
pub const ERR_CONNECTION: &str = "Check that the timeline server is running and accessible.";
pub const ERR_TIMEOUT: &str = "The timeline server may be busy or unresponsive. Try again later.";
pub const ERR_JSON: &str = "Check that the input or response contains valid JSON.";
pub const ERR_CONFIG_SYNTAX: &str = "Check that config.toml is valid TOML syntax.";
pub const ERR_FILE_NOT_FOUND: &str = "Check that the file path is correct and the file exists.";
pub const ERR_PERMISSION: &str = "Check file permissions or run with appropriate privileges.";

//! Typed payloads sent to the timeline server.
//!
//! These structs replace loosely-typed option maps. They serialize to the
//! exact JSON shapes the server expects, either as a request body or, via
//! [`crate::request::encode_query`], as query parameters.

use crate::constants;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Query parameters for `/api/search-items`, minus the repository id which
/// the client adds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItemsParams {
    pub data_source: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_text: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_text: Option<String>,
}

impl SearchItemsParams {
    /// Exact text match.
    #[must_use]
    pub fn exact(text: impl Into<String>) -> Self {
        Self {
            data_source: vec![constants::SEARCH_DATA_SOURCE.to_string()],
            data_text: vec![text.into()],
            semantic_text: None,
        }
    }

    /// Server-side semantic match.
    #[must_use]
    pub fn semantic(text: impl Into<String>) -> Self {
        Self {
            data_source: vec![constants::SEARCH_DATA_SOURCE.to_string()],
            data_text: Vec::new(),
            semantic_text: Some(text.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// One entry of the entity search `attributes` list.
///
/// The server receives name filters as a bare object and phone/email
/// filters wrapped in a single-element list. Both shapes are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeEntry {
    Bare(Attribute),
    Wrapped(Vec<Attribute>),
}

/// Query parameters for `/api/search-entities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntitiesParams {
    pub repo: String,
    #[serde(default)]
    pub attributes: Vec<AttributeEntry>,
    #[serde(default)]
    pub or_fields: bool,
}

impl SearchEntitiesParams {
    /// Starts an any-field-matches search in `repo` with no attributes.
    #[must_use]
    pub fn new(repo: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            attributes: Vec::new(),
            or_fields: true,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(AttributeEntry::Bare(Attribute {
            name: constants::ATTRIBUTE_NAME.to_string(),
            value: name.into(),
        }));
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.attributes.push(AttributeEntry::Wrapped(vec![Attribute {
            name: constants::ATTRIBUTE_PHONE.to_string(),
            value: phone.into(),
        }]));
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.attributes.push(AttributeEntry::Wrapped(vec![Attribute {
            name: constants::ATTRIBUTE_EMAIL.to_string(),
            value: email.into(),
        }]));
        self
    }
}

/// Fields the server compares to decide whether an imported item already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct UniqueConstraints {
    pub data_source_name: bool,
    pub original_location: bool,
    pub filename: bool,
    pub timestamp: bool,
    pub coordinates: bool,
    pub classification_name: bool,
    pub data: bool,
}

impl Default for UniqueConstraints {
    fn default() -> Self {
        Self {
            data_source_name: true,
            original_location: false,
            filename: true,
            timestamp: true,
            coordinates: true,
            classification_name: true,
            data: true,
        }
    }
}

/// The `item_unique_constraints` value of an import job.
///
/// A custom object replaces the flag-derived constraints entirely; the two
/// are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemUniqueConstraints {
    Flags(UniqueConstraints),
    Custom(Map<String, Value>),
}

impl ItemUniqueConstraints {
    /// Applies an optional raw JSON override on top of `flags`.
    ///
    /// Only a JSON object overrides. Anything else, including invalid JSON,
    /// logs a warning and keeps `flags`.
    #[must_use]
    pub fn with_override(flags: UniqueConstraints, raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Flags(flags);
        };
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Self::Custom(map),
            Ok(other) => {
                warn!(
                    target: "timeline::cli",
                    "Ignoring --constraints-json: expected a JSON object, got {other}"
                );
                Self::Flags(flags)
            }
            Err(e) => {
                warn!(
                    target: "timeline::cli",
                    "Ignoring --constraints-json: {e}"
                );
                Self::Flags(flags)
            }
        }
    }
}

impl Default for ItemUniqueConstraints {
    fn default() -> Self {
        Self::Flags(UniqueConstraints::default())
    }
}

/// Server-side processing switches for an import job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProcessingOptions {
    pub integrity: bool,
    pub overwrite_local_changes: bool,
    pub item_unique_constraints: ItemUniqueConstraints,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive: Option<bool>,
    pub estimate_total: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileImport {
    pub data_source_name: String,
    pub filenames: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImportPlan {
    pub files: Vec<FileImport>,
}

impl ImportPlan {
    /// A plan importing every file through one data source.
    #[must_use]
    pub fn single(data_source_name: impl Into<String>, filenames: Vec<String>) -> Self {
        Self {
            files: vec![FileImport {
                data_source_name: data_source_name.into(),
                filenames,
            }],
        }
    }
}

/// Merges the `--file` and `--files` flag values into one ordered list.
///
/// The single file comes first, followed by the comma-separated entries.
/// Entries are trimmed and empty ones dropped.
#[must_use]
pub fn merge_file_args(file: Option<&str>, files: Option<&str>) -> Vec<String> {
    file.into_iter()
        .chain(files.into_iter().flat_map(|list| list.split(',')))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

//! Endpoint descriptions for the timeline server API.
//!
//! An [`ApiRequest`] is a pure value: method, path, query pairs and an
//! optional JSON body. Building one never touches the network, which lets
//! the CLI print requests in dry-run mode and lets tests inspect exactly
//! what would be sent.

use crate::constants;
use crate::error::Error;
use crate::options::{ImportPlan, ProcessingOptions, SearchEntitiesParams, SearchItemsParams};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Send the browser-style header set along with the body
    pub browser_headers: bool,
}

#[derive(Serialize)]
struct ImportBody<'a> {
    repo: &'a str,
    job: ImportJob<'a>,
}

#[derive(Serialize)]
struct ImportJob<'a> {
    plan: &'a ImportPlan,
    processing_options: &'a ProcessingOptions,
}

impl ApiRequest {
    fn get(path: &'static str) -> Self {
        Self {
            method: Method::GET,
            path,
            query: Vec::new(),
            body: None,
            browser_headers: false,
        }
    }

    fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    #[must_use]
    pub fn open_repositories() -> Self {
        Self::get(constants::PATH_OPEN_REPOSITORIES)
    }

    #[must_use]
    pub fn file_selector_roots() -> Self {
        Self::get(constants::PATH_FILE_SELECTOR_ROOTS)
    }

    #[must_use]
    pub fn open_repository(repo_path: &str, create: bool) -> Self {
        Self::get(constants::PATH_OPEN_REPOSITORY)
            .with_param(constants::PARAM_REPO_PATH, repo_path)
            .with_param(constants::PARAM_CREATE, create.to_string())
    }

    /// Item search in `repo_id`; `repo` precedes the caller's parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters cannot be serialized.
    pub fn search_items(repo_id: &str, params: &SearchItemsParams) -> Result<Self, Error> {
        let mut request =
            Self::get(constants::PATH_SEARCH_ITEMS).with_param(constants::PARAM_REPO, repo_id);
        request.query.extend(encode_query(&serde_json::to_value(params)?));
        Ok(request)
    }

    /// # Errors
    ///
    /// Returns an error if the parameters cannot be serialized.
    pub fn search_entities(params: &SearchEntitiesParams) -> Result<Self, Error> {
        let mut request = Self::get(constants::PATH_SEARCH_ENTITIES);
        request.query = encode_query(&serde_json::to_value(params)?);
        Ok(request)
    }

    #[must_use]
    pub fn data_sources(repo_id: &str) -> Self {
        Self::get(constants::PATH_DATA_SOURCES).with_param(constants::PARAM_REPO, repo_id)
    }

    #[must_use]
    pub fn chart(repo_id: &str, name: &str) -> Self {
        Self::get(constants::PATH_CHARTS)
            .with_param(constants::PARAM_NAME, name)
            .with_param(constants::PARAM_REPO_ID, repo_id)
    }

    /// Import job POST with body `{repo, job: {plan, processing_options}}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the plan or options cannot be serialized.
    pub fn import(
        repo_id: &str,
        plan: &ImportPlan,
        processing_options: &ProcessingOptions,
    ) -> Result<Self, Error> {
        let body = serde_json::to_value(ImportBody {
            repo: repo_id,
            job: ImportJob {
                plan,
                processing_options,
            },
        })?;
        Ok(Self {
            method: Method::POST,
            path: constants::PATH_IMPORT,
            query: Vec::new(),
            body: Some(body),
            browser_headers: true,
        })
    }

    /// Full URL of this request against `base_url`, query string included.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        let mut url = format!("{}{}", base_url.trim_end_matches('/'), self.path);
        if !self.query.is_empty() {
            let pairs: Vec<String> = self
                .query
                .iter()
                .map(|(key, value)| {
                    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
                })
                .collect();
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        url
    }
}

/// Flattens a JSON object into query pairs.
///
/// Scalars use their plain string form, arrays repeat the key once per
/// element, nested objects are sent as compact JSON and nulls are skipped.
/// Non-object input yields no pairs.
#[must_use]
pub fn encode_query(value: &Value) -> Vec<(String, String)> {
    let Value::Object(map) = value else {
        return Vec::new();
    };
    let mut pairs = Vec::new();
    for (key, value) in map {
        match value {
            Value::Array(items) => {
                pairs.extend(
                    items
                        .iter()
                        .filter_map(scalar_or_json)
                        .map(|item| (key.clone(), item)),
                );
            }
            other => {
                if let Some(item) = scalar_or_json(other) {
                    pairs.push((key.clone(), item));
                }
            }
        }
    }
    pairs
}

fn scalar_or_json(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::UniqueConstraints;
    use serde_json::json;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_search_items_merges_repo_first() {
        let request = ApiRequest::search_items("r1", &SearchItemsParams::exact("foo")).unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/api/search-items");
        assert_eq!(
            request.query,
            pairs(&[("repo", "r1"), ("data_source", "firefox"), ("data_text", "foo")])
        );
    }

    #[test]
    fn test_open_repository_query() {
        let request = ApiRequest::open_repository("/data/tl", true);
        assert_eq!(
            request.url("http://127.0.0.1:12002/"),
            "http://127.0.0.1:12002/api/open-repository?repo_path=%2Fdata%2Ftl&create=true"
        );
    }

    #[test]
    fn test_chart_query() {
        let request = ApiRequest::chart("r1", "periodical");
        assert_eq!(request.query, pairs(&[("name", "periodical"), ("repo_id", "r1")]));
    }

    #[test]
    fn test_entity_attributes_are_json_encoded() {
        let params = SearchEntitiesParams::new("r1").with_phone("555");
        let mut query = ApiRequest::search_entities(&params).unwrap().query;
        query.sort();
        assert_eq!(
            query,
            pairs(&[
                ("attributes", r#"[{"name":"phone_number","value":"555"}]"#),
                ("or_fields", "true"),
                ("repo", "r1"),
            ])
        );
    }

    #[test]
    fn test_import_body_shape() {
        let plan = ImportPlan::single("generic", vec!["a.txt".to_string()]);
        let options = ProcessingOptions {
            interactive: Some(true),
            ..ProcessingOptions::default()
        };
        let request = ApiRequest::import("r1", &plan, &options).unwrap();
        assert_eq!(request.method, Method::POST);
        assert!(request.browser_headers);
        let body = request.body.unwrap();
        assert_eq!(body["repo"], "r1");
        assert_eq!(
            body["job"]["plan"],
            json!({"files": [{"data_source_name": "generic", "filenames": ["a.txt"]}]})
        );
        assert_eq!(body["job"]["processing_options"]["interactive"], true);
        assert_eq!(
            body["job"]["processing_options"]["item_unique_constraints"],
            serde_json::to_value(UniqueConstraints::default()).unwrap()
        );
    }

    #[test]
    fn test_encode_query_skips_null_and_non_objects() {
        assert!(encode_query(&json!([1, 2])).is_empty());
        assert_eq!(
            encode_query(&json!({"a": null, "b": 1.5, "c": [true, null]})),
            pairs(&[("b", "1.5"), ("c", "true")])
        );
    }
}

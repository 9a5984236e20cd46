//! HTTP client for the timeline server.
//!
//! [`TimelineClient`] is a thin pipe: every endpoint method builds its
//! request, sends it, and hands back the raw [`reqwest::Response`]. Status
//! codes and bodies are left for the caller to inspect. Constructing a
//! client never performs network I/O, so a bad base URL or an unknown
//! repository only surfaces when a request is sent.

use crate::constants;
use crate::error::Error;
use crate::logging;
use crate::options::{ImportPlan, ProcessingOptions, SearchEntitiesParams, SearchItemsParams};
use crate::request::ApiRequest;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT,
};
use reqwest::Response;
use std::time::Instant;

/// Installs the process-wide rustls crypto provider.
fn ensure_crypto_provider() {
    // Already installed is fine.
    let _ = rustls::crypto::ring::default_provider().install_default();
}

#[derive(Debug, Clone)]
pub struct TimelineClient {
    http: reqwest::Client,
    base_url: String,
    repo_id: String,
}

impl TimelineClient {
    /// Creates a client scoped to `repo_id` on the server at `base_url`.
    ///
    /// Both values are stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP backend cannot be initialised.
    pub fn new(base_url: impl Into<String>, repo_id: impl Into<String>) -> Result<Self, Error> {
        ensure_crypto_provider();
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            repo_id: repo_id.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn repo_id(&self) -> &str {
        &self.repo_id
    }

    /// Turns an [`ApiRequest`] into a ready-to-send [`reqwest::Request`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed or the base URL cannot be
    /// used as an `Origin` header.
    pub fn prepare(&self, request: &ApiRequest) -> Result<reqwest::Request, Error> {
        let mut builder = self
            .http
            .request(request.method.clone(), request.url(&self.base_url));
        if request.browser_headers {
            builder = builder.headers(self.browser_headers()?);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        Ok(builder.build()?)
    }

    /// Sends `request` and returns the response without looking at it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or the transport fails.
    pub async fn send(&self, request: &ApiRequest) -> Result<Response, Error> {
        let request = self.prepare(request)?;
        logging::log_request(&request);

        let start = Instant::now();
        let response = self.http.execute(request).await?;
        logging::log_response(&response, start.elapsed().as_millis());
        Ok(response)
    }

    fn browser_headers(&self) -> Result<HeaderMap, Error> {
        let origin = self.base_url.trim_end_matches('/');
        let to_header = |value: String| {
            HeaderValue::from_str(&value)
                .map_err(|e| Error::Config(format!("Invalid base URL '{}': {e}", self.base_url)))
        };

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(constants::BROWSER_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(constants::BROWSER_ACCEPT));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(constants::BROWSER_ACCEPT_LANGUAGE),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(constants::CONTENT_TYPE_JSON));
        headers.insert(ORIGIN, to_header(origin.to_string())?);
        headers.insert(REFERER, to_header(format!("{origin}/"))?);
        Ok(headers)
    }

    /// `GET /api/open-repositories`
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn open_repositories(&self) -> Result<Response, Error> {
        self.send(&ApiRequest::open_repositories()).await
    }

    /// `GET /api/file-selector-roots`
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn file_selector_roots(&self) -> Result<Response, Error> {
        self.send(&ApiRequest::file_selector_roots()).await
    }

    /// `GET /api/open-repository`, creating the repository when `create` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn open_repository(&self, repo_path: &str, create: bool) -> Result<Response, Error> {
        self.send(&ApiRequest::open_repository(repo_path, create)).await
    }

    /// `GET /api/search-items` in this client's repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters cannot be encoded or the transport fails.
    pub async fn search_items(&self, params: &SearchItemsParams) -> Result<Response, Error> {
        self.send(&ApiRequest::search_items(&self.repo_id, params)?).await
    }

    /// `GET /api/search-entities` with the parameters as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters cannot be encoded or the transport fails.
    pub async fn search_entities(&self, params: &SearchEntitiesParams) -> Result<Response, Error> {
        self.send(&ApiRequest::search_entities(params)?).await
    }

    /// `GET /api/data-sources` for this client's repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn data_sources(&self) -> Result<Response, Error> {
        self.send(&ApiRequest::data_sources(&self.repo_id)).await
    }

    /// `GET /api/charts` for the named chart.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn chart(&self, name: &str) -> Result<Response, Error> {
        self.send(&ApiRequest::chart(&self.repo_id, name)).await
    }

    /// `POST /api/import` with the browser-style header set.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized or the transport fails.
    pub async fn import(
        &self,
        plan: &ImportPlan,
        processing_options: &ProcessingOptions,
    ) -> Result<Response, Error> {
        self.send(&ApiRequest::import(&self.repo_id, plan, processing_options)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_values_verbatim() {
        let client = TimelineClient::new("not a url", "").unwrap();
        assert_eq!(client.base_url(), "not a url");
        assert_eq!(client.repo_id(), "");
    }

    #[test]
    fn test_prepare_fails_for_malformed_base_url() {
        let client = TimelineClient::new("not a url", "r1").unwrap();
        assert!(matches!(
            client.prepare(&ApiRequest::open_repositories()),
            Err(Error::Network(_))
        ));
    }

    #[test]
    fn test_prepare_import_sets_browser_headers() {
        let client = TimelineClient::new("http://127.0.0.1:12002/", "r1").unwrap();
        let request = ApiRequest::import(
            "r1",
            &ImportPlan::single("generic", vec!["a.txt".to_string()]),
            &ProcessingOptions::default(),
        )
        .unwrap();
        let prepared = client.prepare(&request).unwrap();

        assert_eq!(prepared.method(), reqwest::Method::POST);
        assert_eq!(prepared.url().as_str(), "http://127.0.0.1:12002/api/import");
        let headers = prepared.headers();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ORIGIN], "http://127.0.0.1:12002");
        assert_eq!(headers[REFERER], "http://127.0.0.1:12002/");
        assert!(headers[USER_AGENT].to_str().unwrap().starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_prepare_get_has_no_body() {
        let client = TimelineClient::new("http://localhost:12002", "r1").unwrap();
        let prepared = client.prepare(&ApiRequest::data_sources("r1")).unwrap();
        assert!(prepared.body().is_none());
        assert_eq!(
            prepared.url().as_str(),
            "http://localhost:12002/api/data-sources?repo=r1"
        );
    }
}

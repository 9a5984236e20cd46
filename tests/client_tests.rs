//! Endpoint tests for `TimelineClient` against a mock server.

use serde_json::json;
use timeline_cli::client::TimelineClient;
use timeline_cli::options::{
    ImportPlan, ItemUniqueConstraints, ProcessingOptions, SearchEntitiesParams, SearchItemsParams,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn query_of(request: &wiremock::Request) -> Vec<(String, String)> {
    request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[tokio::test]
async fn test_construction_performs_no_requests() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = TimelineClient::new(mock_server.uri(), "does-not-exist").unwrap();
    assert_eq!(client.repo_id(), "does-not-exist");
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_open_repositories_returns_raw_response() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/open-repositories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"instance_id": "r1"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TimelineClient::new(mock_server.uri(), "r1").unwrap();
    let response = client.open_repositories().await.unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!([{"instance_id": "r1"}]));
}

#[tokio::test]
async fn test_error_status_is_not_intercepted() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/file-selector-roots"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TimelineClient::new(mock_server.uri(), "r1").unwrap();
    let response = client.file_selector_roots().await.unwrap();
    assert_eq!(response.status(), 500);
    assert_eq!(response.text().await.unwrap(), "boom");
}

#[tokio::test]
async fn test_open_repository_sends_path_and_create() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/open-repository"))
        .and(query_param("repo_path", "/srv/my timeline"))
        .and(query_param("create", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"instance_id": "new"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TimelineClient::new(mock_server.uri(), "").unwrap();
    let response = client.open_repository("/srv/my timeline", true).await.unwrap();
    assert!(response.status().is_success());
}

#[tokio::test]
async fn test_search_items_merges_repo_into_query() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search-items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TimelineClient::new(mock_server.uri(), "r1").unwrap();
    client
        .search_items(&SearchItemsParams::semantic("beach trips"))
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(
        query_of(&requests[0]),
        vec![
            ("repo".to_string(), "r1".to_string()),
            ("data_source".to_string(), "firefox".to_string()),
            ("semantic_text".to_string(), "beach trips".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_search_entities_sends_params_as_given() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search-entities"))
        .and(query_param("repo", "r1"))
        .and(query_param("or_fields", "true"))
        .and(query_param("attributes", r#"{"name":"name","value":"Ada"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TimelineClient::new(mock_server.uri(), "ignored").unwrap();
    let params = SearchEntitiesParams::new("r1").with_name("Ada");
    client.search_entities(&params).await.unwrap();
}

#[tokio::test]
async fn test_data_sources_and_chart_use_repo() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/data-sources"))
        .and(query_param("repo", "r1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/charts"))
        .and(query_param("name", "periodical"))
        .and(query_param("repo_id", "r1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TimelineClient::new(mock_server.uri(), "r1").unwrap();
    client.data_sources().await.unwrap();
    client.chart("periodical").await.unwrap();
}

#[tokio::test]
async fn test_import_posts_job_with_browser_headers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/import"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"job_id": 7})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TimelineClient::new(mock_server.uri(), "r1").unwrap();
    let plan = ImportPlan::single("generic", vec!["a.txt".to_string(), "b.txt".to_string()]);
    let response = client
        .import(&plan, &ProcessingOptions::default())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let requests = mock_server.received_requests().await.unwrap();
    let headers = &requests[0].headers;
    assert_eq!(headers["accept"], "application/json, text/plain, */*");
    assert_eq!(headers["accept-language"], "en-US,en;q=0.9");
    assert_eq!(headers["origin"], mock_server.uri().as_str());
    assert_eq!(
        headers["referer"],
        format!("{}/", mock_server.uri()).as_str()
    );
    assert!(headers["user-agent"].to_str().unwrap().starts_with("Mozilla/5.0"));

    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["repo"], "r1");
    assert_eq!(
        body["job"]["plan"]["files"],
        json!([{"data_source_name": "generic", "filenames": ["a.txt", "b.txt"]}])
    );
    let options: ProcessingOptions =
        serde_json::from_value(body["job"]["processing_options"].clone()).unwrap();
    assert_eq!(options, ProcessingOptions::default());
    assert_eq!(
        options.item_unique_constraints,
        ItemUniqueConstraints::default()
    );
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Port 9 (discard) on localhost is expected to refuse connections.
    let client = TimelineClient::new("http://127.0.0.1:9", "r1").unwrap();
    let result = client.open_repositories().await;
    assert!(matches!(result, Err(timeline_cli::error::Error::Network(_))));
}

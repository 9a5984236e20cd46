//! Handlers for the repository-level listing commands.

use super::Invocation;
use crate::error::Error;
use crate::request::ApiRequest;

pub async fn execute_list_open(invocation: &Invocation<'_>) -> Result<Option<String>, Error> {
    invocation.dispatch(&ApiRequest::open_repositories()).await
}

pub async fn execute_roots(invocation: &Invocation<'_>) -> Result<Option<String>, Error> {
    invocation.dispatch(&ApiRequest::file_selector_roots()).await
}

pub async fn execute_open(
    invocation: &Invocation<'_>,
    repo_path: &str,
    create: bool,
) -> Result<Option<String>, Error> {
    invocation
        .dispatch(&ApiRequest::open_repository(repo_path, create))
        .await
}

pub async fn execute_data_sources(invocation: &Invocation<'_>) -> Result<Option<String>, Error> {
    let request = ApiRequest::data_sources(invocation.client.repo_id());
    invocation.dispatch(&request).await
}

pub async fn execute_chart(invocation: &Invocation<'_>, name: &str) -> Result<Option<String>, Error> {
    let request = ApiRequest::chart(invocation.client.repo_id(), name);
    invocation.dispatch(&request).await
}

//! Handlers for `timeline search` and `timeline search-entities`.

use super::Invocation;
use crate::cli::{SearchArgs, SearchEntitiesArgs};
use crate::error::Error;
use crate::options::{SearchEntitiesParams, SearchItemsParams};
use crate::request::ApiRequest;

/// Picks exact or semantic search from the flags.
///
/// # Errors
///
/// Returns a usage error unless exactly one of `--text` and `--semantic` is
/// set. Empty values count as unset.
pub fn search_params(args: &SearchArgs) -> Result<SearchItemsParams, Error> {
    let non_empty = |value: Option<&String>| value.filter(|text| !text.is_empty()).cloned();
    match (non_empty(args.text.as_ref()), non_empty(args.semantic.as_ref())) {
        (Some(text), None) => Ok(SearchItemsParams::exact(text)),
        (None, Some(text)) => Ok(SearchItemsParams::semantic(text)),
        (Some(_), Some(_)) => Err(Error::Usage(
            "--text and --semantic cannot be used together".to_string(),
        )),
        (None, None) => Err(Error::Usage(
            "Provide --text for an exact match or --semantic for a semantic match".to_string(),
        )),
    }
}

pub async fn execute_search(
    invocation: &Invocation<'_>,
    args: &SearchArgs,
) -> Result<Option<String>, Error> {
    let params = search_params(args)?;
    let request = ApiRequest::search_items(invocation.client.repo_id(), &params)?;
    invocation.dispatch(&request).await
}

#[must_use]
pub fn entity_params(repo_id: &str, args: &SearchEntitiesArgs) -> SearchEntitiesParams {
    let mut params = SearchEntitiesParams::new(repo_id);
    if let Some(name) = &args.name {
        params = params.with_name(name);
    }
    if let Some(phone) = &args.phone {
        params = params.with_phone(phone);
    }
    if let Some(email) = &args.email {
        params = params.with_email(email);
    }
    params
}

pub async fn execute_search_entities(
    invocation: &Invocation<'_>,
    args: &SearchEntitiesArgs,
) -> Result<Option<String>, Error> {
    let params = entity_params(invocation.client.repo_id(), args);
    invocation
        .dispatch(&ApiRequest::search_entities(&params)?)
        .await
}

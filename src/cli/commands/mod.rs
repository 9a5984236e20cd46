//! CLI command handlers.
//!
//! Each handler assembles typed options from its flags, builds the
//! [`ApiRequest`], and hands it to [`Invocation::dispatch`], which either
//! sends it or, in dry-run mode, describes it. Handlers return the rendered
//! output; printing is left to `main`.

pub mod import;
pub mod repository;
pub mod search;

use crate::cli::render::{render_dry_run, render_response};
use crate::cli::{Cli, Commands, OutputFormat};
use crate::client::TimelineClient;
use crate::config::Config;
use crate::error::Error;
use crate::request::ApiRequest;

/// Per-run state shared by the handlers.
#[derive(Debug)]
pub struct Invocation<'a> {
    pub client: &'a TimelineClient,
    pub format: OutputFormat,
    pub dry_run: bool,
}

impl Invocation<'_> {
    /// Sends `request` and renders the response, or renders the request itself
    /// in dry-run mode.
    ///
    /// # Errors
    ///
    /// Returns transport, status and decoding errors from the round trip.
    pub async fn dispatch(&self, request: &ApiRequest) -> Result<Option<String>, Error> {
        if self.dry_run {
            let prepared = self.client.prepare(request)?;
            return render_dry_run(&prepared, self.format).map(Some);
        }
        let response = self.client.send(request).await?;
        render_response(response, self.format).await
    }
}

/// Runs the parsed command against the configured server.
///
/// Repository-scoped commands fail with [`Error::MissingRepository`] before
/// any request is built when no repository is configured.
///
/// # Errors
///
/// Returns configuration, usage, transport and response errors.
pub async fn execute_command(cli: &Cli, config: &Config) -> Result<Option<String>, Error> {
    let repo_id = if requires_repo(&cli.command) {
        config.require_repo()?.to_string()
    } else {
        config.repo_id.clone().unwrap_or_default()
    };
    let client = TimelineClient::new(&config.server_url, repo_id)?;
    let invocation = Invocation {
        client: &client,
        format: cli.format,
        dry_run: cli.dry_run,
    };

    match &cli.command {
        Commands::Search(args) => search::execute_search(&invocation, args).await,
        Commands::SearchEntities(args) => search::execute_search_entities(&invocation, args).await,
        Commands::Import(args) => import::execute_import(&invocation, args).await,
        Commands::Repos => repository::execute_list_open(&invocation).await,
        Commands::Roots => repository::execute_roots(&invocation).await,
        Commands::Open { repo_path, create } => {
            repository::execute_open(&invocation, repo_path, *create).await
        }
        Commands::DataSources => repository::execute_data_sources(&invocation).await,
        Commands::Charts { name } => repository::execute_chart(&invocation, name).await,
    }
}

const fn requires_repo(command: &Commands) -> bool {
    !matches!(
        command,
        Commands::Repos | Commands::Roots | Commands::Open { .. }
    )
}

pub mod commands;
pub mod errors;
pub mod render;
pub mod tracing_init;

use crate::config::ConfigOverrides;
use crate::options::{ItemUniqueConstraints, ProcessingOptions, UniqueConstraints};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Output as JSON (default)
    Json,
    /// Output as YAML
    Yaml,
}

#[derive(Parser, Debug)]
#[command(
    name = "timeline",
    author,
    version,
    about = "Command-line client for a personal-data timeline server",
    long_about = "Search, inspect and import into the repositories of a running timeline server.\n\n\
                  The repository is taken from --repo, the TIMELINE_REPO environment\n\
                  variable, or default_repo in config.toml, in that order.\n\n\
                  Examples:\n  \
                  timeline search --text 'rust'\n  \
                  timeline search-entities --email ada@example.com\n  \
                  timeline import --data-source generic --files a.json,b.json\n  \
                  timeline --dry-run import --data-source generic --file a.json"
)]
pub struct Cli {
    /// Base URL of the timeline server
    #[arg(
        long,
        global = true,
        value_name = "URL",
        help = "Server base URL (default: TIMELINE_SERVER or http://127.0.0.1:12002)"
    )]
    pub server: Option<String>,

    /// Repository to operate on
    #[arg(
        long,
        global = true,
        value_name = "ID",
        help = "Repository id (default: TIMELINE_REPO)"
    )]
    pub repo: Option<String>,

    /// Output all errors as structured JSON to stderr
    #[arg(long, global = true, help = "Output errors in JSON format")]
    pub json_errors: bool,

    /// Suppress non-essential output
    #[arg(
        long,
        short = 'q',
        global = true,
        help = "Suppress informational output"
    )]
    pub quiet: bool,

    /// Increase logging verbosity
    #[arg(
        short = 'v',
        global = true,
        action = ArgAction::Count,
        help = "Increase logging verbosity (-v for debug, -vv for trace)"
    )]
    pub verbosity: u8,

    /// Show the HTTP request that would be made without executing it
    #[arg(long, global = true, help = "Show request details without executing")]
    pub dry_run: bool,

    /// Output format for response data
    #[arg(
        long,
        global = true,
        value_enum,
        default_value = "json",
        help = "Output format for response data"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The configuration values given as flags.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            server_url: self.server.clone(),
            repo_id: self.repo.clone(),
            json_errors: self.json_errors,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search items in the repository by exact or semantic text
    #[command(long_about = "Search timeline items in the current repository.\n\n\
                      Exactly one of --text (exact match) or --semantic (semantic\n\
                      match) is required.\n\n\
                      Examples:\n  \
                      timeline search --text 'invoice'\n  \
                      timeline search --semantic 'trips to the coast'")]
    Search(SearchArgs),
    /// Search entities by name, phone number or email address
    #[command(
        name = "search-entities",
        long_about = "Search people and other entities in the current repository.\n\n\
                      Any combination of --name, --phone and --email may be given;\n\
                      an entity matching any one of them is returned.\n\n\
                      Example:\n  \
                      timeline search-entities --name Ada --email ada@example.com"
    )]
    SearchEntities(SearchEntitiesArgs),
    /// Start an import job for one or more files
    #[command(long_about = "Submit files to the server's import pipeline.\n\n\
                      Files come from --file and/or --files (comma-separated).\n\
                      Processing switches and item uniqueness constraints are sent\n\
                      with the job; --constraints-json replaces the constraints\n\
                      with an arbitrary JSON object.\n\n\
                      Examples:\n  \
                      timeline import --data-source generic --file notes.txt\n  \
                      timeline import --data-source generic --files a.txt,b.txt --integrity\n  \
                      timeline import --data-source generic --file a.txt \\\n    \
                      --constraints-json '{\"data\": true}'")]
    Import(ImportArgs),
    /// List repositories currently open on the server
    Repos,
    /// List the filesystem roots the server offers for file selection
    Roots,
    /// Open (or create) a repository on the server
    Open {
        /// Path of the repository folder on the server host
        repo_path: String,
        /// Create the repository if it does not exist
        #[arg(long, help = "Create the repository if it does not exist")]
        create: bool,
    },
    /// List the data sources known to the repository
    #[command(name = "data-sources")]
    DataSources,
    /// Fetch statistics for a named chart
    Charts {
        /// Chart name
        name: String,
    },
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Exact text to match
    #[arg(long, conflicts_with = "semantic", help = "Exact text to match")]
    pub text: Option<String>,
    /// Text to match semantically
    #[arg(long, help = "Text to match semantically")]
    pub semantic: Option<String>,
}

#[derive(Args, Debug)]
pub struct SearchEntitiesArgs {
    #[arg(long, help = "Entity name")]
    pub name: Option<String>,
    #[arg(long, help = "Phone number")]
    pub phone: Option<String>,
    #[arg(long, help = "Email address")]
    pub email: Option<String>,
}

#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct ImportArgs {
    /// Data source the files are imported through
    #[arg(long, value_name = "NAME", help = "Data source name, e.g. 'generic'")]
    pub data_source: String,

    #[arg(long, value_name = "PATH", help = "A single file to import")]
    pub file: Option<String>,

    #[arg(long, value_name = "PATHS", help = "Comma-separated list of files to import")]
    pub files: Option<String>,

    #[arg(long, help = "Verify data integrity during import")]
    pub integrity: bool,

    #[arg(long, help = "Overwrite items that were edited locally")]
    pub overwrite_local_changes: bool,

    #[arg(long, help = "Ask for confirmation of each item during import")]
    pub interactive: bool,

    #[arg(long, help = "Estimate the total number of items before importing")]
    pub estimate_total: bool,

    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set,
        help = "Compare data source when detecting duplicate items"
    )]
    pub unique_data_source_name: bool,

    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = false,
        action = ArgAction::Set,
        help = "Compare original location when detecting duplicate items"
    )]
    pub unique_original_location: bool,

    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set,
        help = "Compare filename when detecting duplicate items"
    )]
    pub unique_filename: bool,

    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set,
        help = "Compare timestamp when detecting duplicate items"
    )]
    pub unique_timestamp: bool,

    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set,
        help = "Compare coordinates when detecting duplicate items"
    )]
    pub unique_coordinates: bool,

    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set,
        help = "Compare classification when detecting duplicate items"
    )]
    pub unique_classification_name: bool,

    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set,
        help = "Compare item data when detecting duplicate items"
    )]
    pub unique_data: bool,

    /// JSON object replacing all item uniqueness constraints
    #[arg(
        long,
        value_name = "JSON",
        help = "JSON object replacing the --unique-* constraints (ignored with a warning if invalid)"
    )]
    pub constraints_json: Option<String>,
}

impl ImportArgs {
    #[must_use]
    pub const fn unique_constraints(&self) -> UniqueConstraints {
        UniqueConstraints {
            data_source_name: self.unique_data_source_name,
            original_location: self.unique_original_location,
            filename: self.unique_filename,
            timestamp: self.unique_timestamp,
            coordinates: self.unique_coordinates,
            classification_name: self.unique_classification_name,
            data: self.unique_data,
        }
    }

    /// Assembles the processing options, applying `--constraints-json` if usable.
    #[must_use]
    pub fn processing_options(&self) -> ProcessingOptions {
        ProcessingOptions {
            integrity: self.integrity,
            overwrite_local_changes: self.overwrite_local_changes,
            item_unique_constraints: ItemUniqueConstraints::with_override(
                self.unique_constraints(),
                self.constraints_json.as_deref(),
            ),
            interactive: self.interactive.then_some(true),
            estimate_total: self.estimate_total,
        }
    }
}

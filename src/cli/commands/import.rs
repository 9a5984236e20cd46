//! Handler for `timeline import`.

use super::Invocation;
use crate::cli::ImportArgs;
use crate::error::Error;
use crate::options::{merge_file_args, ImportPlan};
use crate::request::ApiRequest;
use tracing::info;

/// Builds the import plan from `--data-source`, `--file` and `--files`.
///
/// # Errors
///
/// Returns a usage error when no file was given.
pub fn import_plan(args: &ImportArgs) -> Result<ImportPlan, Error> {
    let filenames = merge_file_args(args.file.as_deref(), args.files.as_deref());
    if filenames.is_empty() {
        return Err(Error::Usage(
            "No files to import. Pass --file <PATH> or --files <PATH,PATH,...>".to_string(),
        ));
    }
    Ok(ImportPlan::single(&args.data_source, filenames))
}

pub async fn execute_import(
    invocation: &Invocation<'_>,
    args: &ImportArgs,
) -> Result<Option<String>, Error> {
    let plan = import_plan(args)?;
    let processing_options = args.processing_options();
    info!(
        target: "timeline::cli",
        "Importing {} file(s) through '{}'",
        plan.files.iter().map(|f| f.filenames.len()).sum::<usize>(),
        args.data_source
    );

    let request = ApiRequest::import(invocation.client.repo_id(), &plan, &processing_options)?;
    invocation.dispatch(&request).await
}

//! Run page URL for the current workflow run.

use crate::app::WorkflowContext;
use crate::domain::github_env::{GITHUB_REPOSITORY, GITHUB_RUN_ID, GITHUB_SERVER_URL};
use crate::domain::{AppError, build_run_url};
use crate::ports::Environment;

/// Construct the URL of the current run from runner variables.
pub fn execute<E: Environment>(ctx: &WorkflowContext<E>) -> Result<String, AppError> {
    let env = ctx.environment();
    let server_url = env.var(GITHUB_SERVER_URL).unwrap_or_default();
    let repository = env.var(GITHUB_REPOSITORY).unwrap_or_default();
    let run_id = env.var(GITHUB_RUN_ID).unwrap_or_default();

    let url = build_run_url(&server_url, &repository, &run_id)?;
    log::trace!("Resolved run url {}", url);
    Ok(url)
}

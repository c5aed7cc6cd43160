//! Step summary markdown.

use std::path::Path;

use crate::app::WorkflowContext;
use crate::domain::AppError;
use crate::domain::github_env::GITHUB_STEP_SUMMARY;
use crate::ports::Environment;
use crate::services::append_to_file;

/// Append markdown to the file named by `GITHUB_STEP_SUMMARY`.
///
/// A trailing newline is added unless `markdown` already ends with one. The
/// existing file content is never inspected.
pub fn execute<E: Environment>(ctx: &WorkflowContext<E>, markdown: &str) -> Result<(), AppError> {
    let file = ctx.environment().require(GITHUB_STEP_SUMMARY)?;

    if markdown.ends_with('\n') {
        append_to_file(Path::new(&file), markdown)
    } else {
        append_to_file(Path::new(&file), &format!("{markdown}\n"))
    }
}

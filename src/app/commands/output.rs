//! Step output records.

use std::path::Path;

use crate::app::WorkflowContext;
use crate::domain::AppError;
use crate::domain::github_env::GITHUB_OUTPUT;
use crate::ports::Environment;
use crate::services::append_to_file;

/// Append `name=value` to the file named by `GITHUB_OUTPUT`.
///
/// Neither `name` nor `value` is escaped; a value containing a newline
/// produces a malformed record.
pub fn execute<E: Environment>(
    ctx: &WorkflowContext<E>,
    name: &str,
    value: &str,
) -> Result<(), AppError> {
    let file = ctx.environment().require(GITHUB_OUTPUT)?;
    append_to_file(Path::new(&file), &format!("{}={}\n", name, value))
}

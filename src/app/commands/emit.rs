//! Workflow command emission.

use std::io::{self, Write};

use crate::domain::{AppError, WorkflowCommand};

/// Write one workflow command line to `writer`.
///
/// The line is rendered in full before a single `write_all`.
pub fn execute<W: Write + ?Sized>(
    writer: &mut W,
    command: WorkflowCommand<'_>,
) -> Result<(), AppError> {
    let line = command.to_line();
    writer.write_all(line.as_bytes())?;
    Ok(())
}

/// Write one workflow command line to stdout.
pub fn execute_stdout(command: WorkflowCommand<'_>) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    execute(&mut stdout, command)
}

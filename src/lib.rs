//! ghactions: Emit GitHub Actions workflow commands, step outputs, and step summaries.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::fmt;
use std::io::Write;

use app::commands::emit;

pub use app::WorkflowContext;
pub use domain::{AppError, WorkflowCommand};
pub use ports::Environment;
pub use services::{ProcessEnvironment, StaticEnvironment};

// =============================================================================
// Workflow Commands
// =============================================================================

/// Mask a value from the job log.
///
/// Writes `::add-mask::{value}` to stdout.
pub fn add_mask(value: &str) -> Result<(), AppError> {
    emit::execute_stdout(WorkflowCommand::AddMask(value))
}

/// Mask a value from the job log, writing the command to `writer`.
///
/// Useful to send workflow commands to stderr instead of stdout.
pub fn add_mask_to<W: Write + ?Sized>(writer: &mut W, value: &str) -> Result<(), AppError> {
    emit::execute(writer, WorkflowCommand::AddMask(value))
}

/// Log a debug message. See [`log_debug!`].
pub fn log_debug(args: fmt::Arguments<'_>) -> Result<(), AppError> {
    emit::execute_stdout(WorkflowCommand::Debug(args))
}

/// Log a debug message to `writer`.
pub fn log_debug_to<W: Write + ?Sized>(
    writer: &mut W,
    args: fmt::Arguments<'_>,
) -> Result<(), AppError> {
    emit::execute(writer, WorkflowCommand::Debug(args))
}

/// Log a warning message. See [`log_warn!`].
pub fn log_warn(args: fmt::Arguments<'_>) -> Result<(), AppError> {
    emit::execute_stdout(WorkflowCommand::Warning(args))
}

/// Log a warning message to `writer`.
pub fn log_warn_to<W: Write + ?Sized>(
    writer: &mut W,
    args: fmt::Arguments<'_>,
) -> Result<(), AppError> {
    emit::execute(writer, WorkflowCommand::Warning(args))
}

/// Log an error message. See [`log_error!`].
pub fn log_error(args: fmt::Arguments<'_>) -> Result<(), AppError> {
    emit::execute_stdout(WorkflowCommand::Error(args))
}

/// Log an error message to `writer`.
pub fn log_error_to<W: Write + ?Sized>(
    writer: &mut W,
    args: fmt::Arguments<'_>,
) -> Result<(), AppError> {
    emit::execute(writer, WorkflowCommand::Error(args))
}

/// Log a debug message with `format!` syntax.
///
/// Prefix the arguments with `to: writer,` to write somewhere other than stdout.
///
/// ```
/// let mut buf = Vec::new();
/// ghactions::log_debug!(to: &mut buf, "cache hit for {}", "deps").unwrap();
/// assert_eq!(buf, b"::debug::cache hit for deps\n");
/// ```
#[macro_export]
macro_rules! log_debug {
    (to: $writer:expr, $($arg:tt)+) => {
        $crate::log_debug_to($writer, format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::log_debug(format_args!($($arg)+))
    };
}

/// Log a warning message with `format!` syntax.
///
/// Prefix the arguments with `to: writer,` to write somewhere other than stdout.
#[macro_export]
macro_rules! log_warn {
    (to: $writer:expr, $($arg:tt)+) => {
        $crate::log_warn_to($writer, format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::log_warn(format_args!($($arg)+))
    };
}

/// Log an error message with `format!` syntax.
///
/// Prefix the arguments with `to: writer,` to write somewhere other than stdout.
#[macro_export]
macro_rules! log_error {
    (to: $writer:expr, $($arg:tt)+) => {
        $crate::log_error_to($writer, format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::log_error(format_args!($($arg)+))
    };
}

// =============================================================================
// Runner Files
// =============================================================================

/// Set a step output. Appends `name=value` to the `$GITHUB_OUTPUT` file.
pub fn set_output(name: &str, value: &str) -> Result<(), AppError> {
    process_context().set_output(name, value)
}

/// Append markdown content to the `$GITHUB_STEP_SUMMARY` file.
pub fn set_summary(markdown: &str) -> Result<(), AppError> {
    process_context().set_summary(markdown)
}

/// Construct the URL of the current run from runner environment variables.
pub fn run_url() -> Result<String, AppError> {
    process_context().run_url()
}

fn process_context() -> WorkflowContext<ProcessEnvironment> {
    WorkflowContext::new(ProcessEnvironment::new())
}

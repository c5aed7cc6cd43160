//! Workflow command line format.
//!
//! The runner scans stdout for lines shaped like `::name::payload` and treats
//! them as instructions rather than log text.

use std::fmt;

/// A single workflow command understood by the runner's log processor.
#[derive(Debug, Clone, Copy)]
pub enum WorkflowCommand<'a> {
    /// Redact a value from all subsequent log output.
    AddMask(&'a str),
    /// Debug message, only shown when step debug logging is enabled.
    Debug(fmt::Arguments<'a>),
    /// Warning annotation.
    Warning(fmt::Arguments<'a>),
    /// Error annotation.
    Error(fmt::Arguments<'a>),
}

impl WorkflowCommand<'_> {
    /// Command name as it appears between the `::` delimiters.
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowCommand::AddMask(_) => "add-mask",
            WorkflowCommand::Debug(_) => "debug",
            WorkflowCommand::Warning(_) => "warning",
            WorkflowCommand::Error(_) => "error",
        }
    }

    /// Render the full newline-terminated line.
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for WorkflowCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "::{}::", self.name())?;
        match self {
            WorkflowCommand::AddMask(value) => f.write_str(value),
            WorkflowCommand::Debug(args)
            | WorkflowCommand::Warning(args)
            | WorkflowCommand::Error(args) => f.write_fmt(*args),
        }
    }
}

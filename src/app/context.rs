use crate::app::commands::{output, run_url, summary};
use crate::domain::AppError;
use crate::ports::Environment;

/// Workflow context holding the environment the runner exposes to a step.
pub struct WorkflowContext<E: Environment> {
    env: E,
}

impl<E: Environment> WorkflowContext<E> {
    /// Create a new workflow context.
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Get a reference to the environment.
    pub fn environment(&self) -> &E {
        &self.env
    }

    /// Append `name=value` to the `GITHUB_OUTPUT` file.
    pub fn set_output(&self, name: &str, value: &str) -> Result<(), AppError> {
        output::execute(self, name, value)
    }

    /// Append markdown to the `GITHUB_STEP_SUMMARY` file.
    pub fn set_summary(&self, markdown: &str) -> Result<(), AppError> {
        summary::execute(self, markdown)
    }

    /// URL of the current run page.
    pub fn run_url(&self) -> Result<String, AppError> {
        run_url::execute(self)
    }
}

pub mod error;
pub mod github_env;
pub mod run_url;
pub mod workflow_command;

pub use error::AppError;
pub use run_url::build_run_url;
pub use workflow_command::WorkflowCommand;

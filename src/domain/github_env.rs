//! Environment variable names exposed by the Actions runner.

/// Path of the file collecting step outputs.
pub const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";

/// Path of the file collecting the step summary markdown.
pub const GITHUB_STEP_SUMMARY: &str = "GITHUB_STEP_SUMMARY";

/// Base URL of the GitHub server, e.g. `https://github.com`.
pub const GITHUB_SERVER_URL: &str = "GITHUB_SERVER_URL";

/// Owner and repository name, e.g. `octocat/hello-world`.
pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";

/// Unique identifier of the current workflow run.
pub const GITHUB_RUN_ID: &str = "GITHUB_RUN_ID";

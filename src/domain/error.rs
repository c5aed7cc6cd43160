use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Library-wide error type for workflow command operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Writing to an output stream failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Required environment variable is missing or empty.
    #[error("{0}")]
    Configuration(String),

    /// Opening, writing to, or closing an append target failed.
    #[error("Failed to {action} {}: {source}", .path.display())]
    FileIo {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn file_io(action: &'static str, path: &Path, source: io::Error) -> Self {
        AppError::FileIo { action, path: path.to_path_buf(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::FileIo { source, .. } => source.kind(),
            AppError::Configuration(_) | AppError::ParseError { .. } => {
                io::ErrorKind::InvalidInput
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_displays_message() {
        let err = AppError::config_error("GITHUB_OUTPUT env variable not specified");
        assert_eq!(err.to_string(), "GITHUB_OUTPUT env variable not specified");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn file_io_error_names_step_and_path() {
        let err = AppError::file_io(
            "open",
            Path::new("/tmp/missing/output"),
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.to_string(), "Failed to open /tmp/missing/output: no such file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn parse_error_names_input() {
        let details = url::Url::parse("not a url").unwrap_err().to_string();
        let err = AppError::ParseError { what: "server url".into(), details };
        assert!(err.to_string().starts_with("Failed to parse server url: "));
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}

//! Run page URL construction.

use url::Url;

use crate::domain::AppError;

/// Build the URL of a run page from the server base URL and run coordinates.
///
/// The server URL's path is replaced by `{repository}/actions/runs/{run_id}`;
/// its scheme, host, query and fragment are kept. ASCII control characters
/// anywhere in the server URL are rejected rather than stripped.
pub fn build_run_url(
    server_url: &str,
    repository: &str,
    run_id: &str,
) -> Result<String, AppError> {
    if let Some(c) = server_url.chars().find(|c| c.is_ascii_control()) {
        return Err(AppError::ParseError {
            what: "server url".into(),
            details: format!("invalid control character {:?}", c),
        });
    }

    let mut url = Url::parse(server_url).map_err(|e| AppError::ParseError {
        what: "server url".into(),
        details: e.to_string(),
    })?;

    url.set_path(&join_path(&[repository, "actions", "runs", run_id]));

    Ok(url.into())
}

/// Join slash-separated segments, skipping empty ones, then clean the result.
///
/// Returns an empty string when every segment is empty.
pub fn join_path(segments: &[&str]) -> String {
    let joined =
        segments.iter().filter(|s| !s.is_empty()).copied().collect::<Vec<_>>().join("/");
    if joined.is_empty() {
        return joined;
    }
    clean_path(&joined)
}

/// Lexically normalize a slash-separated path.
///
/// Repeated slashes collapse, `.` elements are dropped and `..` consumes the
/// preceding element. A rooted path never climbs above `/`.
pub fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let body = parts.join("/");
    if rooted {
        format!("/{body}")
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}

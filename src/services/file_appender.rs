//! Append-only writes to runner-provided files.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::domain::AppError;

/// Append `content` to the file at `path`, creating it if absent.
///
/// One handle is opened, written once and closed per call. A write failure
/// takes precedence over a close failure; the close is attempted either way.
pub fn append_to_file(path: &Path, content: &str) -> Result<(), AppError> {
    let mut options = OpenOptions::new();
    options.append(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path).map_err(|e| AppError::file_io("open", path, e))?;

    log::debug!("Appending {} bytes to {}", content.len(), path.display());
    let written = file.write_all(content.as_bytes());
    let closed = close(file);

    settle(path, written, closed)
}

/// Combine the write and close outcomes, reporting the write error first.
fn settle(path: &Path, written: io::Result<()>, closed: io::Result<()>) -> Result<(), AppError> {
    written.map_err(|e| AppError::file_io("write to", path, e))?;
    closed.map_err(|e| AppError::file_io("close", path, e))
}

/// Close the handle and report the result of close(2).
#[cfg(unix)]
fn close(file: File) -> io::Result<()> {
    use std::os::fd::IntoRawFd;

    let fd = file.into_raw_fd();
    // SAFETY: `fd` was released by `file` above and is closed exactly once here.
    if unsafe { libc::close(fd) } == 0 { Ok(()) } else { Err(io::Error::last_os_error()) }
}

#[cfg(not(unix))]
fn close(file: File) -> io::Result<()> {
    drop(file);
    Ok(())
}

use std::io::{self, Write};

/// Writer that records every `write` call separately.
#[derive(Default)]
pub struct RecordingWriter {
    writes: Vec<Vec<u8>>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Each recorded write, decoded as UTF-8.
    pub fn writes(&self) -> Vec<String> {
        self.writes.iter().map(|bytes| String::from_utf8_lossy(bytes).into_owned()).collect()
    }
}

impl Write for RecordingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes.push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer whose every write fails with a fixed error kind.
pub struct FailingWriter {
    kind: io::ErrorKind,
    attempts: usize,
}

impl FailingWriter {
    pub fn new(kind: io::ErrorKind) -> Self {
        Self { kind, attempts: 0 }
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        self.attempts += 1;
        Err(io::Error::new(self.kind, "mock writer failure"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

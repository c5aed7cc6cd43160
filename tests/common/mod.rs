//! Shared testing utilities for ghactions integration tests.

use std::env;
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};

/// Restores an environment variable to its original value on drop.
#[allow(dead_code)]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

#[allow(dead_code)]
impl EnvVarGuard {
    pub fn set<K: Into<String>, V: AsRef<OsStr>>(key: K, value: V) -> Self {
        let key = key.into();
        let original = env::var_os(&key);
        // SAFETY: callers are #[serial], env var manipulation is isolated
        unsafe { env::set_var(&key, value) };
        Self { key, original }
    }

    pub fn remove<K: Into<String>>(key: K) -> Self {
        let key = key.into();
        let original = env::var_os(&key);
        // SAFETY: callers are #[serial], env var manipulation is isolated
        unsafe { env::remove_var(&key) };
        Self { key, original }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(original) = self.original.as_ref() {
            unsafe { env::set_var(&self.key, original) };
        } else {
            unsafe { env::remove_var(&self.key) };
        }
    }
}

/// Writer counting how many times `write` was called.
#[derive(Default)]
#[allow(dead_code)]
pub struct CountingWriter {
    pub buffer: Vec<u8>,
    pub calls: usize,
}

impl Write for CountingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls += 1;
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

//! Destinations for share text

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Somewhere share text can be sent
///
/// Returns whether the text arrived; failures are logged, never raised.
pub trait ShareSink {
    fn share(&mut self, text: &str) -> bool;
}

/// Writes share text to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ShareSink for StdoutSink {
    fn share(&mut self, text: &str) -> bool {
        let mut out = io::stdout().lock();
        match writeln!(out, "{text}").and_then(|()| out.flush()) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("could not write share text to stdout: {e}");
                false
            }
        }
    }
}

/// Writes share text to a file, replacing any previous content
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ShareSink for FileSink {
    fn share(&mut self, text: &str) -> bool {
        match fs::write(&self.path, format!("{text}\n")) {
            Ok(()) => {
                log::info!("share text written to {}", self.path.display());
                true
            }
            Err(e) => {
                log::warn!("could not write share text to {}: {e}", self.path.display());
                false
            }
        }
    }
}

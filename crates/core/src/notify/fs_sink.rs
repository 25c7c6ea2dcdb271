//! Filesystem-backed notification sink.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::html::render_digest;
use super::sink::{NotificationSink, SinkError};
use crate::ticket::{Handler, Ticket};

/// Writes each handler's digest as an HTML file under a fixed directory.
///
/// The file is keyed by handler id, so a later digest for the same handler
/// overwrites the previous one.
pub struct HtmlFileSink {
    output_dir: PathBuf,
}

impl HtmlFileSink {
    /// Create a sink writing into `output_dir` (created on first publish).
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Path of the digest file for one handler.
    pub fn digest_path(&self, handler_id: &str) -> PathBuf {
        self.output_dir.join(format!("{}.html", handler_id))
    }

    /// The directory digests are written into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[async_trait]
impl NotificationSink for HtmlFileSink {
    async fn publish(&self, handler: &Handler, tickets: &[Ticket]) -> Result<(), SinkError> {
        std::fs::create_dir_all(&self.output_dir)?;
        let html = render_digest(handler, tickets);
        std::fs::write(self.digest_path(&handler.id), html)?;
        Ok(())
    }
}

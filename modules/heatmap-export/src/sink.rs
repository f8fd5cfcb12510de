//! Persistence sinks.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use async_trait::async_trait;

/// Writes the rendered output to its destination in a single attempt.
///
/// No retry and no atomicity beyond what the underlying write provides; a
/// failed write may leave the destination absent or partially written.
#[async_trait]
pub trait PersistenceSink: Send + Sync {
    async fn write(&self, bytes: &[u8], destination: &Path) -> Result<()>;
}

// ---------------------------------------------------------------------------
// FsSink (production — local filesystem)
// ---------------------------------------------------------------------------

/// Creates or truncates the destination and writes the full contents.
pub struct FsSink;

#[async_trait]
impl PersistenceSink for FsSink {
    async fn write(&self, bytes: &[u8], destination: &Path) -> Result<()> {
        tokio::fs::write(destination, bytes)
            .await
            .with_context(|| format!("Failed to write {} bytes", bytes.len()))
    }
}

// ---------------------------------------------------------------------------
// MemorySink (tests — no filesystem required)
// ---------------------------------------------------------------------------

/// In-memory sink for testing. Records every write attempt; a failing sink
/// records the attempt and then returns an error.
pub struct MemorySink {
    writes: Mutex<Vec<(PathBuf, Vec<u8>)>>,
    failure: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    /// Every write attempt, in order (for test assertions).
    pub fn writes(&self) -> Vec<(PathBuf, Vec<u8>)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.writes.lock().unwrap().len()
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersistenceSink for MemorySink {
    async fn write(&self, bytes: &[u8], destination: &Path) -> Result<()> {
        self.writes
            .lock()
            .unwrap()
            .push((destination.to_path_buf(), bytes.to_vec()));
        match &self.failure {
            Some(message) => anyhow::bail!("{message}"),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Arc<S> blanket — lets tests share the sink for assertions
// ---------------------------------------------------------------------------

#[async_trait]
impl<S: PersistenceSink + ?Sized> PersistenceSink for Arc<S> {
    async fn write(&self, bytes: &[u8], destination: &Path) -> Result<()> {
        (**self).write(bytes, destination).await
    }
}

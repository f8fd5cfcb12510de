//! Trajectory sources.
//!
//! Decoding the binary demo format is the job of an external decoder; this
//! module only defines the seam the pipeline awaits on and the adapters the
//! binary and tests plug into it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use heatmap_common::TrajectorySet;
use tracing::debug;

/// Resolves a demo file identifier to every player's trajectory.
///
/// Completes exactly once: either a fully materialized set or an error.
#[async_trait]
pub trait TrajectorySource: Send + Sync {
    async fn resolve(&self, file_id: &str) -> Result<TrajectorySet>;
}

// ---------------------------------------------------------------------------
// DumpSource (production — decoder output on disk)
// ---------------------------------------------------------------------------

/// Reads the player/point document written by the demo decoder, looked up
/// relative to a working directory.
pub struct DumpSource {
    root: PathBuf,
}

impl DumpSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn locate(&self, file_id: &str) -> PathBuf {
        self.root.join(file_id)
    }
}

#[async_trait]
impl TrajectorySource for DumpSource {
    async fn resolve(&self, file_id: &str) -> Result<TrajectorySet> {
        let path = self.locate(file_id);
        debug!(path = %path.display(), "Reading demo");

        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read demo '{}'", path.display()))?;

        let set: TrajectorySet = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to decode demo '{}'", path.display()))?;

        Ok(set)
    }
}

// ---------------------------------------------------------------------------
// StaticSource (tests — no decoder required)
// ---------------------------------------------------------------------------

/// Resolves every identifier to the same set, or to the same failure.
pub struct StaticSource {
    outcome: std::result::Result<TrajectorySet, String>,
}

impl StaticSource {
    pub fn new(set: TrajectorySet) -> Self {
        Self { outcome: Ok(set) }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

#[async_trait]
impl TrajectorySource for StaticSource {
    async fn resolve(&self, _file_id: &str) -> Result<TrajectorySet> {
        match &self.outcome {
            Ok(set) => Ok(set.clone()),
            Err(message) => anyhow::bail!("{message}"),
        }
    }
}

#[async_trait]
impl<S: TrajectorySource + ?Sized> TrajectorySource for Arc<S> {
    async fn resolve(&self, file_id: &str) -> Result<TrajectorySet> {
        (**self).resolve(file_id).await
    }
}

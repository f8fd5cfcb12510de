//! The export pipeline.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::error::{ExportError, Stage};
use crate::report::Reporter;
use crate::serializer::serialize;
use crate::sink::PersistenceSink;
use crate::source::TrajectorySource;

/// Outcome of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub destination: PathBuf,
    pub players: usize,
    pub samples: usize,
    pub bytes_written: usize,
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} players, {} samples, {} bytes -> {}",
            self.players,
            self.samples,
            self.bytes_written,
            self.destination.display()
        )
    }
}

/// Resolve → serialize → write. Each stage runs only if the previous one
/// succeeded; nothing is retried and the first failure ends the run.
pub struct Exporter<S, W, R>
where
    S: TrajectorySource,
    W: PersistenceSink,
    R: Reporter,
{
    source: S,
    sink: W,
    reporter: R,
}

impl<S, W, R> Exporter<S, W, R>
where
    S: TrajectorySource,
    W: PersistenceSink,
    R: Reporter,
{
    pub fn new(source: S, sink: W, reporter: R) -> Self {
        Self {
            source,
            sink,
            reporter,
        }
    }

    pub async fn run(&self, file_id: &str, destination: &Path) -> Result<ExportSummary, ExportError> {
        let result = self.advance(file_id, destination).await;

        match &result {
            Ok(summary) => {
                info!(stage = %Stage::Done, "Export complete. {summary}");
                self.reporter.report(&format!(
                    "Player data written to '{}'!",
                    summary.destination.display()
                ));
            }
            Err(e) => error!(stage = %e.stage(), error = %e, "Export failed"),
        }

        result
    }

    async fn advance(&self, file_id: &str, destination: &Path) -> Result<ExportSummary, ExportError> {
        debug!(stage = %Stage::Resolving, file_id, "Resolving trajectories");
        let set = self
            .source
            .resolve(file_id)
            .await
            .map_err(|source| ExportError::SourceResolution {
                file_id: file_id.to_string(),
                source,
            })?;
        info!(
            stage = %Stage::Resolved,
            players = set.len(),
            samples = set.sample_count(),
            "Resolved trajectories"
        );

        debug!(stage = %Stage::Serializing, "Serializing rows");
        let output = serialize(&set)?;
        info!(stage = %Stage::Serialized, bytes = output.len(), "Serialized rows");

        debug!(stage = %Stage::Writing, destination = %destination.display(), "Writing output");
        self.sink
            .write(output.as_bytes(), destination)
            .await
            .map_err(|source| ExportError::Persistence {
                destination: destination.to_path_buf(),
                source,
            })?;

        Ok(ExportSummary {
            destination: destination.to_path_buf(),
            players: set.len(),
            samples: set.sample_count(),
            bytes_written: output.len(),
        })
    }
}

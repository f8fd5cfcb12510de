//! Demo trajectory export.
//!
//! Resolves a demo into per-player trajectories, renders them as one
//! comma-delimited row per player and writes the result to disk:
//! source → serializer → sink, each stage gated on the one before.
//!
//! I/O lives behind `TrajectorySource`, `PersistenceSink` and `Reporter` so
//! the serializer stays pure and the pipeline runs without touching storage.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod serializer;
pub mod sink;
pub mod source;

pub use config::{ExportArgs, ExportConfig};
pub use error::{ExportError, Stage};
pub use pipeline::{ExportSummary, Exporter};
pub use report::{MemoryReporter, Reporter, StdoutReporter};
pub use serializer::{row_count, serialize};
pub use sink::{FsSink, MemorySink, PersistenceSink};
pub use source::{DumpSource, StaticSource, TrajectorySource};

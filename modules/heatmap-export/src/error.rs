use std::fmt;
use std::path::PathBuf;

use heatmap_common::SerializationError;
use thiserror::Error;

/// Pipeline states. Failures map onto the terminal states via
/// [`ExportError::stage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Resolving,
    ParseFailed,
    Resolved,
    Serializing,
    SerializeFailed,
    Serialized,
    Writing,
    WriteFailed,
    Done,
}

impl Stage {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::ParseFailed | Self::SerializeFailed | Self::WriteFailed | Self::Done
        )
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolving => write!(f, "resolving"),
            Self::ParseFailed => write!(f, "parse_failed"),
            Self::Resolved => write!(f, "resolved"),
            Self::Serializing => write!(f, "serializing"),
            Self::SerializeFailed => write!(f, "serialize_failed"),
            Self::Serialized => write!(f, "serialized"),
            Self::Writing => write!(f, "writing"),
            Self::WriteFailed => write!(f, "write_failed"),
            Self::Done => write!(f, "done"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to resolve trajectories from '{file_id}'")]
    SourceResolution {
        file_id: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    #[error("Failed to write '{}'", .destination.display())]
    Persistence {
        destination: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl ExportError {
    /// Terminal state the pipeline stopped in.
    pub fn stage(&self) -> Stage {
        match self {
            Self::SourceResolution { .. } => Stage::ParseFailed,
            Self::Serialization(_) => Stage::SerializeFailed,
            Self::Persistence { .. } => Stage::WriteFailed,
        }
    }
}

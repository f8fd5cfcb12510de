use std::path::PathBuf;

use clap::Parser;
use tracing::info;

/// Command-line surface of the `heatmap-export` binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "heatmap-export")]
#[command(about = "Export per-player demo trajectories as comma-delimited rows")]
#[command(version)]
pub struct ExportArgs {
    /// Demo file identifier, resolved against --dir
    #[arg(long, default_value = "jump.dem")]
    pub demo: String,

    /// Output file; relative paths are resolved against --dir
    #[arg(short, long, default_value = "jump.csv")]
    pub output: PathBuf,

    /// Working directory for the demo lookup and relative output
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

/// Effective configuration for one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub demo: String,
    pub destination: PathBuf,
    pub working_dir: PathBuf,
}

impl ExportConfig {
    pub fn from_args(args: ExportArgs) -> Self {
        let destination = if args.output.is_absolute() {
            args.output
        } else {
            args.dir.join(args.output)
        };

        Self {
            demo: args.demo,
            destination,
            working_dir: args.dir,
        }
    }

    pub fn log_summary(&self) {
        info!(
            demo = self.demo.as_str(),
            working_dir = %self.working_dir.display(),
            destination = %self.destination.display(),
            "Export config"
        );
    }
}

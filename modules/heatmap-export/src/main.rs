use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use heatmap_export::{DumpSource, ExportArgs, ExportConfig, Exporter, FsSink, StdoutReporter};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the confirmation.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("heatmap=info".parse()?))
        .init();

    let config = ExportConfig::from_args(ExportArgs::parse());
    config.log_summary();

    info!("Heatmap export starting...");

    let exporter = Exporter::new(DumpSource::new(&config.working_dir), FsSink, StdoutReporter);
    exporter.run(&config.demo, &config.destination).await?;

    Ok(())
}

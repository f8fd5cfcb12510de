//! End-to-end export against a real directory.

use std::fs;

use heatmap_export::{DumpSource, ExportError, Exporter, FsSink, MemoryReporter, Stage, TrajectorySource};
use serde_json::json;
use tempfile::TempDir;

fn write_dump(dir: &TempDir, name: &str, doc: serde_json::Value) {
    fs::write(dir.path().join(name), serde_json::to_vec(&doc).unwrap()).unwrap();
}

#[tokio::test]
async fn exports_decoded_demo_to_csv() {
    let dir = TempDir::new().unwrap();
    write_dump(
        &dir,
        "jump.dem",
        json!({
            "players": [
                { "points": [
                    { "tick": 0, "x": 1.0, "y": 2.0, "z": 3.0 },
                    { "tick": 1, "x": 1.5, "y": 2.5, "z": 3.5 }
                ] },
                { "points": [ { "tick": 5, "x": 9.0, "y": 9.0, "z": 9.0 } ] }
            ]
        }),
    );
    let destination = dir.path().join("jump.csv");
    let exporter = Exporter::new(DumpSource::new(dir.path()), FsSink, MemoryReporter::new());

    let summary = exporter.run("jump.dem", &destination).await.unwrap();

    assert_eq!(
        fs::read_to_string(&destination).unwrap(),
        "0,1,2,3,1,1.5,2.5,3.5\n5,9,9,9"
    );
    assert_eq!(summary.players, 2);
}

#[tokio::test]
async fn overwrites_previous_output_in_full() {
    let dir = TempDir::new().unwrap();
    write_dump(&dir, "jump.dem", json!({ "players": [ { "points": [ { "tick": 2, "x": 0.0, "y": 0.0, "z": 0.0 } ] } ] }));
    let destination = dir.path().join("jump.csv");
    fs::write(&destination, "stale contents that are much longer than the new output").unwrap();

    Exporter::new(DumpSource::new(dir.path()), FsSink, MemoryReporter::new())
        .run("jump.dem", &destination)
        .await
        .unwrap();

    assert_eq!(fs::read_to_string(&destination).unwrap(), "2,0,0,0");
}

#[tokio::test]
async fn missing_demo_is_a_source_failure() {
    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("jump.csv");
    let exporter = Exporter::new(DumpSource::new(dir.path()), FsSink, MemoryReporter::new());

    let err = exporter.run("missing.dem", &destination).await.unwrap_err();

    assert_eq!(err.stage(), Stage::ParseFailed);
    assert!(!destination.exists(), "no output on source failure");
}

#[tokio::test]
async fn malformed_demo_is_a_source_failure() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("jump.dem"), b"HL2DEMO\0not json").unwrap();

    let err = DumpSource::new(dir.path()).resolve("jump.dem").await.unwrap_err();

    assert!(format!("{err:#}").contains("Failed to decode demo"));
}

#[tokio::test]
async fn unwritable_destination_is_a_persistence_failure() {
    let dir = TempDir::new().unwrap();
    write_dump(&dir, "jump.dem", json!({ "players": [] }));
    let destination = dir.path().join("no-such-dir").join("jump.csv");
    let reporter = std::sync::Arc::new(MemoryReporter::new());
    let exporter = Exporter::new(DumpSource::new(dir.path()), FsSink, reporter.clone());

    let err = exporter.run("jump.dem", &destination).await.unwrap_err();

    assert!(matches!(err, ExportError::Persistence { .. }));
    assert!(reporter.messages().is_empty());
}

//! The data model must accept the player/point document produced by the
//! external demo decoder.

use heatmap_common::{PlayerTrajectory, Sample, TrajectorySet};
use serde_json::json;

#[test]
fn decodes_players_and_points() {
    let doc = json!({
        "players": [
            { "points": [ { "tick": 0, "x": 1.0, "y": 2.0, "z": 3.0 } ] },
            { "points": [] }
        ]
    });

    let set: TrajectorySet = serde_json::from_value(doc).unwrap();

    assert_eq!(
        set,
        TrajectorySet::from(vec![
            PlayerTrajectory::from(vec![Sample::new(0, 1.0, 2.0, 3.0)]),
            PlayerTrajectory::default(),
        ])
    );
}

#[test]
fn missing_collections_default_to_empty() {
    let set: TrajectorySet = serde_json::from_value(json!({})).unwrap();
    assert!(set.is_empty());

    let set: TrajectorySet = serde_json::from_value(json!({ "players": [ {} ] })).unwrap();
    assert_eq!(set.len(), 1);
    assert!(set.players[0].is_empty());
}

#[test]
fn negative_tick_is_rejected() {
    let doc = json!({
        "players": [ { "points": [ { "tick": -1, "x": 0.0, "y": 0.0, "z": 0.0 } ] } ]
    });
    assert!(serde_json::from_value::<TrajectorySet>(doc).is_err());
}

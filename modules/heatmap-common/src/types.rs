use serde::{Deserialize, Serialize};
use std::fmt;

/// One recorded position of a player at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub tick: u32,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Sample {
    pub fn new(tick: u32, x: f64, y: f64, z: f64) -> Self {
        Self { tick, x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.first_non_finite().is_none()
    }

    /// First coordinate (in x, y, z order) that is NaN or infinite.
    pub fn first_non_finite(&self) -> Option<(Axis, f64)> {
        [(Axis::X, self.x), (Axis::Y, self.y), (Axis::Z, self.z)]
            .into_iter()
            .find(|(_, value)| !value.is_finite())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
        }
    }
}

/// Chronologically ordered samples for a single player.
///
/// Deserializes from the decoder's `{"points": [...]}` shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerTrajectory {
    #[serde(rename = "points", default)]
    pub samples: Vec<Sample>,
}

impl PlayerTrajectory {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl From<Vec<Sample>> for PlayerTrajectory {
    fn from(samples: Vec<Sample>) -> Self {
        Self { samples }
    }
}

/// Every player's trajectory from one demo, in the order the decoder
/// enumerated them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySet {
    #[serde(default)]
    pub players: Vec<PlayerTrajectory>,
}

impl TrajectorySet {
    pub fn new(players: Vec<PlayerTrajectory>) -> Self {
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Total samples across all players.
    pub fn sample_count(&self) -> usize {
        self.players.iter().map(PlayerTrajectory::len).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlayerTrajectory> {
        self.players.iter()
    }
}

impl From<Vec<PlayerTrajectory>> for TrajectorySet {
    fn from(players: Vec<PlayerTrajectory>) -> Self {
        Self { players }
    }
}

impl<'a> IntoIterator for &'a TrajectorySet {
    type Item = &'a PlayerTrajectory;
    type IntoIter = std::slice::Iter<'a, PlayerTrajectory>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

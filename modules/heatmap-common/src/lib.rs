pub mod error;
pub mod types;

pub use error::SerializationError;
pub use types::{Axis, PlayerTrajectory, Sample, TrajectorySet};

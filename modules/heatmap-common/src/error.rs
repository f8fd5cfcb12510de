use thiserror::Error;

use crate::types::Axis;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SerializationError {
    #[error("Non-finite {axis} coordinate ({value}) at player {player}, sample {sample} (tick {tick})")]
    NonFinite {
        player: usize,
        sample: usize,
        tick: u32,
        axis: Axis,
        value: f64,
    },
}

//! Row serializer: `TrajectorySet` → delimited text.
//!
//! One line per player, one `tick,x,y,z` tuple per sample. No header, no
//! quoting, no trailing `,` on a line and no `\n` after the last line.
//! A player without samples keeps its (empty) line while a later player
//! still has samples; trailing players without samples emit no line, so the
//! document never ends with `\n`.

use std::fmt::Write;

use heatmap_common::{PlayerTrajectory, Sample, SerializationError, TrajectorySet};

pub const FIELD_DELIMITER: char = ',';
pub const LINE_TERMINATOR: char = '\n';

// Rough width of a rendered `tick,x,y,z,` tuple.
const TUPLE_WIDTH_HINT: usize = 40;

/// Render every player's trajectory. Fails on the first non-finite
/// coordinate without producing partial output.
pub fn serialize(set: &TrajectorySet) -> Result<String, SerializationError> {
    let mut out = String::with_capacity(set.sample_count() * TUPLE_WIDTH_HINT);

    for (player, trajectory) in set.iter().take(row_count(set)).enumerate() {
        if player > 0 {
            out.push(LINE_TERMINATOR);
        }
        write_row(&mut out, player, trajectory)?;
    }

    Ok(out)
}

/// Number of lines the set renders to: every player up to and including the
/// last one with samples.
pub fn row_count(set: &TrajectorySet) -> usize {
    set.iter()
        .rposition(|trajectory| !trajectory.is_empty())
        .map_or(0, |last| last + 1)
}

fn write_row(
    out: &mut String,
    player: usize,
    trajectory: &PlayerTrajectory,
) -> Result<(), SerializationError> {
    for (index, sample) in trajectory.samples.iter().enumerate() {
        if let Some((axis, value)) = sample.first_non_finite() {
            return Err(SerializationError::NonFinite {
                player,
                sample: index,
                tick: sample.tick,
                axis,
                value,
            });
        }
        if index > 0 {
            out.push(FIELD_DELIMITER);
        }
        write_tuple(out, sample);
    }
    Ok(())
}

// f64 Display is the shortest text that parses back to the same value
// and never uses exponent notation.
fn write_tuple(out: &mut String, sample: &Sample) {
    let d = FIELD_DELIMITER;
    // Writing into a String cannot fail.
    let _ = write!(out, "{}{d}{}{d}{}{d}{}", sample.tick, sample.x, sample.y, sample.z);
}

use crate::error::OfResult;
use crate::trajectory::TrajectorySample;
use std::io::Write;

/// Writes the trajectory sample table as CSV to an arbitrary sink.
///
/// Visualization collaborators consume the flat `{time, state, impulse}`
/// columns; memory and PRNG state ride along for debugging. The core never
/// opens files itself; callers supply the writer.
pub fn write_trajectory_csv<W: Write>(writer: W, samples: &[TrajectorySample]) -> OfResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for sample in samples {
        wtr.serialize(sample)?;
    }
    wtr.flush()?;
    Ok(())
}

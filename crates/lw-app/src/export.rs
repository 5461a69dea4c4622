//! CSV export of recorded samples.

use std::io::Write;

use crate::error::AppResult;
use crate::run_service::WalkRecord;

pub const CSV_HEADER: &str =
    "tick,time_s,step_index,stepped,x,y,vx,vy,pivot_x,pivot_y,support_x,support_y";

pub fn write_csv<W: Write>(record: &WalkRecord, mut out: W) -> AppResult<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for s in &record.samples {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            s.tick,
            s.time_s,
            s.step_index,
            u8::from(s.stepped),
            s.state.position.x,
            s.state.position.y,
            s.state.velocity.x,
            s.state.velocity.y,
            s.pivot_target.x,
            s.pivot_target.y,
            s.support_position.x,
            s.support_position.y,
        )?;
    }
    out.flush()?;
    Ok(())
}

use crate::core::error::EngineError;

use super::{Engine, TickStats};

pub(super) fn process_chunk_row(
    engine: &mut Engine,
    cy: u32,
    go_right: bool,
    stats: &mut TickStats,
) -> Result<(), EngineError> {
    let (chunks_x, _) = engine.chunks.dimensions();
    if go_right {
        for cx in 0..chunks_x {
            engine.process_chunk(cx, cy, go_right, stats)?;
        }
    } else {
        for cx in (0..chunks_x).rev() {
            engine.process_chunk(cx, cy, go_right, stats)?;
        }
    }
    Ok(())
}

pub(super) fn process_chunk(
    engine: &mut Engine,
    cx: u32,
    cy: u32,
    go_right: bool,
    stats: &mut TickStats,
) -> Result<(), EngineError> {
    // Checked at visit time, not from a snapshot: a chunk woken by a cell
    // scanned earlier this tick is scanned too.
    if engine.config.chunk_gating && !engine.chunks.is_active(cx, cy) {
        return Ok(());
    }
    stats.chunks_scanned += 1;

    let (start_x, start_y, end_x, end_y) = engine.chunks.chunk_bounds(cx, cy);

    // Rows bottom to top, columns in the tick's direction
    for y in (start_y..end_y).rev() {
        if go_right {
            for x in start_x..end_x {
                engine.update_cell(x, y, stats)?;
            }
        } else {
            for x in (start_x..end_x).rev() {
                engine.update_cell(x, y, stats)?;
            }
        }
    }
    Ok(())
}

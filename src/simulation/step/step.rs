use crate::core::error::EngineError;

use super::{Engine, PerfTimer, TickStats};

pub(super) fn step(engine: &mut Engine) -> Result<TickStats, EngineError> {
    let timer = PerfTimer::start_if(engine.config.perf_metrics);
    let mut stats = TickStats::begin(engine.frame);

    // BEGIN: tick-scoped state starts clean
    engine.scratch.begin_tick();
    engine.chunks.begin_tick();

    // Alternate horizontal direction every tick to avoid a left/right bias
    let go_right = (engine.frame & 1) == 0;
    let (_, chunks_y) = engine.chunks.dimensions();

    // Chunk rows from bottom to top so falling cells are handled before
    // the cells above them
    for cy in (0..chunks_y).rev() {
        engine.process_chunk_row(cy, go_right, &mut stats)?;
    }

    // END
    engine.chunks.decay();

    stats.active_chunks = engine.chunks.active_chunk_count() as u32;
    stats.chunks_woken = engine.chunks.woken_this_tick();
    stats.chunks_slept = engine.chunks.slept_this_tick();
    stats.non_empty_cells = engine.grid.non_empty_count() as u32;
    if let Some(timer) = timer {
        stats.step_ms = timer.elapsed_ms();
    }

    engine.frame += 1;
    engine.last_stats = stats;
    Ok(stats)
}

use tracing::{error, warn};

use crate::core::error::EngineError;
use crate::domain::materials::{MaterialRegistry, EMPTY};

use super::surface::{cell_seed, Surface};
use super::{Engine, TickStats};

/// DISPATCH for one cell.
///
/// A behavior error is contained to the cell: its writes and the bits it
/// raised are rolled back, the acting cell stays processed, and the scan
/// goes on. Chunk wakes and redraw marks it made are left in place.
pub(super) fn update_cell(
    engine: &mut Engine,
    x: u32,
    y: u32,
    stats: &mut TickStats,
) -> Result<(), EngineError> {
    stats.cells_visited += 1;

    let idx = engine.grid.index(x, y);
    let id = engine.grid.get_idx(idx);
    if id == EMPTY || engine.scratch.is_updated(idx) {
        return Ok(());
    }

    let Engine {
        registry,
        grid,
        chunks,
        scratch,
        environment,
        config,
        frame,
        ..
    } = engine;
    let registry: &MaterialRegistry = registry;
    let frame = *frame;

    let Some(descriptor) = registry.lookup(id) else {
        error!(id, x, y, frame, "cell holds an unregistered material; aborting tick");
        return Err(EngineError::UnknownMaterial { id, x, y });
    };
    // Inert materials have nothing to run.
    let Some(update) = descriptor.update else {
        return Ok(());
    };

    scratch.mark_processed(idx);
    scratch.begin_dispatch();

    let mut surface = Surface::new(
        grid,
        chunks,
        scratch,
        registry,
        environment,
        x as i32,
        y as i32,
        frame,
        cell_seed(config.seed, frame, idx),
    );
    let result = update(x as i32, y as i32, &mut surface);
    let moved = surface.moved();

    stats.behaviors_run += 1;
    match result {
        Ok(()) => {
            if moved {
                stats.cells_moved += 1;
            }
        }
        Err(err) => {
            let reverted = scratch.rollback(grid);
            stats.behavior_failures += 1;
            stats.writes_rolled_back += reverted as u32;
            warn!(
                material = %descriptor.name,
                id,
                x,
                y,
                frame,
                reverted,
                error = %err,
                "material update failed; cell left unchanged"
            );
        }
    }
    Ok(())
}

//! Engine - owns the cell grid, the chunk activity tracker and the tick
//! scheduler.
//!
//! The engine only orchestrates: material behavior lives behind the
//! registry's function pointers and sees the world through `Surface`.
//! - Cell data in spatial/grid
//! - Sleep/wake tracking in spatial/chunks
//! - Per-tick scan order in step/
//! - Host-facing edits in commands/

use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::error::EngineError;
use crate::domain::environment::Environment;
use crate::domain::materials::{MaterialId, MaterialRegistry};
use crate::spatial::chunks::ChunkGrid;
use crate::spatial::grid::{CellSnapshot, Grid};

pub mod config;
pub mod scratch;
pub mod surface;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "step/chunk_processing.rs"]
mod chunk_processing;
#[path = "step/dispatch.rs"]
mod dispatch;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use config::EngineConfig;
pub use facade::World;
pub use perf_stats::TickStats;

use perf_timer::PerfTimer;
use scratch::TickScratch;

/// The simulation engine
pub struct Engine {
    registry: Arc<MaterialRegistry>,
    grid: Grid,
    chunks: ChunkGrid,
    scratch: TickScratch,
    environment: Environment,
    config: EngineConfig,

    // State
    frame: u64,

    last_stats: TickStats,
}

impl Engine {
    /// Build an engine around a finished registry. The registry is frozen
    /// from here on.
    pub fn new(config: EngineConfig, registry: MaterialRegistry) -> Result<Self, EngineError> {
        init::create_engine(config, Arc::new(registry))
    }

    /// Same as `new`, for a registry shared with other engines.
    pub fn with_shared_registry(
        config: EngineConfig,
        registry: Arc<MaterialRegistry>,
    ) -> Result<Self, EngineError> {
        init::create_engine(config, registry)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    /// Ticks completed so far.
    pub fn frame(&self) -> u64 { self.frame }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn registry(&self) -> &MaterialRegistry { &self.registry }

    pub fn shared_registry(&self) -> Arc<MaterialRegistry> { Arc::clone(&self.registry) }

    pub fn grid(&self) -> &Grid { &self.grid }

    /// Direct cell access for hosts loading state. Writes made here do not
    /// wake chunks; follow them with `wake_area`.
    pub fn grid_mut(&mut self) -> &mut Grid { &mut self.grid }

    pub fn chunks(&self) -> &ChunkGrid { &self.chunks }

    pub fn environment(&self) -> Environment { self.environment }

    /// Cell value, or `None` outside the grid.
    pub fn cell(&self, x: i32, y: i32) -> Option<CellSnapshot> {
        self.grid
            .in_bounds(x, y)
            .then(|| self.grid.snapshot(self.grid.cell_index(x, y)))
    }

    /// Material ids in row-major order, for renderers.
    pub fn materials(&self) -> &[MaterialId] { self.grid.materials() }

    pub fn temperatures(&self) -> &[f32] { self.grid.temperatures() }

    // === Ticking ===

    /// Advance the simulation by one tick.
    ///
    /// Fails only on a configuration error (a cell holding an unregistered
    /// material). The tick is then abandoned where it stood: no decay runs
    /// and the frame counter does not advance.
    pub fn step(&mut self) -> Result<TickStats, EngineError> {
        step::step(self)
    }

    /// Run `n` ticks, stopping at the first error. Returns the stats of the
    /// last tick run.
    pub fn step_n(&mut self, n: u32) -> Result<TickStats, EngineError> {
        let mut stats = self.last_stats;
        for _ in 0..n {
            stats = self.step()?;
        }
        Ok(stats)
    }

    /// Full-grid check that every cell holds a registered material.
    /// Reports the first offending cell in row-major order.
    pub fn validate(&self) -> Result<(), EngineError> {
        let registry = &*self.registry;
        let materials = self.grid.materials();

        #[cfg(feature = "parallel")]
        let bad = materials.par_iter().position_first(|&id| !registry.contains(id));
        #[cfg(not(feature = "parallel"))]
        let bad = materials.iter().position(|&id| !registry.contains(id));

        match bad {
            Some(idx) => {
                let (x, y) = self.grid.coords(idx);
                Err(EngineError::UnknownMaterial { id: materials[idx], x, y })
            }
            None => Ok(()),
        }
    }

    // === Settings ===

    pub fn set_environment(&mut self, environment: Environment) {
        settings::set_environment(self, environment);
    }

    /// Disable to scan every chunk every tick (reference mode for debugging
    /// sleep behavior).
    pub fn set_chunk_gating(&mut self, enabled: bool) {
        settings::set_chunk_gating(self, enabled);
    }

    /// Enable or disable per-step timing (adds timer overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Stats of the most recent tick (zeros before the first).
    pub fn last_stats(&self) -> TickStats {
        settings::last_stats(self)
    }

    // === Host edits ===

    /// Put `id` at `(x, y)`, seeding its default temperature if it has one.
    pub fn place(&mut self, x: i32, y: i32, id: MaterialId) -> Result<(), EngineError> {
        commands::place(self, x, y, id)
    }

    /// Empty `(x, y)` and reset it to ambient temperature.
    pub fn erase(&mut self, x: i32, y: i32) -> Result<(), EngineError> {
        commands::erase(self, x, y)
    }

    /// Fill the empty cells of a disc with `id`. Returns how many were filled.
    pub fn paint_circle(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        id: MaterialId,
    ) -> Result<usize, EngineError> {
        commands::paint_circle(self, cx, cy, radius, id)
    }

    /// Empty every cell of a disc. Returns how many were occupied.
    pub fn erase_circle(&mut self, cx: i32, cy: i32, radius: i32) -> usize {
        commands::erase_circle(self, cx, cy, radius)
    }

    pub fn set_temperature(&mut self, x: i32, y: i32, temp: f32) -> Result<(), EngineError> {
        commands::set_temperature(self, x, y, temp)
    }

    /// Wake the chunk holding `(x, y)` (and its neighbour across an edge).
    pub fn wake_area(&mut self, x: i32, y: i32) -> Result<(), EngineError> {
        commands::wake_area(self, x, y)
    }

    /// Empty the whole grid and wake everything.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === Rendering support ===

    /// Drain the chunks whose cells changed since the last call.
    pub fn take_redraw_chunks(&mut self, out: &mut Vec<(u32, u32)>) {
        self.chunks.take_redraw_chunks(out);
    }

    pub fn active_chunk_count(&self) -> usize {
        self.chunks.active_chunk_count()
    }

    pub fn total_chunks(&self) -> usize {
        self.chunks.total_chunks()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

// Private scheduling methods
impl Engine {
    /// Scan one row of chunks
    fn process_chunk_row(
        &mut self,
        cy: u32,
        go_right: bool,
        stats: &mut TickStats,
    ) -> Result<(), EngineError> {
        chunk_processing::process_chunk_row(self, cy, go_right, stats)
    }

    /// Scan one chunk, if it is active (or gating is off)
    fn process_chunk(
        &mut self,
        cx: u32,
        cy: u32,
        go_right: bool,
        stats: &mut TickStats,
    ) -> Result<(), EngineError> {
        chunk_processing::process_chunk(self, cx, cy, go_right, stats)
    }

    /// Run the behavior of the cell at `(x, y)` unless it already ran this tick
    fn update_cell(&mut self, x: u32, y: u32, stats: &mut TickStats) -> Result<(), EngineError> {
        dispatch::update_cell(self, x, y, stats)
    }
}

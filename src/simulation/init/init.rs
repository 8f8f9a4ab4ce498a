use std::sync::Arc;

use tracing::{debug, error};

use crate::core::error::EngineError;
use crate::domain::environment::Environment;
use crate::domain::materials::MaterialRegistry;
use crate::spatial::chunks::ChunkGrid;
use crate::spatial::grid::Grid;

use super::config::EngineConfig;
use super::perf_stats::TickStats;
use super::scratch::TickScratch;
use super::Engine;

pub(super) fn create_engine(
    config: EngineConfig,
    registry: Arc<MaterialRegistry>,
) -> Result<Engine, EngineError> {
    if let Err(err) = config.validate() {
        error!(error = %err, "rejecting engine configuration");
        return Err(err.into());
    }

    let grid = Grid::new(config.width, config.height, config.ambient_temperature);
    let chunks = ChunkGrid::new(config.width, config.height, config.chunk_size, config.wake_ttl);
    let scratch = TickScratch::new(grid.size());

    debug!(
        width = config.width,
        height = config.height,
        chunk_size = config.chunk_size,
        chunks = chunks.total_chunks(),
        materials = registry.len(),
        "engine created"
    );

    Ok(Engine {
        registry,
        grid,
        chunks,
        scratch,
        environment: Environment::default(),
        config,
        frame: 0,
        last_stats: TickStats::default(),
    })
}

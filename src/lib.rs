//! Powdergrid Engine - chunked grid simulation core for falling-material
//! sandboxes, native or in WASM
//!
//! Architecture:
//! - core/        - Error types
//! - spatial/     - Cell grid (SoA) and chunk sleep/wake tracking
//! - domain/      - Material registry and environment
//! - systems/     - Reference material behaviors
//! - simulation/  - Engine, tick scheduler, mutation surface, JS facade

pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Powdergrid engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::error::{BehaviorError, BehaviorResult, ConfigError, EngineError, RegistryError};
pub use crate::domain::environment::Environment;
pub use crate::domain::materials::{MaterialDescriptor, MaterialId, MaterialRegistry, UpdateFn, EMPTY, EMPTY_DENSITY};
pub use crate::simulation::config::EngineConfig;
pub use crate::simulation::surface::Surface;
pub use crate::simulation::{Engine, TickStats, World};
pub use crate::spatial::chunks::ChunkGrid;
pub use crate::spatial::grid::{CellSnapshot, Grid};

// Export reference material ids for JS
#[wasm_bindgen]
pub fn mat_empty() -> MaterialId { EMPTY }
#[wasm_bindgen]
pub fn mat_wall() -> MaterialId { systems::behaviors::WALL }
#[wasm_bindgen]
pub fn mat_sand() -> MaterialId { systems::behaviors::SAND }
#[wasm_bindgen]
pub fn mat_water() -> MaterialId { systems::behaviors::WATER }
#[wasm_bindgen]
pub fn mat_steam() -> MaterialId { systems::behaviors::STEAM }
#[wasm_bindgen]
pub fn mat_heater() -> MaterialId { systems::behaviors::HEATER }
#[wasm_bindgen]
pub fn mat_battery() -> MaterialId { systems::behaviors::BATTERY }
#[wasm_bindgen]
pub fn mat_wire() -> MaterialId { systems::behaviors::WIRE }

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::domain::environment::Environment;
use crate::domain::materials::MaterialId;
use crate::systems::behaviors::reference_registry;

use super::config::EngineConfig;
use super::perf_stats::TickStats;
use super::Engine;

#[derive(Serialize)]
struct MaterialManifestEntry<'a> {
    id: MaterialId,
    name: &'a str,
    category: &'a str,
    description: &'a str,
    density: Option<f32>,
    inert: bool,
}

/// JS-facing world: an `Engine` loaded with the reference materials.
#[wasm_bindgen]
pub struct World {
    engine: Engine,
    redraw_buffer: Vec<(u32, u32)>,
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

impl World {
    fn from_config(config: EngineConfig) -> Result<World, JsValue> {
        let registry = reference_registry().map_err(to_js)?;
        let engine = Engine::new(config, registry).map_err(to_js)?;
        Ok(Self {
            engine,
            redraw_buffer: Vec::new(),
        })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions and default settings
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<World, JsValue> {
        Self::from_config(EngineConfig::new(width, height))
    }

    /// Create a world from an `EngineConfig` JSON document
    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(json: &str) -> Result<World, JsValue> {
        let config = EngineConfig::from_json(json).map_err(to_js)?;
        Self::from_config(config)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.engine.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.engine.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.engine.frame() }

    #[wasm_bindgen(getter)]
    pub fn non_empty_count(&self) -> u32 { self.engine.grid().non_empty_count() as u32 }

    /// Advance one tick
    pub fn step(&mut self) -> Result<TickStats, JsValue> {
        self.engine.step().map_err(to_js)
    }

    pub fn step_n(&mut self, n: u32) -> Result<TickStats, JsValue> {
        self.engine.step_n(n).map_err(to_js)
    }

    /// Place a material; false when out of bounds or unknown
    pub fn place(&mut self, x: i32, y: i32, id: MaterialId) -> bool {
        self.engine.place(x, y, id).is_ok()
    }

    pub fn erase(&mut self, x: i32, y: i32) -> bool {
        self.engine.erase(x, y).is_ok()
    }

    /// Brush: fill empty cells in a radius, returns cells filled
    pub fn paint(&mut self, cx: i32, cy: i32, radius: i32, id: MaterialId) -> u32 {
        self.engine.paint_circle(cx, cy, radius, id).map_or(0, |n| n as u32)
    }

    pub fn erase_circle(&mut self, cx: i32, cy: i32, radius: i32) -> u32 {
        self.engine.erase_circle(cx, cy, radius) as u32
    }

    pub fn clear(&mut self) {
        self.engine.clear();
    }

    pub fn wake_area(&mut self, x: i32, y: i32) -> bool {
        self.engine.wake_area(x, y).is_ok()
    }

    pub fn set_temperature(&mut self, x: i32, y: i32, temp: f32) -> bool {
        self.engine.set_temperature(x, y, temp).is_ok()
    }

    pub fn set_wind(&mut self, wind: f32, strength: f32) {
        self.engine.set_environment(Environment::with_wind(wind, strength));
    }

    pub fn set_chunk_gating(&mut self, enabled: bool) {
        self.engine.set_chunk_gating(enabled);
    }

    /// Enable or disable per-step timing (adds timer overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.engine.enable_perf_metrics(enabled);
    }

    pub fn last_stats(&self) -> TickStats {
        self.engine.last_stats()
    }

    pub fn last_stats_json(&self) -> String {
        self.engine.last_stats().to_json()
    }

    /// Id, name, category, description and density of every material
    pub fn materials_manifest_json(&self) -> String {
        let entries: Vec<MaterialManifestEntry<'_>> = self
            .engine
            .registry()
            .iter()
            .map(|d| MaterialManifestEntry {
                id: d.id,
                name: &d.name,
                category: &d.category,
                description: &d.description,
                // JSON has no infinity: immovable materials report null
                density: d.density.is_finite().then_some(d.density),
                inert: d.update.is_none(),
            })
            .collect();
        serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
    }

    /// Material id at a cell (0 outside the grid)
    pub fn material_at(&self, x: i32, y: i32) -> MaterialId {
        self.engine.cell(x, y).map_or(0, |c| c.material)
    }

    /// Temperature at a cell (NaN outside the grid)
    pub fn temperature_at(&self, x: i32, y: i32) -> f32 {
        self.engine.cell(x, y).map_or(f32::NAN, |c| c.temperature)
    }

    #[wasm_bindgen(getter)]
    pub fn active_chunks(&self) -> u32 { self.engine.active_chunk_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn total_chunks(&self) -> u32 { self.engine.total_chunks() as u32 }

    #[wasm_bindgen(getter)]
    pub fn chunks_x(&self) -> u32 { self.engine.chunks().dimensions().0 }

    #[wasm_bindgen(getter)]
    pub fn chunks_y(&self) -> u32 { self.engine.chunks().dimensions().1 }

    #[wasm_bindgen(getter)]
    pub fn chunk_size(&self) -> u32 { self.engine.chunks().chunk_size() }

    /// Chunks changed since the last call, flattened as `[cx0, cy0, cx1, cy1, ...]`
    pub fn take_redraw_chunks(&mut self) -> Vec<u32> {
        self.redraw_buffer.clear();
        self.engine.take_redraw_chunks(&mut self.redraw_buffer);
        self.redraw_buffer
            .iter()
            .flat_map(|&(cx, cy)| [cx, cy])
            .collect()
    }

    /// Get pointer to material ids (for JS rendering)
    pub fn materials_ptr(&self) -> *const MaterialId {
        self.engine.grid().materials_ptr()
    }

    pub fn materials_len(&self) -> usize {
        self.engine.grid().size()
    }

    /// Get pointer to temperature array (for JS thermal rendering)
    pub fn temperature_ptr(&self) -> *const f32 {
        self.engine.grid().temperature_ptr()
    }

    pub fn temperature_len(&self) -> usize {
        self.engine.grid().size()
    }
}

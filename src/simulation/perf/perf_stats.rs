use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Counters for one tick.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct TickStats {
    pub(crate) frame: u64,
    pub(crate) chunks_scanned: u32,
    pub(crate) active_chunks: u32,
    pub(crate) chunks_woken: u32,
    pub(crate) chunks_slept: u32,
    pub(crate) cells_visited: u32,
    pub(crate) behaviors_run: u32,
    pub(crate) cells_moved: u32,
    pub(crate) behavior_failures: u32,
    pub(crate) writes_rolled_back: u32,
    pub(crate) non_empty_cells: u32,
    pub(crate) step_ms: f64,
}

impl TickStats {
    pub(crate) fn begin(frame: u64) -> Self {
        Self {
            frame,
            ..Self::default()
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[wasm_bindgen]
impl TickStats {
    /// Tick number these counters belong to.
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    /// Chunks whose cells were scanned.
    #[wasm_bindgen(getter)]
    pub fn chunks_scanned(&self) -> u32 { self.chunks_scanned }
    /// Active chunks after the end-of-tick decay.
    #[wasm_bindgen(getter)]
    pub fn active_chunks(&self) -> u32 { self.active_chunks }
    #[wasm_bindgen(getter)]
    pub fn chunks_woken(&self) -> u32 { self.chunks_woken }
    #[wasm_bindgen(getter)]
    pub fn chunks_slept(&self) -> u32 { self.chunks_slept }
    #[wasm_bindgen(getter)]
    pub fn cells_visited(&self) -> u32 { self.cells_visited }
    /// Behavior invocations.
    #[wasm_bindgen(getter)]
    pub fn behaviors_run(&self) -> u32 { self.behaviors_run }
    #[wasm_bindgen(getter)]
    pub fn cells_moved(&self) -> u32 { self.cells_moved }
    #[wasm_bindgen(getter)]
    pub fn behavior_failures(&self) -> u32 { self.behavior_failures }
    #[wasm_bindgen(getter)]
    pub fn writes_rolled_back(&self) -> u32 { self.writes_rolled_back }
    #[wasm_bindgen(getter)]
    pub fn non_empty_cells(&self) -> u32 { self.non_empty_cells }
    /// Zero unless perf metrics are enabled.
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
}

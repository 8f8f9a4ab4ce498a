//! Mutation Surface - the only view of the world a material behavior gets.
//!
//! Forwards to the Cell Store and Activity Tracker and does the bookkeeping
//! behaviors must not be trusted with:
//! - every cell write is journaled so a failed update can be undone
//! - `swap` marks both cells updated and wakes both chunks
//! - `set` marks the chunk for redraw but does not wake it
//! - temperature/age writes wake the chunk only when the value changes
//!
//! Coordinates are signed so neighbours can be formed freely, but every
//! method except `in_bounds` panics on a coordinate outside the grid.

use crate::domain::environment::Environment;
use crate::domain::materials::{MaterialId, MaterialRegistry, EMPTY};
use crate::spatial::chunks::ChunkGrid;
use crate::spatial::grid::Grid;

use super::scratch::TickScratch;

pub struct Surface<'a> {
    grid: &'a mut Grid,
    chunks: &'a mut ChunkGrid,
    scratch: &'a mut TickScratch,
    registry: &'a MaterialRegistry,
    environment: &'a Environment,
    origin: (i32, i32),
    position: (i32, i32),
    frame: u64,
    rng: u32,
}

impl<'a> Surface<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        grid: &'a mut Grid,
        chunks: &'a mut ChunkGrid,
        scratch: &'a mut TickScratch,
        registry: &'a MaterialRegistry,
        environment: &'a Environment,
        x: i32,
        y: i32,
        frame: u64,
        rng_seed: u32,
    ) -> Self {
        Self {
            grid,
            chunks,
            scratch,
            registry,
            environment,
            origin: (x, y),
            position: (x, y),
            frame,
            // xorshift never leaves zero
            rng: if rng_seed == 0 { 0x9E37_79B9 } else { rng_seed },
        }
    }

    // === Acting cell ===

    /// Current x of the acting cell (follows it through swaps).
    #[inline]
    pub fn x(&self) -> i32 {
        self.position.0
    }

    /// Current y of the acting cell (follows it through swaps).
    #[inline]
    pub fn y(&self) -> i32 {
        self.position.1
    }

    /// Whether the acting cell has been swapped away from where it started.
    #[inline]
    pub fn moved(&self) -> bool {
        self.position != self.origin
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    // === Reads ===

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.grid.in_bounds(x, y)
    }

    #[inline]
    #[track_caller]
    pub fn get(&self, x: i32, y: i32) -> MaterialId {
        self.grid.get(x, y)
    }

    #[inline]
    #[track_caller]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y) == EMPTY
    }

    /// Density of the material at `(x, y)`; empty reports `EMPTY_DENSITY` (0.0).
    ///
    /// Behaviors cannot write unregistered ids, but the host can through
    /// `Engine::grid_mut`; such a cell reports `f32::INFINITY` so nothing
    /// tries to displace it, and the scheduler fails the tick when it reaches it.
    #[inline]
    #[track_caller]
    pub fn density(&self, x: i32, y: i32) -> f32 {
        self.registry
            .density(self.grid.get(x, y))
            .unwrap_or(f32::INFINITY)
    }

    #[inline]
    #[track_caller]
    pub fn temp(&self, x: i32, y: i32) -> f32 {
        self.grid.temp(x, y)
    }

    #[inline]
    #[track_caller]
    pub fn age(&self, x: i32, y: i32) -> i32 {
        self.grid.age(x, y)
    }

    pub fn registry(&self) -> &MaterialRegistry {
        self.registry
    }

    // === Writes ===

    /// Replace the material at `(x, y)` and reset its age.
    ///
    /// Does not wake the chunk; pair with `wake_area` when the change should
    /// be simulated around it. Panics on an id the registry does not know:
    /// the grid never holds a material without a descriptor.
    #[track_caller]
    pub fn set(&mut self, x: i32, y: i32, id: MaterialId) {
        let idx = self.grid.cell_index(x, y);
        if !self.registry.contains(id) {
            panic!("material {} written at ({}, {}) is not registered", id, x, y);
        }
        self.scratch.record(&*self.grid, idx);
        self.grid.set_material_idx(idx, id);
        self.chunks.mark_redraw(x as u32, y as u32);
    }

    /// Exchange material, temperature and age of two cells.
    ///
    /// Density is not checked here: callers compare `density` themselves.
    #[track_caller]
    pub fn swap(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let idx1 = self.grid.cell_index(x1, y1);
        let idx2 = self.grid.cell_index(x2, y2);
        if idx1 == idx2 {
            return;
        }

        self.scratch.record(&*self.grid, idx1);
        self.scratch.record(&*self.grid, idx2);
        self.grid.swap_idx(idx1, idx2);

        self.scratch.mark_updated(idx1);
        self.scratch.mark_updated(idx2);

        for (x, y) in [(x1, y1), (x2, y2)] {
            self.chunks.wake(x as u32, y as u32);
            self.chunks.mark_redraw(x as u32, y as u32);
        }

        if self.position == (x1, y1) {
            self.position = (x2, y2);
        } else if self.position == (x2, y2) {
            self.position = (x1, y1);
        }
    }

    #[track_caller]
    pub fn set_temp(&mut self, x: i32, y: i32, temp: f32) {
        let idx = self.grid.cell_index(x, y);
        if self.grid.temperature[idx] == temp {
            return;
        }
        self.scratch.record(&*self.grid, idx);
        self.grid.temperature[idx] = temp;
        self.chunks.wake(x as u32, y as u32);
    }

    #[track_caller]
    pub fn add_temp(&mut self, x: i32, y: i32, delta: f32) {
        let idx = self.grid.cell_index(x, y);
        let temp = self.grid.temperature[idx] + delta;
        self.set_temp(x, y, temp);
    }

    #[track_caller]
    pub fn set_age(&mut self, x: i32, y: i32, age: i32) {
        let idx = self.grid.cell_index(x, y);
        if self.grid.age[idx] == age {
            return;
        }
        self.scratch.record(&*self.grid, idx);
        self.grid.age[idx] = age;
        self.chunks.wake(x as u32, y as u32);
    }

    // === Bookkeeping ===

    /// Flag `(x, y)` as processed for the rest of this tick.
    #[track_caller]
    pub fn mark_updated(&mut self, x: i32, y: i32) {
        let idx = self.grid.cell_index(x, y);
        self.scratch.mark_updated(idx);
    }

    /// Wake the chunk holding `(x, y)` (and the neighbour across an edge).
    #[track_caller]
    pub fn wake_area(&mut self, x: i32, y: i32) {
        self.grid.cell_index(x, y);
        self.chunks.wake(x as u32, y as u32);
    }

    /// Raise the tick-scoped powered bit on `(x, y)`.
    #[track_caller]
    pub fn mark_powered(&mut self, x: i32, y: i32) {
        let idx = self.grid.cell_index(x, y);
        self.scratch.mark_powered(idx);
    }

    #[track_caller]
    pub fn is_powered(&self, x: i32, y: i32) -> bool {
        self.scratch.is_powered(self.grid.cell_index(x, y))
    }

    // === Environment ===

    #[inline]
    pub fn wind(&self) -> f32 {
        self.environment.wind
    }

    #[inline]
    pub fn wind_strength(&self) -> f32 {
        self.environment.wind_strength
    }

    // === Randomness (deterministic per seed, tick and cell) ===

    /// Xorshift32 step.
    #[inline]
    pub fn random(&mut self) -> u32 {
        let mut x = self.rng;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.rng = x;
        x
    }

    /// True with probability `p` (clamped to `0..=1`).
    #[inline]
    pub fn chance(&mut self, p: f32) -> bool {
        let unit = (self.random() >> 8) as f32 / (1u32 << 24) as f32;
        unit < p.clamp(0.0, 1.0)
    }

    /// `-1` or `1`.
    #[inline]
    pub fn random_dir(&mut self) -> i32 {
        if self.random() & 1 == 0 { -1 } else { 1 }
    }
}

/// Mix seed, tick and cell index into a per-dispatch RNG seed.
///
/// Each cell gets its own stream, so whether a sleeping chunk is scanned
/// never shifts the random numbers other cells see.
#[inline]
pub(crate) fn cell_seed(seed: u32, frame: u64, idx: usize) -> u32 {
    let mut z = (seed as u64) ^ frame.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ (idx as u64).rotate_left(32);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z as u32) ^ ((z >> 32) as u32)
}

//! Tick-scoped scratch state owned by the scheduler.
//!
//! - `updated`: cells already processed this tick (by destination).
//! - `powered`: signal bits materials raise for each other during one tick.
//! - undo journal: prior values of every cell the current behavior wrote,
//!   plus the bits it raised, so a failed update can be rolled back.
//!
//! Nothing here survives past the tick that filled it.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::spatial::grid::{CellSnapshot, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    Updated(usize),
    Powered(usize),
}

pub struct TickScratch {
    updated: Vec<u64>,
    powered: Vec<u64>,
    journal: Vec<(usize, CellSnapshot)>,
    marks: Vec<Mark>,
}

#[inline(always)]
fn test_and_set(bits: &mut [u64], idx: usize) -> bool {
    let word = idx >> 6;
    let bit = 1u64 << (idx & 63);
    let was_set = bits[word] & bit != 0;
    bits[word] |= bit;
    !was_set
}

#[inline(always)]
fn clear(bits: &mut [u64], idx: usize) {
    bits[idx >> 6] &= !(1u64 << (idx & 63));
}

#[inline(always)]
fn check(bits: &[u64], idx: usize) -> bool {
    bits[idx >> 6] & (1u64 << (idx & 63)) != 0
}

fn zero(bits: &mut [u64]) {
    #[cfg(feature = "parallel")]
    {
        bits.par_iter_mut().for_each(|w| *w = 0);
    }
    #[cfg(not(feature = "parallel"))]
    {
        bits.fill(0);
    }
}

impl TickScratch {
    pub fn new(cell_count: usize) -> Self {
        let words = (cell_count + 63) / 64;
        Self {
            updated: vec![0u64; words],
            powered: vec![0u64; words],
            // Most behaviors touch at most a handful of cells.
            journal: Vec::with_capacity(16),
            marks: Vec::with_capacity(16),
        }
    }

    /// Clear all per-tick state. Allocations are kept.
    pub fn begin_tick(&mut self) {
        zero(&mut self.updated);
        zero(&mut self.powered);
        self.journal.clear();
        self.marks.clear();
    }

    /// Start journaling a new behavior invocation.
    #[inline]
    pub fn begin_dispatch(&mut self) {
        self.journal.clear();
        self.marks.clear();
    }

    // === Updated set ===

    #[inline]
    pub fn is_updated(&self, idx: usize) -> bool {
        check(&self.updated, idx)
    }

    /// Scheduler-side mark for the acting cell. Not journaled.
    #[inline]
    pub fn mark_processed(&mut self, idx: usize) {
        test_and_set(&mut self.updated, idx);
    }

    /// Behavior-side mark, undone if the behavior fails.
    #[inline]
    pub fn mark_updated(&mut self, idx: usize) {
        if test_and_set(&mut self.updated, idx) {
            self.marks.push(Mark::Updated(idx));
        }
    }

    // === Powered set ===

    #[inline]
    pub fn is_powered(&self, idx: usize) -> bool {
        check(&self.powered, idx)
    }

    #[inline]
    pub fn mark_powered(&mut self, idx: usize) {
        if test_and_set(&mut self.powered, idx) {
            self.marks.push(Mark::Powered(idx));
        }
    }

    // === Undo journal ===

    /// Remember the current value of `idx` before it is overwritten.
    #[inline]
    pub fn record(&mut self, grid: &Grid, idx: usize) {
        self.journal.push((idx, grid.snapshot(idx)));
    }

    /// Undo everything journaled since `begin_dispatch`, newest first.
    /// Returns the number of cell writes reverted.
    pub fn rollback(&mut self, grid: &mut Grid) -> usize {
        let reverted = self.journal.len();
        while let Some((idx, cell)) = self.journal.pop() {
            grid.restore(idx, cell);
        }
        while let Some(mark) = self.marks.pop() {
            match mark {
                Mark::Updated(idx) => clear(&mut self.updated, idx),
                Mark::Powered(idx) => clear(&mut self.powered, idx),
            }
        }
        reverted
    }
}

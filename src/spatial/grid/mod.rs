//! Cell Store - Structure of Arrays (SoA) for cache-friendly cell storage
//!
//! Instead of: Vec<Cell>                          // field loads drag the whole struct in
//! We have:    materials[], temperature[], age[]  // linear memory per field
//!
//! Every coordinate-taking method except `in_bounds` panics on an out-of-range
//! coordinate. Behaviors must check `in_bounds` first.

use crate::domain::materials::{MaterialId, EMPTY};

mod accessors;
mod indexing;
mod moves;

/// Value of one cell, used by the undo journal and by tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellSnapshot {
    pub material: MaterialId,
    pub temperature: f32,
    pub age: i32,
}

/// SoA grid - all cell data in separate arrays
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    pub(crate) materials: Vec<MaterialId>, // 0 = empty
    pub(crate) temperature: Vec<f32>,
    pub(crate) age: Vec<i32>, // opaque per-cell counter, meaning owned by materials

    non_empty: usize,
}

impl Grid {
    pub fn new(width: u32, height: u32, ambient_temperature: f32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            materials: vec![EMPTY; size],
            temperature: vec![ambient_temperature; size],
            age: vec![0; size],
            non_empty: 0,
        }
    }

    /// Reset every cell to empty at `ambient_temperature`.
    pub fn clear(&mut self, ambient_temperature: f32) {
        self.materials.fill(EMPTY);
        self.temperature.fill(ambient_temperature);
        self.age.fill(0);
        self.non_empty = 0;
    }

    /// Number of cells holding a non-empty material.
    #[inline]
    pub fn non_empty_count(&self) -> usize {
        self.non_empty
    }

    #[inline]
    fn write_material_idx(&mut self, idx: usize, id: MaterialId) {
        let prev = self.materials[idx];
        self.materials[idx] = id;
        if prev == EMPTY && id != EMPTY {
            self.non_empty += 1;
        } else if prev != EMPTY && id == EMPTY {
            self.non_empty -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty_at_ambient() {
        let grid = Grid::new(4, 3, 21.5);
        assert_eq!(grid.size(), 12);
        assert_eq!(grid.non_empty_count(), 0);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.get(x, y), EMPTY);
                assert_eq!(grid.temp(x, y), 21.5);
                assert_eq!(grid.age(x, y), 0);
            }
        }
    }

    #[test]
    fn set_material_resets_age_and_keeps_temperature() {
        let mut grid = Grid::new(3, 3, 20.0);
        grid.set_temp(1, 1, 300.0);
        grid.set_age(1, 1, 42);

        grid.set_material(1, 1, 7);

        assert_eq!(grid.get(1, 1), 7);
        assert_eq!(grid.age(1, 1), 0);
        assert_eq!(grid.temp(1, 1), 300.0);
        assert_eq!(grid.non_empty_count(), 1);

        grid.set_material(1, 1, EMPTY);
        assert_eq!(grid.non_empty_count(), 0);
    }

    #[test]
    fn swap_exchanges_all_fields_and_nothing_else() {
        let mut grid = Grid::new(3, 1, 20.0);
        grid.set_material(0, 0, 2);
        grid.set_temp(0, 0, 80.0);
        grid.set_age(0, 0, 5);
        grid.set_material(2, 0, 9);
        grid.set_temp(2, 0, -4.0);
        grid.set_age(2, 0, 11);
        let bystander = grid.snapshot(grid.cell_index(1, 0));

        grid.swap(0, 0, 2, 0);

        assert_eq!(
            grid.snapshot(grid.cell_index(0, 0)),
            CellSnapshot { material: 9, temperature: -4.0, age: 11 }
        );
        assert_eq!(
            grid.snapshot(grid.cell_index(2, 0)),
            CellSnapshot { material: 2, temperature: 80.0, age: 5 }
        );
        assert_eq!(grid.snapshot(grid.cell_index(1, 0)), bystander);
        assert_eq!(grid.non_empty_count(), 2);
    }

    #[test]
    fn restore_tracks_occupancy() {
        let mut grid = Grid::new(2, 2, 20.0);
        let idx = grid.cell_index(1, 1);
        grid.restore(idx, CellSnapshot { material: 3, temperature: 1.0, age: 2 });
        assert_eq!(grid.non_empty_count(), 1);
        grid.restore(idx, CellSnapshot { material: EMPTY, temperature: 20.0, age: 0 });
        assert_eq!(grid.non_empty_count(), 0);
    }

    #[test]
    fn in_bounds_rejects_negative_and_overflowing_coords() {
        let grid = Grid::new(5, 4, 20.0);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(4, 3));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(5, 0));
        assert!(!grid.in_bounds(0, 4));
    }

    #[test]
    #[should_panic(expected = "outside the 5x4 grid")]
    fn out_of_bounds_read_fails_fast() {
        let grid = Grid::new(5, 4, 20.0);
        // x overflows the row but would still land inside the backing array.
        let _ = grid.get(5, 0);
    }

    #[test]
    #[should_panic(expected = "outside the 5x4 grid")]
    fn out_of_bounds_write_fails_fast() {
        let mut grid = Grid::new(5, 4, 20.0);
        grid.set_age(0, -1, 3);
    }
}

use super::*;

impl Grid {
    // === Swap two cells (all data) ===
    #[inline]
    #[track_caller]
    pub fn swap(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let idx1 = self.cell_index(x1, y1);
        let idx2 = self.cell_index(x2, y2);
        self.swap_idx(idx1, idx2);
    }

    /// Material, temperature and age all travel together.
    /// Occupancy count is unchanged by a swap.
    #[inline]
    pub fn swap_idx(&mut self, idx1: usize, idx2: usize) {
        self.materials.swap(idx1, idx2);
        self.temperature.swap(idx1, idx2);
        self.age.swap(idx1, idx2);
    }

    // === Snapshots (undo journal) ===
    #[inline]
    pub fn snapshot(&self, idx: usize) -> CellSnapshot {
        CellSnapshot {
            material: self.materials[idx],
            temperature: self.temperature[idx],
            age: self.age[idx],
        }
    }

    #[inline]
    pub fn restore(&mut self, idx: usize, cell: CellSnapshot) {
        self.write_material_idx(idx, cell.material);
        self.temperature[idx] = cell.temperature;
        self.age[idx] = cell.age;
    }
}

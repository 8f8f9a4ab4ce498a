use super::super::*;

impl Grid {
    // === Material access ===
    #[inline]
    #[track_caller]
    pub fn get(&self, x: i32, y: i32) -> MaterialId {
        self.materials[self.cell_index(x, y)]
    }

    #[inline]
    pub fn get_idx(&self, idx: usize) -> MaterialId {
        self.materials[idx]
    }

    #[inline]
    #[track_caller]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == EMPTY
    }

    /// Write a material id and reset the cell's age. Temperature is untouched.
    #[inline]
    #[track_caller]
    pub fn set_material(&mut self, x: i32, y: i32, id: MaterialId) {
        let idx = self.cell_index(x, y);
        self.set_material_idx(idx, id);
    }

    #[inline]
    pub fn set_material_idx(&mut self, idx: usize, id: MaterialId) {
        self.write_material_idx(idx, id);
        self.age[idx] = 0;
    }
}

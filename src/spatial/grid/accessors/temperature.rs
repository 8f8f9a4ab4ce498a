use super::super::*;

impl Grid {
    // === Temperature access ===
    #[inline]
    #[track_caller]
    pub fn temp(&self, x: i32, y: i32) -> f32 {
        self.temperature[self.cell_index(x, y)]
    }

    #[inline]
    #[track_caller]
    pub fn set_temp(&mut self, x: i32, y: i32, temp: f32) {
        let idx = self.cell_index(x, y);
        self.temperature[idx] = temp;
    }

    #[inline]
    #[track_caller]
    pub fn add_temp(&mut self, x: i32, y: i32, delta: f32) {
        let idx = self.cell_index(x, y);
        self.temperature[idx] += delta;
    }
}

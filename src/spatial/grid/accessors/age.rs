use super::super::*;

impl Grid {
    // === Age access ===
    #[inline]
    #[track_caller]
    pub fn age(&self, x: i32, y: i32) -> i32 {
        self.age[self.cell_index(x, y)]
    }

    #[inline]
    #[track_caller]
    pub fn set_age(&mut self, x: i32, y: i32, age: i32) {
        let idx = self.cell_index(x, y);
        self.age[idx] = age;
    }
}

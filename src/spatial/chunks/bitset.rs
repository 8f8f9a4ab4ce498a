use super::*;

impl ChunkGrid {
    // === BitSet Helpers ===

    #[inline(always)]
    pub(super) fn set_bit(bits: &mut [u64], idx: usize) {
        let word = idx >> 6; // idx / 64
        let bit = idx & 63; // idx % 64
        if word < bits.len() {
            bits[word] |= 1u64 << bit;
        }
    }

    #[inline(always)]
    pub(super) fn check_bit(bits: &[u64], idx: usize) -> bool {
        let word = idx >> 6;
        let bit = idx & 63;
        word < bits.len() && (bits[word] & (1u64 << bit)) != 0
    }

    /// Visit every set bit below `limit`, lowest index first.
    #[inline]
    pub(super) fn for_each_set_bit(bits: &[u64], limit: usize, mut f: impl FnMut(usize)) {
        for (w, &word) in bits.iter().enumerate() {
            let mut mask = word;
            while mask != 0 {
                let bit = mask.trailing_zeros() as usize;
                mask &= mask - 1; // Clear lowest set bit
                let idx = (w << 6) | bit;
                if idx < limit {
                    f(idx);
                }
            }
        }
    }

    // === Chunk indexing ===

    /// Cell coordinates must lie inside the world, same as `Grid::cell_index`.
    #[inline]
    #[track_caller]
    pub(super) fn check_cell(&self, x: u32, y: u32) {
        if x >= self.world_width || y >= self.world_height {
            panic!(
                "cell ({}, {}) is outside the {}x{} grid",
                x, y, self.world_width, self.world_height
            );
        }
    }

    /// Get chunk index from world coordinates
    #[inline]
    pub fn chunk_index(&self, x: u32, y: u32) -> usize {
        let (cx, cy) = self.chunk_coords(x, y);
        self.chunk_idx_from_coords(cx, cy)
    }

    /// Get chunk coordinates from world coordinates
    #[inline]
    pub fn chunk_coords(&self, x: u32, y: u32) -> (u32, u32) {
        (x >> self.chunk_shift, y >> self.chunk_shift)
    }

    /// Get chunk index from chunk coordinates
    #[inline]
    pub fn chunk_idx_from_coords(&self, cx: u32, cy: u32) -> usize {
        (cy * self.chunks_x + cx) as usize
    }

    #[inline]
    pub fn chunk_in_bounds(&self, cx: i32, cy: i32) -> bool {
        cx >= 0 && cx < self.chunks_x as i32 && cy >= 0 && cy < self.chunks_y as i32
    }

    /// Cell bounds `[x0, x1) x [y0, y1)` of a chunk, clipped to the world.
    #[inline]
    pub fn chunk_bounds(&self, cx: u32, cy: u32) -> (u32, u32, u32, u32) {
        let x0 = cx * self.chunk_size;
        let y0 = cy * self.chunk_size;
        let x1 = (x0 + self.chunk_size).min(self.world_width);
        let y1 = (y0 + self.chunk_size).min(self.world_height);
        (x0, y0, x1, y1)
    }
}

use super::*;

impl ChunkGrid {
    // === Redraw dirty flags (independent of sleep/wake) ===

    /// Panics when `(x, y)` is outside the world.
    #[inline]
    #[track_caller]
    pub fn mark_redraw(&mut self, x: u32, y: u32) {
        self.check_cell(x, y);
        let idx = self.chunk_index(x, y);
        Self::set_bit(&mut self.redraw_bits, idx);
    }

    #[inline]
    pub fn is_redraw_dirty(&self, cx: u32, cy: u32) -> bool {
        Self::check_bit(&self.redraw_bits, self.chunk_idx_from_coords(cx, cy))
    }

    pub fn redraw_chunk_count(&self) -> usize {
        self.redraw_bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Drain redraw-dirty chunks into `out` (cleared first), row-major.
    pub fn take_redraw_chunks(&mut self, out: &mut Vec<(u32, u32)>) {
        out.clear();
        let chunks_x = self.chunks_x;
        Self::for_each_set_bit(&self.redraw_bits, self.chunk_count, |idx| {
            out.push(((idx as u32) % chunks_x, (idx as u32) / chunks_x));
        });
        self.redraw_bits.fill(0);
    }
}

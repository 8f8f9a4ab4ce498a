use super::*;

impl ChunkGrid {
    /// Neighbour chunk offsets, one per edge bit:
    ///   Bit 0: Left, Bit 1: Right, Bit 2: Top, Bit 3: Bottom
    const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [
        (-1, 0), // 0: Left
        (1, 0),  // 1: Right
        (0, -1), // 2: Top
        (0, 1),  // 3: Bottom
    ];

    /// Wake the chunk containing `(x, y)` and, when the cell sits on a chunk
    /// edge, the chunk across that edge. A corner cell also wakes the chunk
    /// across the corner, so every cell within one step of `(x, y)` ends up
    /// in an active chunk.
    ///
    /// Edge flags are computed branchlessly and turned into a bitmask; most
    /// cells are interior so the mask is usually zero.
    ///
    /// Panics when `(x, y)` is outside the world.
    #[track_caller]
    pub fn wake(&mut self, x: u32, y: u32) {
        self.check_cell(x, y);
        let (cx, cy) = self.chunk_coords(x, y);
        self.wake_idx(self.chunk_idx_from_coords(cx, cy));

        // chunk_size is a power of two
        let last = self.chunk_size - 1;
        let local_x = x & last;
        let local_y = y & last;

        let edges = ((local_x == 0) as u8)
            | (((local_x == last) as u8) << 1)
            | (((local_y == 0) as u8) << 2)
            | (((local_y == last) as u8) << 3);
        if edges == 0 {
            return;
        }

        let cxi = cx as i32;
        let cyi = cy as i32;
        let mut mask = edges;
        while mask != 0 {
            let bit = mask.trailing_zeros() as usize;
            mask &= mask - 1;

            let (dx, dy) = Self::NEIGHBOR_OFFSETS[bit];
            self.wake_chunk(cxi + dx, cyi + dy);
        }

        // Corners: one horizontal and one vertical edge bit
        for h in 0..2 {
            if edges & (1 << h) == 0 {
                continue;
            }
            for v in 2..4 {
                if edges & (1 << v) != 0 {
                    let dx = Self::NEIGHBOR_OFFSETS[h].0;
                    let dy = Self::NEIGHBOR_OFFSETS[v].1;
                    self.wake_chunk(cxi + dx, cyi + dy);
                }
            }
        }
    }

    #[inline]
    fn wake_chunk(&mut self, cx: i32, cy: i32) {
        if self.chunk_in_bounds(cx, cy) {
            self.wake_idx(self.chunk_idx_from_coords(cx as u32, cy as u32));
        }
    }

    /// Mark chunk active by chunk index and refresh its ttl.
    #[inline]
    pub fn wake_idx(&mut self, idx: usize) {
        if idx >= self.chunk_count {
            return;
        }
        if !Self::check_bit(&self.active_bits, idx) {
            self.woken_this_tick = self.woken_this_tick.saturating_add(1);
            Self::set_bit(&mut self.active_bits, idx);
        }
        Self::set_bit(&mut self.touched_bits, idx);
        self.ttl[idx] = self.wake_ttl;
    }

    #[inline]
    pub fn is_active(&self, cx: u32, cy: u32) -> bool {
        Self::check_bit(&self.active_bits, self.chunk_idx_from_coords(cx, cy))
    }

    /// Whether the chunk holding cell `(x, y)` is active.
    #[inline]
    pub fn is_active_at(&self, x: u32, y: u32) -> bool {
        Self::check_bit(&self.active_bits, self.chunk_index(x, y))
    }
}

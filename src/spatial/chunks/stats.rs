use super::*;

impl ChunkGrid {
    // === Queries ===

    /// Active chunks as `(cx, cy)`, row-major.
    pub fn active_chunks(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let chunks_x = self.chunks_x;
        let limit = self.chunk_count;
        self.active_bits.iter().enumerate().flat_map(move |(w, &word)| {
            let mut mask = word;
            std::iter::from_fn(move || {
                while mask != 0 {
                    let bit = mask.trailing_zeros() as usize;
                    mask &= mask - 1;
                    let idx = (w << 6) | bit;
                    if idx < limit {
                        return Some(((idx as u32) % chunks_x, (idx as u32) / chunks_x));
                    }
                }
                None
            })
        })
    }

    /// Get number of active chunks
    pub fn active_chunk_count(&self) -> usize {
        self.active_bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn total_chunks(&self) -> usize {
        self.chunk_count
    }

    /// Chunk grid dimensions `(chunks_x, chunks_y)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.chunks_x, self.chunks_y)
    }

    pub fn chunk_size(&self) -> u32 {
        self.chunk_size
    }

    pub fn wake_ttl(&self) -> u32 {
        self.wake_ttl
    }

    /// Remaining ticks before the chunk sleeps (0 when asleep).
    pub fn ttl(&self, cx: u32, cy: u32) -> u32 {
        if Self::check_bit(&self.active_bits, self.chunk_idx_from_coords(cx, cy)) {
            self.ttl[self.chunk_idx_from_coords(cx, cy)]
        } else {
            0
        }
    }

    pub fn woken_this_tick(&self) -> u32 {
        self.woken_this_tick
    }

    pub fn slept_this_tick(&self) -> u32 {
        self.slept_this_tick
    }
}

use super::*;

impl ChunkGrid {
    // === Tick update ===

    /// Called at the start of each tick - reset per-tick counters
    pub fn begin_tick(&mut self) {
        self.touched_bits.fill(0);
        self.woken_this_tick = 0;
        self.slept_this_tick = 0;
    }

    /// Called once per tick after scheduling: age every active chunk and put
    /// the ones whose ttl reaches zero to sleep.
    ///
    /// Chunks woken since `begin_tick` keep their full ttl, so a chunk sleeps
    /// after exactly `wake_ttl` ticks with no wake.
    pub fn decay(&mut self) {
        let mut slept = 0u32;
        let touched = &self.touched_bits;
        let ttl = &mut self.ttl;
        let active_bits = &mut self.active_bits;

        for (w, word) in active_bits.iter_mut().enumerate() {
            let mut mask = *word;
            while mask != 0 {
                let bit = mask.trailing_zeros() as usize;
                mask &= mask - 1;
                let idx = (w << 6) | bit;
                if idx >= ttl.len() || Self::check_bit(touched, idx) {
                    continue;
                }
                ttl[idx] = ttl[idx].saturating_sub(1);
                if ttl[idx] == 0 {
                    *word &= !(1u64 << bit);
                    slept += 1;
                }
            }
        }

        self.slept_this_tick = self.slept_this_tick.saturating_add(slept);
        if slept > 0 {
            tracing::debug!(slept, active = self.active_chunk_count(), "chunks went to sleep");
        }
    }

    /// Wake every chunk with a full ttl.
    pub fn wake_all(&mut self) {
        for idx in 0..self.chunk_count {
            self.wake_idx(idx);
        }
    }

    /// Back to the initial state: everything active and dirty for redraw.
    pub fn reset(&mut self) {
        self.active_bits.fill(0);
        self.redraw_bits.fill(0);
        self.touched_bits.fill(0);
        for idx in 0..self.chunk_count {
            Self::set_bit(&mut self.active_bits, idx);
            Self::set_bit(&mut self.redraw_bits, idx);
        }
        self.ttl.fill(self.wake_ttl);
        self.woken_this_tick = 0;
        self.slept_this_tick = 0;
    }
}

//! Activity Tracker - coarse chunk grid over the cell grid.
//!
//! Each chunk is either active (with a `ttl` of ticks left) or asleep.
//! Only active chunks are scanned by the scheduler. Chunks own no cell data.
//!
//! Flags are BitSets: 1 bit = 1 chunk, 64 chunks per `u64` word.

/// Default chunk edge length in cells (power of two).
pub const DEFAULT_CHUNK_SIZE: u32 = 32;

/// Default number of ticks a chunk stays active after its last wake.
pub const DEFAULT_WAKE_TTL: u32 = 60;

mod bitset;
mod lifecycle;
mod redraw;
mod stats;
mod wake;

/// Manages chunk-based sleep/wake tracking
pub struct ChunkGrid {
    chunk_size: u32,
    chunk_shift: u32,
    world_width: u32,
    world_height: u32,
    chunks_x: u32,
    chunks_y: u32,
    chunk_count: usize,
    wake_ttl: u32,

    active_bits: Vec<u64>,
    ttl: Vec<u32>,
    redraw_bits: Vec<u64>,
    // Chunks woken since the last `begin_tick`; exempt from this tick's decay.
    touched_bits: Vec<u64>,

    woken_this_tick: u32,
    slept_this_tick: u32,
}

impl ChunkGrid {
    /// Create the chunk grid covering a `world_width x world_height` cell grid.
    ///
    /// Every chunk starts active with a full `wake_ttl` and dirty for redraw.
    pub fn new(world_width: u32, world_height: u32, chunk_size: u32, wake_ttl: u32) -> Self {
        assert!(
            chunk_size.is_power_of_two(),
            "chunk size {} must be a power of two",
            chunk_size
        );
        let chunks_x = (world_width + chunk_size - 1) / chunk_size;
        let chunks_y = (world_height + chunk_size - 1) / chunk_size;
        let chunk_count = (chunks_x * chunks_y) as usize;
        let words = (chunk_count + 63) / 64;

        let mut grid = Self {
            chunk_size,
            chunk_shift: chunk_size.trailing_zeros(),
            world_width,
            world_height,
            chunks_x,
            chunks_y,
            chunk_count,
            wake_ttl,
            active_bits: vec![0u64; words],
            ttl: vec![0; chunk_count],
            redraw_bits: vec![0u64; words],
            touched_bits: vec![0u64; words],
            woken_this_tick: 0,
            slept_this_tick: 0,
        };
        grid.reset();
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_fully_active() {
        let chunks = ChunkGrid::new(100, 40, 16, 5);
        assert_eq!(chunks.dimensions(), (7, 3));
        assert_eq!(chunks.total_chunks(), 21);
        assert_eq!(chunks.active_chunk_count(), 21);
        assert_eq!(chunks.ttl(6, 2), 5);
    }

    #[test]
    fn idle_chunk_sleeps_after_wake_ttl_decays() {
        let mut chunks = ChunkGrid::new(16, 16, 16, 3);
        chunks.decay();
        chunks.decay();
        assert!(chunks.is_active(0, 0));
        chunks.decay();
        assert!(!chunks.is_active(0, 0));
        assert_eq!(chunks.active_chunk_count(), 0);
        // Extra decays on a sleeping chunk are harmless.
        chunks.decay();
        assert_eq!(chunks.ttl(0, 0), 0);
    }

    #[test]
    fn wake_refreshes_ttl() {
        let mut chunks = ChunkGrid::new(32, 32, 16, 4);
        for _ in 0..3 {
            chunks.decay();
        }
        assert_eq!(chunks.ttl(1, 1), 1);
        chunks.wake(20, 20);
        assert_eq!(chunks.ttl(1, 1), 4);
        chunks.decay();
        assert!(chunks.is_active(1, 1));
        assert!(!chunks.is_active(0, 0));
    }

    #[test]
    fn chunk_woken_this_tick_skips_decay() {
        let mut chunks = ChunkGrid::new(16, 16, 16, 2);
        chunks.begin_tick();
        chunks.wake(3, 3);
        chunks.decay();
        assert_eq!(chunks.ttl(0, 0), 2);

        // Two quiet ticks later it is asleep.
        for _ in 0..2 {
            chunks.begin_tick();
            chunks.decay();
        }
        assert!(!chunks.is_active(0, 0));
    }

    fn asleep(w: u32, h: u32) -> ChunkGrid {
        let mut chunks = ChunkGrid::new(w, h, 16, 2);
        chunks.decay();
        chunks.decay();
        assert_eq!(chunks.active_chunk_count(), 0);
        chunks
    }

    #[test]
    fn interior_wake_touches_only_own_chunk() {
        let mut chunks = asleep(48, 48);
        chunks.wake(24, 24);
        assert_eq!(chunks.active_chunks().collect::<Vec<_>>(), vec![(1, 1)]);
    }

    #[test]
    fn edge_wake_reaches_chunks_across_edges_and_corners() {
        let mut chunks = asleep(48, 48);
        // Left edge of chunk (1,1).
        chunks.wake(16, 20);
        assert_eq!(chunks.active_chunks().collect::<Vec<_>>(), vec![(0, 1), (1, 1)]);

        let mut chunks = asleep(48, 48);
        // Bottom-right corner of chunk (1,1): right, bottom and the diagonal.
        chunks.wake(31, 31);
        assert_eq!(
            chunks.active_chunks().collect::<Vec<_>>(),
            vec![(1, 1), (2, 1), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn edge_wake_at_world_border_stays_in_bounds() {
        let mut chunks = asleep(32, 32);
        chunks.wake(0, 0);
        assert_eq!(chunks.active_chunks().collect::<Vec<_>>(), vec![(0, 0)]);
        chunks.wake(31, 31);
        assert_eq!(chunks.active_chunk_count(), 2);
    }

    #[test]
    fn wake_and_sleep_counters_reset_per_tick() {
        let mut chunks = ChunkGrid::new(32, 16, 16, 1);
        chunks.begin_tick();
        chunks.decay();
        assert_eq!(chunks.slept_this_tick(), 2);
        chunks.begin_tick();
        chunks.wake(3, 3);
        chunks.wake(4, 4);
        assert_eq!(chunks.woken_this_tick(), 1);
        assert_eq!(chunks.slept_this_tick(), 0);
    }

    #[test]
    fn redraw_bits_are_drained() {
        let mut chunks = ChunkGrid::new(32, 32, 16, 1);
        let mut out = Vec::new();
        chunks.take_redraw_chunks(&mut out);
        assert_eq!(out.len(), 4);

        chunks.mark_redraw(17, 2);
        assert!(chunks.is_redraw_dirty(1, 0));
        chunks.take_redraw_chunks(&mut out);
        assert_eq!(out, vec![(1, 0)]);
        chunks.take_redraw_chunks(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    #[should_panic(expected = "cell (48, 3) is outside the 48x48 grid")]
    fn wake_outside_world_fails_fast() {
        let mut chunks = asleep(48, 48);
        chunks.wake(48, 3);
    }

    #[test]
    #[should_panic(expected = "cell (0, 40) is outside the 32x40 grid")]
    fn redraw_mark_outside_world_fails_fast() {
        let mut chunks = ChunkGrid::new(32, 40, 16, 1);
        chunks.mark_redraw(0, 40);
    }

    #[test]
    fn many_chunks_span_multiple_words() {
        let mut chunks = ChunkGrid::new(16 * 20, 16 * 10, 16, 1);
        assert_eq!(chunks.total_chunks(), 200);
        chunks.decay();
        chunks.wake(16 * 19 + 5, 16 * 9 + 5);
        assert_eq!(chunks.active_chunks().collect::<Vec<_>>(), vec![(19, 9)]);
    }
}

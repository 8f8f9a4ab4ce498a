//! Spatial storage: the cell grid and the chunk activity tracker over it.

pub mod chunks;
pub mod grid;

//! Domain types: materials and the external environment.

pub mod environment;
pub mod materials;

pub use environment::Environment;
pub use materials::{MaterialDescriptor, MaterialId, MaterialRegistry, UpdateFn, EMPTY, EMPTY_DENSITY};

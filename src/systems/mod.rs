//! Systems - behaviors plugged into the engine through the material registry.

pub mod behaviors;

//! Error taxonomy for the engine.
//!
//! - Configuration errors (`RegistryError`, `ConfigError`, `EngineError::UnknownMaterial`)
//!   are fatal and returned to the caller.
//! - Bounds errors are caller bugs and panic at the Cell Store.
//! - `BehaviorError` is what a material update returns; the scheduler isolates
//!   it to the failing cell.

use thiserror::Error;

use crate::domain::materials::MaterialId;

/// Errors raised while building the material table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("material id {id} is already registered as `{existing}`")]
    DuplicateId { id: MaterialId, existing: String },
    #[error("material `{name}` (id {id}) has invalid density {density}; densities must be > 0")]
    InvalidDensity {
        id: MaterialId,
        name: String,
        density: f32,
    },
}

/// Errors raised while loading or validating `EngineConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse engine config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("chunk size {0} must be a power of two between 4 and 256")]
    InvalidChunkSize(u32),
    #[error("wake_ttl must be at least 1")]
    ZeroWakeTtl,
    #[error("grid dimensions {width}x{height} must both be non-zero")]
    EmptyGrid { width: u32, height: u32 },
}

/// Fatal engine errors.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cell ({x}, {y}) holds material id {id} which has no registered descriptor")]
    UnknownMaterial { id: MaterialId, x: u32, y: u32 },
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

/// Error returned by a material update. Never escapes the scheduler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BehaviorError {
    #[error("{0}")]
    Message(String),
    #[error("material {id} cannot handle this situation")]
    Unsupported { id: MaterialId },
}

pub type BehaviorResult = Result<(), BehaviorError>;

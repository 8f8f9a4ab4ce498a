//! Shared building blocks: error types.

pub mod error;

pub use error::{BehaviorError, BehaviorResult, ConfigError, EngineError, RegistryError};

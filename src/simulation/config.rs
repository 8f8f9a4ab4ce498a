//! Engine configuration, loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::spatial::chunks::{DEFAULT_CHUNK_SIZE, DEFAULT_WAKE_TTL};

const MIN_CHUNK_SIZE: u32 = 4;
const MAX_CHUNK_SIZE: u32 = 256;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    /// Chunk edge in cells; power of two.
    pub chunk_size: u32,
    /// Ticks a chunk stays awake after its last wake.
    pub wake_ttl: u32,
    /// Seed for the per-cell random streams handed to behaviors.
    pub seed: u32,
    /// Temperature of fresh and cleared cells.
    pub ambient_temperature: f32,
    /// When false every chunk is scanned every tick (debug/reference mode).
    pub chunk_gating: bool,
    /// Time each tick (adds timer overhead).
    pub perf_metrics: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            chunk_size: DEFAULT_CHUNK_SIZE,
            wake_ttl: DEFAULT_WAKE_TTL,
            seed: 12345,
            ambient_temperature: 20.0,
            chunk_gating: true,
            perf_metrics: false,
        }
    }
}

impl EngineConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse and validate. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain struct of numbers and bools: serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if !self.chunk_size.is_power_of_two()
            || !(MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(&self.chunk_size)
        {
            return Err(ConfigError::InvalidChunkSize(self.chunk_size));
        }
        if self.wake_ttl == 0 {
            return Err(ConfigError::ZeroWakeTtl);
        }
        Ok(())
    }

    pub fn with_chunk_size(mut self, chunk_size: u32) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_wake_ttl(mut self, wake_ttl: u32) -> Self {
        self.wake_ttl = wake_ttl;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_chunk_gating(mut self, enabled: bool) -> Self {
        self.chunk_gating = enabled;
        self
    }
}

use serde::{Deserialize, Serialize};

/// Slowly varying global field written by the host and read by behaviors.
///
/// The engine never computes these values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Horizontal wind direction, negative = left.
    pub wind: f32,
    /// Non-negative magnitude, typically in `0.0..=1.0`.
    pub wind_strength: f32,
}

impl Environment {
    pub fn calm() -> Self {
        Self::default()
    }

    pub fn with_wind(wind: f32, wind_strength: f32) -> Self {
        Self {
            wind,
            wind_strength: wind_strength.max(0.0),
        }
    }
}

//! Core configuration for sortviz-core.

use serde::{Deserialize, Serialize};

/// Timing, speed, and array-sizing knobs for the engine.
///
/// Built by the host and passed explicitly into the executor and the array
/// source; the core never reads configuration from global state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Seconds a Compare or Highlight step stays current at speed 1.0.
    pub compare_delay: f32,
    /// Seconds a Swap step stays current at speed 1.0.
    pub swap_delay: f32,
    /// Seconds the terminal Complete step stays current at speed 1.0.
    pub complete_delay: f32,
    /// Delay in effect before any step has been reached.
    pub default_delay: f32,

    /// Inclusive bounds applied to requested speed multipliers.
    pub min_speed: f32,
    pub max_speed: f32,
    /// Speed a fresh executor starts with.
    pub default_speed: f32,

    /// Largest array the source will produce.
    pub max_array_len: usize,
    pub default_array_len: usize,
    /// Inclusive value range for generated arrays.
    pub min_value: i32,
    pub max_value: i32,
}

impl Config {
    /// Clamp a requested speed multiplier into `[min_speed, max_speed]`.
    #[inline]
    pub fn clamp_speed(&self, speed: f32) -> f32 {
        speed.clamp(self.min_speed, self.max_speed)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compare_delay: 0.8,
            swap_delay: 1.2,
            complete_delay: 1.0,
            default_delay: 0.5,
            min_speed: 0.25,
            max_speed: 4.0,
            default_speed: 0.5,
            max_array_len: 100,
            default_array_len: 10,
            min_value: 1,
            max_value: 100,
        }
    }
}

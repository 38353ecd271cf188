//! Playback counters for diagnostics.

use serde::{Deserialize, Serialize};

/// Counters accumulated over an executor's lifetime.
///
/// Plain data for hosts and tests; the engine never reads these back and
/// they survive `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaybackMetrics {
    /// `update` calls processed while Running.
    pub updates_processed: u64,
    /// Timer-driven advances, including the final transition to Completed.
    pub steps_advanced: u64,
    /// `step_forward` calls that acted on a generated sequence.
    pub manual_advances: u64,
    /// Times a step sequence was generated (cache misses on `start`).
    pub generations: u64,
    /// Seconds of Running time fed through `update`.
    pub time_played: f32,
}

impl PlaybackMetrics {
    /// Reset all counters
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

//! Recorded step sequences as a serializable artifact.
//!
//! A trace captures one generator run end to end so it can be stored,
//! diffed, or replayed without re-running the algorithm. Parsing validates
//! the structural invariants every well-formed trace has.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::SortVizError;
use crate::snapshot::ArraySnapshot;
use crate::sorters::SortAlgorithm;
use crate::step::{SortStep, StepKind};

/// One generator run: the algorithm, its input, and every emitted step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepTrace {
    pub algorithm: SortAlgorithm,
    pub input: ArraySnapshot,
    pub steps: Vec<SortStep>,
}

impl StepTrace {
    /// Run `algorithm` over `input` once and capture the result.
    pub fn record(algorithm: SortAlgorithm, input: &ArraySnapshot) -> Self {
        Self {
            algorithm,
            input: input.clone(),
            steps: algorithm.generate(input),
        }
    }

    /// Snapshot after the last step; the input itself when no steps exist.
    pub fn final_state(&self) -> &ArraySnapshot {
        self.steps
            .last()
            .map(|step| &step.array_state)
            .unwrap_or(&self.input)
    }

    /// Per-kind step counts.
    pub fn summary(&self) -> TraceSummary {
        let mut summary = TraceSummary {
            total_steps: self.steps.len(),
            ..TraceSummary::default()
        };
        for step in &self.steps {
            match step.kind {
                StepKind::Compare => summary.compares += 1,
                StepKind::Swap => summary.swaps += 1,
                StepKind::Highlight => summary.highlights += 1,
                StepKind::Complete => summary.completes += 1,
            }
        }
        summary
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, SortVizError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Counts per step kind for one trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraceSummary {
    pub total_steps: usize,
    pub compares: usize,
    pub swaps: usize,
    pub highlights: usize,
    pub completes: usize,
}

impl TraceSummary {
    /// Seconds a full timer-driven playback of these steps takes at `speed`,
    /// with per-kind delays from `config`.
    pub fn playback_seconds(&self, config: &Config, speed: f32) -> f32 {
        let total = self.compares as f32 * config.compare_delay
            + self.swaps as f32 * config.swap_delay
            + self.highlights as f32 * config.compare_delay
            + self.completes as f32 * config.complete_delay;
        total / speed
    }
}

/// Parse a serialized trace and validate its structure: a non-empty trace
/// ends with its only Complete step, every referenced index is in range,
/// and every snapshot has the input's length.
pub fn parse_trace_json(s: &str) -> Result<StepTrace, SortVizError> {
    let trace: StepTrace = serde_json::from_str(s)?;
    validate(&trace)?;
    Ok(trace)
}

fn validate(trace: &StepTrace) -> Result<(), SortVizError> {
    let expected_len = trace.input.len();

    for (position, step) in trace.steps.iter().enumerate() {
        if step.array_state.len() != expected_len {
            return Err(SortVizError::InvalidTrace {
                reason: format!(
                    "step {position} snapshot has {} elements, input has {expected_len}",
                    step.array_state.len()
                ),
            });
        }

        for &index in step.indices.iter().chain(step.roles.keys()) {
            if index >= expected_len {
                return Err(SortVizError::InvalidTrace {
                    reason: format!("step {position} references index {index} out of range"),
                });
            }
        }

        let is_last = position + 1 == trace.steps.len();
        if step.kind == StepKind::Complete && !is_last {
            return Err(SortVizError::InvalidTrace {
                reason: format!("Complete step at position {position} is not terminal"),
            });
        }
        if is_last && step.kind != StepKind::Complete {
            return Err(SortVizError::InvalidTrace {
                reason: format!("final step is {}, expected complete", step.kind.name()),
            });
        }
    }

    Ok(())
}

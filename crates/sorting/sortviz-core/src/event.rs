//! Discrete signals emitted by the executor.

use serde::{Deserialize, Serialize};

use crate::sorters::SortAlgorithm;
use crate::step::StepKind;

/// Semantic playback signals, queued during executor calls and drained by
/// the host with `take_events`.
///
/// Purely observational: no transition depends on whether the queue is read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ExecutorEvent {
    Started {
        algorithm: SortAlgorithm,
        total_steps: usize,
    },
    Paused {
        step_index: usize,
    },
    Resumed {
        step_index: usize,
    },
    Reset,
    StepAdvanced {
        step_index: usize,
        kind: StepKind,
    },
    Completed {
        total_steps: usize,
    },
}

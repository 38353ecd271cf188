//! Sortviz core (renderer-agnostic)
//!
//! Deterministic step generation for classic sorting algorithms, plus a
//! timer-driven executor that replays a generated sequence for a host-owned
//! frame loop. Hosts pick an algorithm and an input array, feed wall-clock
//! deltas through [`AlgorithmExecutor::update`], and render whatever
//! [`AlgorithmExecutor::current_step`] returns. Nothing in this crate draws,
//! spawns threads, or touches global state.

pub mod config;
pub mod error;
pub mod event;
pub mod executor;
pub mod metrics;
pub mod snapshot;
pub mod sorters;
pub mod source;
pub mod step;
pub mod trace;

// Re-exports for consumers (hosts and tests)
pub use config::Config;
pub use error::SortVizError;
pub use event::ExecutorEvent;
pub use executor::{AlgorithmExecutor, ExecutionState};
pub use metrics::PlaybackMetrics;
pub use snapshot::ArraySnapshot;
pub use sorters::SortAlgorithm;
pub use source::{random_from_config, random_snapshot};
pub use step::{ElementRole, SortStep, StepKind};
pub use trace::{parse_trace_json, StepTrace, TraceSummary};

/// Convenience alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, SortVizError>;

//! Timer-driven playback over generated step sequences.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::event::ExecutorEvent;
use crate::metrics::PlaybackMetrics;
use crate::snapshot::ArraySnapshot;
use crate::sorters::SortAlgorithm;
use crate::step::{SortStep, StepKind};

/// Playback state of the executor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutionState {
    /// Nothing generated, nothing playing
    Idle,
    /// The timer is advancing steps
    Running,
    /// Playback is frozen on the current step
    Paused,
    /// The final step has been passed
    Completed,
}

impl ExecutionState {
    /// Get the name of this state
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }

    /// Check if the timer is advancing
    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Check if playback can be paused
    #[inline]
    pub fn can_pause(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Check if playback can be resumed
    #[inline]
    pub fn can_resume(&self) -> bool {
        matches!(self, Self::Paused)
    }
}

/// Replays a generated step sequence against a host-driven clock.
///
/// The host selects an algorithm and an input array, calls [`start`], then
/// feeds frame deltas through [`update`] and renders whatever
/// [`current_step`] returns. Each step stays current for its kind's
/// configured delay divided by the speed multiplier. All methods run on the
/// caller's thread and none of them block.
///
/// Steps are generated once and cached: `reset`, `set_algorithm`, and
/// `set_array` invalidate the cache, while a `start` after completion
/// replays the same sequence.
///
/// [`start`]: AlgorithmExecutor::start
/// [`update`]: AlgorithmExecutor::update
/// [`current_step`]: AlgorithmExecutor::current_step
#[derive(Debug)]
pub struct AlgorithmExecutor {
    algorithm: Option<SortAlgorithm>,
    array: ArraySnapshot,
    steps: Vec<SortStep>,
    current_step_index: usize,
    state: ExecutionState,
    speed: f32,
    time_since_last_step: f32,
    step_delay: f32,
    config: Config,
    metrics: PlaybackMetrics,
    events: Vec<ExecutorEvent>,
}

impl AlgorithmExecutor {
    /// Create an executor with no algorithm or input selected.
    pub fn new(config: Config) -> Self {
        Self {
            algorithm: None,
            array: ArraySnapshot::empty(),
            steps: Vec::new(),
            current_step_index: 0,
            state: ExecutionState::Idle,
            speed: config.default_speed,
            time_since_last_step: 0.0,
            step_delay: config.default_delay,
            config,
            metrics: PlaybackMetrics::default(),
            events: Vec::new(),
        }
    }

    /// Select the algorithm to play. Invalidates any generated steps.
    pub fn set_algorithm(&mut self, algorithm: SortAlgorithm) {
        self.algorithm = Some(algorithm);
        self.reset();
    }

    /// Replace the input array. Invalidates any generated steps.
    pub fn set_array(&mut self, array: ArraySnapshot) {
        self.array = array;
        self.reset();
    }

    /// Begin or restart playback.
    ///
    /// Returns `false` without changing state when already Running, when no
    /// algorithm or input is selected, or when generation yields no steps.
    /// From Paused this resumes instead.
    pub fn start(&mut self) -> bool {
        if self.state == ExecutionState::Running {
            return false;
        }

        if self.state == ExecutionState::Paused {
            self.resume();
            return true;
        }

        let Some(algorithm) = self.algorithm else {
            return false;
        };

        if self.array.is_empty() {
            return false;
        }

        if self.steps.is_empty() {
            self.steps = algorithm.generate(&self.array);
            self.metrics.generations += 1;
            debug!(
                "generated {} steps for {} over {} elements",
                self.steps.len(),
                algorithm.name(),
                self.array.len()
            );
            if self.steps.is_empty() {
                return false;
            }
        }

        self.current_step_index = 0;
        self.state = ExecutionState::Running;
        self.time_since_last_step = 0.0;
        self.step_delay = self.delay_for(self.steps[0].kind);

        debug!("started {} playback", algorithm.name());
        self.events.push(ExecutorEvent::Started {
            algorithm,
            total_steps: self.steps.len(),
        });
        true
    }

    /// Freeze playback on the current step. No-op unless Running.
    pub fn pause(&mut self) {
        if self.state.can_pause() {
            self.state = ExecutionState::Paused;
            debug!("paused at step {}", self.current_step_index);
            self.events.push(ExecutorEvent::Paused {
                step_index: self.current_step_index,
            });
        }
    }

    /// Continue playback from the current step. No-op unless Paused.
    pub fn resume(&mut self) {
        if self.state.can_resume() {
            self.state = ExecutionState::Running;
            debug!("resumed at step {}", self.current_step_index);
            self.events.push(ExecutorEvent::Resumed {
                step_index: self.current_step_index,
            });
        }
    }

    /// Discard generated steps and return to Idle. Idempotent.
    pub fn reset(&mut self) {
        let had_progress = !self.steps.is_empty() || self.state != ExecutionState::Idle;
        self.steps.clear();
        self.current_step_index = 0;
        self.state = ExecutionState::Idle;
        self.time_since_last_step = 0.0;
        if had_progress {
            debug!("reset");
            self.events.push(ExecutorEvent::Reset);
        }
    }

    /// Advance one step immediately, bypassing the timer.
    ///
    /// No-op when nothing has been generated. On the final step this
    /// transitions to Completed instead of advancing. Works while Paused,
    /// which is how hosts implement manual stepping.
    pub fn step_forward(&mut self) {
        if self.steps.is_empty() {
            return;
        }
        self.metrics.manual_advances += 1;
        self.advance_step();
    }

    /// Set the playback speed multiplier, clamped to the configured range.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = self.config.clamp_speed(speed);
    }

    /// Feed one frame's elapsed seconds through the playback timer.
    ///
    /// No-op unless Running. Advances at most one step per call: when the
    /// accumulated time reaches the current step's effective delay, the
    /// executor moves on and the accumulator restarts from zero, discarding
    /// any excess. Hosts wanting catch-up call this repeatedly.
    pub fn update(&mut self, delta_seconds: f32) {
        if self.state != ExecutionState::Running {
            return;
        }

        if self.steps.is_empty() {
            self.state = ExecutionState::Completed;
            return;
        }

        self.metrics.updates_processed += 1;
        self.metrics.time_played += delta_seconds;
        self.time_since_last_step += delta_seconds;

        if self.time_since_last_step >= self.effective_delay() {
            self.advance_step();
            self.metrics.steps_advanced += 1;
            self.time_since_last_step = 0.0;

            if let Some(kind) = self.steps.get(self.current_step_index).map(|s| s.kind) {
                self.step_delay = self.delay_for(kind);
            }
        }
    }

    /// The step playback is currently on, when one exists.
    #[inline]
    pub fn current_step(&self) -> Option<&SortStep> {
        self.steps.get(self.current_step_index)
    }

    /// Message of the current step, when one exists.
    #[inline]
    pub fn current_message(&self) -> Option<&str> {
        self.current_step().map(|step| step.message.as_str())
    }

    #[inline]
    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    #[inline]
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn state(&self) -> ExecutionState {
        self.state
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.state == ExecutionState::Completed
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Seconds the current step remains before the timer advances, at the
    /// current speed.
    #[inline]
    pub fn effective_delay(&self) -> f32 {
        self.step_delay / self.speed
    }

    /// Selected algorithm, when one is set.
    #[inline]
    pub fn algorithm(&self) -> Option<SortAlgorithm> {
        self.algorithm
    }

    /// Display name of the selected algorithm, when one is set.
    #[inline]
    pub fn algorithm_name(&self) -> Option<&'static str> {
        self.algorithm.map(|algorithm| algorithm.name())
    }

    /// The input array steps are generated from.
    #[inline]
    pub fn array(&self) -> &ArraySnapshot {
        &self.array
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Counters accumulated over this executor's lifetime.
    #[inline]
    pub fn metrics(&self) -> &PlaybackMetrics {
        &self.metrics
    }

    /// Drain queued events in emission order.
    pub fn take_events(&mut self) -> Vec<ExecutorEvent> {
        std::mem::take(&mut self.events)
    }

    fn advance_step(&mut self) {
        if self.current_step_index < self.steps.len() - 1 {
            self.current_step_index += 1;
            trace!("advanced to step {}", self.current_step_index);
            self.events.push(ExecutorEvent::StepAdvanced {
                step_index: self.current_step_index,
                kind: self.steps[self.current_step_index].kind,
            });
        } else {
            self.state = ExecutionState::Completed;
            debug!("completed after {} steps", self.steps.len());
            self.events.push(ExecutorEvent::Completed {
                total_steps: self.steps.len(),
            });
        }
    }

    fn delay_for(&self, kind: StepKind) -> f32 {
        match kind {
            StepKind::Compare => self.config.compare_delay,
            StepKind::Swap => self.config.swap_delay,
            StepKind::Highlight => self.config.compare_delay,
            StepKind::Complete => self.config.complete_delay,
        }
    }
}

use approx::assert_abs_diff_eq;
use sortviz_core::{
    AlgorithmExecutor, ArraySnapshot, Config, ExecutionState, ExecutorEvent, SortAlgorithm,
    StepKind,
};

fn mk_executor(algorithm: SortAlgorithm, values: &[i32]) -> AlgorithmExecutor {
    let mut executor = AlgorithmExecutor::new(Config::default());
    executor.set_algorithm(algorithm);
    executor.set_array(ArraySnapshot::from(values));
    executor
}

/// it should start into Running on step 0 and reject a second start
#[test]
fn start_runs_once() {
    let mut executor = mk_executor(SortAlgorithm::Bubble, &[3, 1, 2]);
    assert_eq!(executor.state(), ExecutionState::Idle);
    assert!(executor.current_step().is_none());

    assert!(executor.start());
    assert_eq!(executor.state(), ExecutionState::Running);
    assert_eq!(executor.current_step_index(), 0);
    assert_eq!(executor.total_steps(), 7);
    assert_eq!(
        executor.current_step().map(|s| s.kind),
        Some(StepKind::Compare)
    );

    assert!(!executor.start(), "second start is rejected");
    assert_eq!(executor.state(), ExecutionState::Running);
    assert_eq!(executor.current_step_index(), 0);
}

/// it should refuse to start without an algorithm or with an empty array
#[test]
fn start_requires_algorithm_and_data() {
    let mut executor = AlgorithmExecutor::new(Config::default());
    assert!(!executor.start());
    assert_eq!(executor.state(), ExecutionState::Idle);

    executor.set_algorithm(SortAlgorithm::Insertion);
    assert!(!executor.start(), "empty array");
    assert_eq!(executor.state(), ExecutionState::Idle);

    executor.set_array(ArraySnapshot::from(vec![2, 1]));
    assert!(executor.start());
    assert_eq!(executor.algorithm_name(), Some("Insertion Sort"));
}

/// it should pause only from Running and resume only from Paused
#[test]
fn pause_resume_transitions() {
    let mut executor = mk_executor(SortAlgorithm::Bubble, &[3, 1, 2]);

    executor.pause();
    assert_eq!(executor.state(), ExecutionState::Idle, "pause from Idle is a no-op");
    executor.resume();
    assert_eq!(executor.state(), ExecutionState::Idle, "resume from Idle is a no-op");

    assert!(executor.start());
    executor.resume();
    assert_eq!(executor.state(), ExecutionState::Running, "resume from Running is a no-op");

    executor.pause();
    assert_eq!(executor.state(), ExecutionState::Paused);
    let index = executor.current_step_index();

    executor.update(100.0);
    assert_eq!(executor.current_step_index(), index, "paused playback holds its step");

    assert!(executor.start(), "start from Paused resumes");
    assert_eq!(executor.state(), ExecutionState::Running);
    assert_eq!(executor.current_step_index(), index);
}

/// it should scale the compare delay by the speed multiplier (0.8s at 2.0 -> 0.4s)
#[test]
fn update_honors_speed_scaled_delay() {
    let mut executor = mk_executor(SortAlgorithm::Bubble, &[5, 1, 4, 2, 8]);
    executor.set_speed(2.0);
    assert!(executor.start());
    assert_abs_diff_eq!(executor.effective_delay(), 0.4, epsilon = 1e-6);

    executor.update(0.39);
    assert_eq!(executor.current_step_index(), 0, "0.39s has not reached 0.4s");

    executor.update(0.02);
    assert_eq!(executor.current_step_index(), 1, "0.41s accumulated crosses 0.4s");

    // Step 1 is the swap of 5 and 1; its delay is 1.2s / 2.0.
    assert_eq!(
        executor.current_step().map(|s| s.kind),
        Some(StepKind::Swap)
    );
    assert_abs_diff_eq!(executor.effective_delay(), 0.6, epsilon = 1e-6);
}

/// it should advance at most one step per update and discard the excess
#[test]
fn update_advances_at_most_one_step() {
    let mut executor = mk_executor(SortAlgorithm::Bubble, &[3, 1, 2]);
    assert!(executor.start());

    executor.update(1000.0);
    assert_eq!(executor.current_step_index(), 1, "one advance, however large the delta");

    executor.update(0.01);
    assert_eq!(
        executor.current_step_index(),
        1,
        "the excess was discarded, not carried over"
    );
}

/// it should clamp requested speeds into the configured range
#[test]
fn speed_is_clamped() {
    let mut executor = mk_executor(SortAlgorithm::Bubble, &[2, 1]);
    assert_abs_diff_eq!(executor.speed(), 0.5, epsilon = 1e-6);

    executor.set_speed(100.0);
    assert_abs_diff_eq!(executor.speed(), 4.0, epsilon = 1e-6);

    executor.set_speed(0.0);
    assert_abs_diff_eq!(executor.speed(), 0.25, epsilon = 1e-6);

    executor.set_speed(1.0);
    assert_abs_diff_eq!(executor.speed(), 1.0, epsilon = 1e-6);
}

/// it should step through manually while Paused and land in Completed on the last step
#[test]
fn manual_stepping_reaches_completed() {
    let mut executor = mk_executor(SortAlgorithm::Bubble, &[3, 1, 2]);

    executor.step_forward();
    assert_eq!(executor.current_step_index(), 0, "no-op before generation");

    assert!(executor.start());
    executor.pause();

    let total = executor.total_steps();
    for expected in 1..total {
        executor.step_forward();
        assert_eq!(executor.current_step_index(), expected);
    }
    assert_eq!(executor.state(), ExecutionState::Paused, "still paused on the last step");

    executor.step_forward();
    assert!(executor.is_completed());
    assert_eq!(executor.current_step_index(), total - 1);
    let last = executor.current_step().expect("last step stays visible");
    assert_eq!(last.kind, StepKind::Complete);
    assert!(last.array_state.is_sorted());
    assert_eq!(executor.current_message(), Some("Sorting completed"));
}

/// it should replay the cached sequence on start after completion
#[test]
fn restart_reuses_generated_steps() {
    let mut executor = mk_executor(SortAlgorithm::Selection, &[4, 3, 2, 1]);
    assert!(executor.start());
    let total = executor.total_steps();

    while !executor.is_completed() {
        executor.step_forward();
    }
    assert_eq!(executor.metrics().generations, 1);

    assert!(executor.start(), "restart after completion");
    assert_eq!(executor.state(), ExecutionState::Running);
    assert_eq!(executor.current_step_index(), 0);
    assert_eq!(executor.total_steps(), total);
    assert_eq!(executor.metrics().generations, 1, "cache was reused");

    executor.set_array(ArraySnapshot::from(vec![2, 1]));
    assert_eq!(executor.state(), ExecutionState::Idle, "new data invalidates the cache");
    assert!(executor.start());
    assert_eq!(executor.metrics().generations, 2);
}

/// it should return to Idle on reset and stay there on a second reset
#[test]
fn reset_is_idempotent() {
    let mut executor = mk_executor(SortAlgorithm::Bubble, &[3, 1, 2]);
    assert!(executor.start());
    executor.update(1000.0);

    executor.reset();
    assert_eq!(executor.state(), ExecutionState::Idle);
    assert_eq!(executor.current_step_index(), 0);
    assert_eq!(executor.total_steps(), 0);
    assert!(executor.current_step().is_none());

    let events_after_first = executor.take_events();
    assert!(events_after_first.contains(&ExecutorEvent::Reset));

    executor.reset();
    assert_eq!(executor.state(), ExecutionState::Idle);
    assert!(executor.take_events().is_empty(), "second reset emits nothing");
}

/// it should emit the playback event sequence and drain it on take_events
#[test]
fn events_follow_the_transitions() {
    let mut executor = mk_executor(SortAlgorithm::Bubble, &[2, 1]);
    assert!(executor.take_events().is_empty(), "nothing queued before start");

    assert!(executor.start());
    executor.pause();
    executor.resume();
    executor.step_forward();

    let events = executor.take_events();
    assert_eq!(
        events,
        vec![
            ExecutorEvent::Started {
                algorithm: SortAlgorithm::Bubble,
                total_steps: 4,
            },
            ExecutorEvent::Paused { step_index: 0 },
            ExecutorEvent::Resumed { step_index: 0 },
            ExecutorEvent::StepAdvanced {
                step_index: 1,
                kind: StepKind::Swap,
            },
        ]
    );
    assert!(executor.take_events().is_empty(), "take_events drains the queue");

    while !executor.is_completed() {
        executor.step_forward();
    }
    let events = executor.take_events();
    assert_eq!(
        events.last(),
        Some(&ExecutorEvent::Completed { total_steps: 4 })
    );
}

/// it should count updates, timer advances, and manual advances separately
#[test]
fn metrics_track_playback_activity() {
    let mut executor = mk_executor(SortAlgorithm::Bubble, &[3, 1, 2]);
    executor.update(1.0);
    assert_eq!(executor.metrics().updates_processed, 0, "updates outside Running are not processed");

    assert!(executor.start());
    executor.set_speed(4.0);
    executor.update(0.1);
    executor.update(1.0);
    executor.step_forward();

    let metrics = executor.metrics();
    assert_eq!(metrics.updates_processed, 2);
    assert_eq!(metrics.steps_advanced, 1);
    assert_eq!(metrics.manual_advances, 1);
    assert_eq!(metrics.generations, 1);
    assert_abs_diff_eq!(metrics.time_played, 1.1, epsilon = 1e-6);
}

/// it should hold Completed state under further updates
#[test]
fn completed_is_stable_under_updates() {
    let mut executor = mk_executor(SortAlgorithm::Insertion, &[2, 1]);
    assert!(executor.start());
    while !executor.is_completed() {
        executor.step_forward();
    }

    let index = executor.current_step_index();
    executor.update(1000.0);
    assert!(executor.is_completed());
    assert_eq!(executor.current_step_index(), index);
}

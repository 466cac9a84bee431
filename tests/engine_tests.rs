//! Behavior tests for the timer engines.
//!
//! These tests drive the public `Timer` API the way the controller does,
//! one `tick()` per second, and check the resulting state and events.

use std::time::Duration;

use gymtimer::timer::{Stopwatch, Timer, TimerEvent};
use gymtimer::types::{Mode, Phase, SettingField};

// ============================================================================
// Test Helpers
// ============================================================================

/// Ticks `n` times and returns every emitted event in order.
fn run_ticks(timer: &mut Timer, n: usize) -> Vec<TimerEvent> {
    (0..n).flat_map(|_| timer.tick()).collect()
}

fn started(mut timer: Timer) -> Timer {
    timer.start();
    timer
}

// ============================================================================
// Tabata
// ============================================================================

#[test]
fn test_tabata_work_rest_cycle() {
    let mut timer = started(Timer::tabata());

    run_ticks(&mut timer, 20);
    assert_eq!(timer.phase, Phase::Rest);
    assert_eq!(timer.elapsed, Duration::ZERO);
    assert_eq!(timer.round, 1);

    run_ticks(&mut timer, 10);
    assert_eq!(timer.phase, Phase::Work);
    assert_eq!(timer.round, 2);
}

#[test]
fn test_tabata_full_workout_finishes() {
    let mut timer = started(Timer::tabata());

    let events = run_ticks(&mut timer, 8 * 30);

    let rounds: Vec<u32> = events
        .iter()
        .filter_map(|e| match e {
            TimerEvent::RoundChange { round } => Some(*round),
            _ => None,
        })
        .collect();
    assert_eq!(rounds, (2..=9).collect::<Vec<_>>());
    assert!(timer.is_finished());
}

#[test]
fn test_time_remaining_never_negative() {
    let mut timer = Timer::tabata();
    timer.elapsed = Duration::from_secs(999);
    assert_eq!(timer.time_remaining(), Duration::ZERO);

    let mut timer = Timer::amrap(Duration::from_secs(60));
    timer.elapsed = Duration::from_secs(999);
    assert_eq!(timer.time_remaining(), Duration::ZERO);
}

// ============================================================================
// EMOM
// ============================================================================

#[test]
fn test_emom_ten_rounds() {
    let mut timer = started(Timer::emom(10));

    run_ticks(&mut timer, 599);
    assert!(!timer.is_finished());

    run_ticks(&mut timer, 1);
    assert!(timer.is_finished());
    assert_eq!(timer.round, 11);
}

#[test]
fn test_emom_minute_boundary_events() {
    let mut timer = started(Timer::emom(10));

    let events = run_ticks(&mut timer, 60);

    assert_eq!(
        events,
        vec![
            TimerEvent::CountdownTick { seconds_remaining: 3 },
            TimerEvent::CountdownTick { seconds_remaining: 2 },
            TimerEvent::CountdownTick { seconds_remaining: 1 },
            TimerEvent::RoundChange { round: 2 },
            TimerEvent::IntervalChange { phase: Phase::Work },
        ]
    );
}

// ============================================================================
// AMRAP
// ============================================================================

#[test]
fn test_amrap_five_seconds() {
    let mut timer = started(Timer::amrap(Duration::from_secs(5)));

    let mut per_tick = Vec::new();
    for _ in 0..5 {
        per_tick.push(timer.tick());
    }

    assert!(per_tick[0].is_empty());
    assert_eq!(
        per_tick[1],
        vec![TimerEvent::CountdownTick { seconds_remaining: 3 }]
    );
    assert_eq!(
        per_tick[3],
        vec![TimerEvent::CountdownTick { seconds_remaining: 1 }]
    );
    assert_eq!(
        per_tick[4],
        vec![TimerEvent::IntervalChange { phase: Phase::Rest }]
    );
    assert!(!timer.running);
    assert!(timer.is_finished());
}

#[test]
fn test_amrap_progress() {
    let mut timer = started(Timer::amrap(Duration::from_secs(120)));
    run_ticks(&mut timer, 30);
    assert!((timer.progress() - 25.0).abs() < f64::EPSILON);
}

// ============================================================================
// Custom
// ============================================================================

#[test]
fn test_custom_30_15_5() {
    let mut timer = started(Timer::for_mode(Mode::Custom));
    assert_eq!(timer.total_workout_duration(), Some(Duration::from_secs(225)));

    let events = run_ticks(&mut timer, 225);

    let round_changes = events
        .iter()
        .filter(|e| matches!(e, TimerEvent::RoundChange { .. }))
        .count();
    assert_eq!(round_changes, 5);
    assert!(timer.is_finished());
}

#[test]
fn test_custom_keeps_counting_rounds_past_target() {
    let mut timer = started(Timer::custom(
        Duration::from_secs(5),
        Duration::from_secs(5),
        1,
    ));
    run_ticks(&mut timer, 30);
    assert_eq!(timer.round, 4);
    assert!(timer.running);
}

// ============================================================================
// Modes and Settings
// ============================================================================

#[test]
fn test_set_mode_twice_is_stable() {
    for mode in Mode::ALL {
        let mut timer = Timer::new();
        timer.adjust(SettingField::Work, 3);
        timer.set_mode(mode);
        let first = timer.clone();

        timer.start();
        run_ticks(&mut timer, 7);
        timer.set_mode(mode);

        assert_eq!(timer, first, "mode {}", mode);
    }
}

#[test]
fn test_clock_never_finishes() {
    let mut timer = started(Timer::for_mode(Mode::Clock));
    run_ticks(&mut timer, 10_000);
    assert!(!timer.is_finished());
    assert_eq!(timer.time_remaining(), Duration::ZERO);
}

#[test]
fn test_adjust_clamps() {
    let mut timer = Timer::for_mode(Mode::Tabata);
    timer.adjust(SettingField::Work, 1_000);
    assert_eq!(timer.work_duration, Duration::from_secs(300));
    timer.adjust(SettingField::Rounds, -1_000);
    assert_eq!(timer.total_rounds, 1);
}

// ============================================================================
// Stopwatch
// ============================================================================

#[test]
fn test_stopwatch_paused_tick_and_double_toggle() {
    let mut stopwatch = Stopwatch::new();
    stopwatch.tick();
    assert_eq!(stopwatch.elapsed, Duration::ZERO);

    let before = stopwatch.clone();
    stopwatch.toggle();
    stopwatch.toggle();
    assert_eq!(stopwatch, before);

    stopwatch.start();
    for _ in 0..3_725 {
        stopwatch.tick();
    }
    assert_eq!(stopwatch.format(), "1:02:05");
}

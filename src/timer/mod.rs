//! Timer engine for the Gym Timer.
//!
//! This module provides the core timer functionality:
//! - Shared timer state (elapsed time, rounds, phase, configured durations)
//! - Mode defaults and destructive mode switching
//! - Per-mode tick algorithms (EMOM, Tabata/Custom intervals, AMRAP)
//! - Transition events returned from every tick
//!
//! The timer never stops itself at the end of a round-based workout: callers
//! must poll [`Timer::is_finished`] after every tick.

mod amrap;
mod emom;
mod interval;
mod stopwatch;

use std::time::Duration;

use tracing::debug;

use crate::types::{
    Mode, Phase, SettingField, WorkoutConfig, WorkoutPlan, AMRAP_STEP, INTERVAL_STEP, MAX_AMRAP,
    MAX_INTERVAL, MAX_ROUNDS, MIN_AMRAP, MIN_INTERVAL, MIN_ROUNDS,
};

pub use stopwatch::Stopwatch;

/// Domain time advanced by a single tick.
pub const TICK: Duration = Duration::from_secs(1);

/// Length of one EMOM round.
pub const EMOM_INTERVAL: Duration = Duration::from_secs(60);

/// Remaining time at or below which countdown ticks fire.
pub const COUNTDOWN_WINDOW: Duration = Duration::from_secs(3);

/// Remaining AMRAP time at which the one-minute warning fires.
pub const ONE_MINUTE_WARNING: Duration = Duration::from_secs(60);

// ============================================================================
// TimerEvent
// ============================================================================

/// Transition events emitted synchronously by [`Timer::tick`].
///
/// Events are advisory: the same information can be recomputed from the
/// timer state after the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Whole seconds left in the current interval (1-3, or 60 for the AMRAP warning)
    CountdownTick {
        /// Remaining seconds
        seconds_remaining: u64,
    },
    /// The interval phase changed (AMRAP reuses `Rest` as its completion signal)
    IntervalChange {
        /// Phase just entered
        phase: Phase,
    },
    /// A new round started
    RoundChange {
        /// New 1-based round number
        round: u32,
    },
}

// ============================================================================
// Timer
// ============================================================================

/// Shared timer state, dispatched to a per-mode tick algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    /// Total duration for AMRAP
    pub duration: Duration,
    /// Time elapsed in the current interval
    pub elapsed: Duration,
    /// Whether ticks advance the timer
    pub running: bool,
    /// Active training protocol
    pub mode: Mode,
    /// Current interval phase
    pub phase: Phase,
    /// Current round (1-based)
    pub round: u32,
    /// Target round count
    pub total_rounds: u32,
    /// Work interval length
    pub work_duration: Duration,
    /// Rest interval length
    pub rest_duration: Duration,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Creates a clock-mode timer with the fallback settings.
    pub fn new() -> Self {
        Self {
            duration: Duration::from_secs(20 * 60),
            elapsed: Duration::ZERO,
            running: false,
            mode: Mode::Clock,
            phase: Phase::Work,
            round: 1,
            total_rounds: 8,
            work_duration: Duration::from_secs(20),
            rest_duration: Duration::from_secs(10),
        }
    }

    /// Creates a timer with the defaults of the given mode applied.
    pub fn for_mode(mode: Mode) -> Self {
        let mut timer = Self::new();
        timer.set_mode(mode);
        timer
    }

    /// Creates an EMOM timer with the given number of rounds.
    pub fn emom(rounds: u32) -> Self {
        let mut timer = Self::for_mode(Mode::Emom);
        timer.total_rounds = rounds;
        timer
    }

    /// Creates a Tabata timer: 20s work / 10s rest / 8 rounds.
    pub fn tabata() -> Self {
        Self::for_mode(Mode::Tabata)
    }

    /// Creates an AMRAP countdown of the given length.
    pub fn amrap(duration: Duration) -> Self {
        let mut timer = Self::for_mode(Mode::Amrap);
        timer.duration = duration;
        timer
    }

    /// Creates a custom interval timer.
    pub fn custom(work: Duration, rest: Duration, rounds: u32) -> Self {
        let mut timer = Self::for_mode(Mode::Custom);
        timer.work_duration = work;
        timer.rest_duration = rest;
        timer.total_rounds = rounds;
        timer
    }

    /// Starts the timer.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Pauses the timer.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Switches between running and paused.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Rewinds progress to the first work interval and stops.
    ///
    /// Configured durations and the round target are kept.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.round = 1;
        self.phase = Phase::Work;
        self.running = false;
    }

    /// Changes the mode, discarding progress and every adjusted setting.
    ///
    /// The resulting configuration depends only on `mode`.
    pub fn set_mode(&mut self, mode: Mode) {
        *self = Self {
            mode,
            ..Self::new()
        };

        match mode {
            Mode::Tabata => {
                self.work_duration = Duration::from_secs(20);
                self.rest_duration = Duration::from_secs(10);
                self.total_rounds = 8;
            }
            Mode::Emom => {
                self.total_rounds = 10;
            }
            Mode::Amrap => {
                self.duration = Duration::from_secs(20 * 60);
            }
            Mode::Custom => {
                self.work_duration = Duration::from_secs(30);
                self.rest_duration = Duration::from_secs(15);
                self.total_rounds = 5;
            }
            Mode::Clock | Mode::Stopwatch => {}
        }

        debug!(mode = %mode, "Timer mode set");
    }

    /// Applies command-line overrides, clamped to the setting limits.
    pub fn apply_config(&mut self, config: &WorkoutConfig) {
        if let Some(secs) = config.work_secs {
            self.work_duration = clamp_duration(
                Duration::from_secs(u64::from(secs)),
                MIN_INTERVAL,
                MAX_INTERVAL,
            );
        }
        if let Some(secs) = config.rest_secs {
            self.rest_duration = clamp_duration(
                Duration::from_secs(u64::from(secs)),
                MIN_INTERVAL,
                MAX_INTERVAL,
            );
        }
        if let Some(rounds) = config.rounds {
            self.total_rounds = rounds.clamp(MIN_ROUNDS, MAX_ROUNDS);
        }
        if let Some(minutes) = config.minutes {
            self.duration = clamp_duration(
                Duration::from_secs(u64::from(minutes) * 60),
                MIN_AMRAP,
                MAX_AMRAP,
            );
        }
    }

    /// Adjusts a setting by `delta` steps, clamped to its limits.
    pub fn adjust(&mut self, field: SettingField, delta: i32) {
        match field {
            SettingField::Work => {
                self.work_duration = step_duration(
                    self.work_duration,
                    INTERVAL_STEP,
                    delta,
                    MIN_INTERVAL,
                    MAX_INTERVAL,
                );
            }
            SettingField::Rest => {
                self.rest_duration = step_duration(
                    self.rest_duration,
                    INTERVAL_STEP,
                    delta,
                    MIN_INTERVAL,
                    MAX_INTERVAL,
                );
            }
            SettingField::Rounds => {
                let rounds = i64::from(self.total_rounds) + i64::from(delta);
                let clamped = rounds.clamp(i64::from(MIN_ROUNDS), i64::from(MAX_ROUNDS));
                self.total_rounds = u32::try_from(clamped).unwrap_or(MIN_ROUNDS);
            }
            SettingField::Duration => {
                self.duration =
                    step_duration(self.duration, AMRAP_STEP, delta, MIN_AMRAP, MAX_AMRAP);
            }
        }
    }

    /// Advances the timer by one second and returns the emitted events.
    ///
    /// A paused timer ignores the tick. Clock and Stopwatch modes only
    /// accumulate elapsed time.
    pub fn tick(&mut self) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        if !self.running {
            return events;
        }

        match self.mode {
            Mode::Emom => emom::tick(self, &mut events),
            Mode::Tabata | Mode::Custom => interval::tick(self, &mut events),
            Mode::Amrap => amrap::tick(self, &mut events),
            Mode::Clock | Mode::Stopwatch => self.elapsed += TICK,
        }

        events
    }

    /// Returns the length of the interval currently counting down.
    pub fn interval_duration(&self) -> Duration {
        match self.mode {
            Mode::Emom => EMOM_INTERVAL,
            Mode::Tabata | Mode::Custom => self.phase_duration(),
            Mode::Amrap => self.duration,
            Mode::Clock | Mode::Stopwatch => Duration::ZERO,
        }
    }

    /// Returns the configured length of the current work or rest phase.
    pub fn phase_duration(&self) -> Duration {
        match self.phase {
            Phase::Rest => self.rest_duration,
            Phase::Work | Phase::Countdown => self.work_duration,
        }
    }

    /// Returns the time left in the current interval, never negative.
    pub fn time_remaining(&self) -> Duration {
        self.interval_duration().saturating_sub(self.elapsed)
    }

    /// Returns true once the workout has completed.
    pub fn is_finished(&self) -> bool {
        match self.mode {
            Mode::Amrap => self.elapsed >= self.duration,
            Mode::Emom | Mode::Tabata | Mode::Custom => self.round > self.total_rounds,
            Mode::Clock | Mode::Stopwatch => false,
        }
    }

    /// Returns AMRAP completion as a percentage in `[0, 100]`.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let percent = self.elapsed.as_secs_f64() / self.duration.as_secs_f64() * 100.0;
        percent.min(100.0)
    }

    /// Returns elapsed seconds in the current EMOM minute.
    pub fn seconds_in_minute(&self) -> u64 {
        self.elapsed.as_secs() % 60
    }

    /// Returns seconds remaining in the current EMOM minute.
    pub fn seconds_remaining_in_minute(&self) -> u64 {
        60 - self.seconds_in_minute()
    }

    /// Returns the nominal length of the whole workout.
    pub fn total_workout_duration(&self) -> Option<Duration> {
        match self.mode {
            Mode::Tabata | Mode::Custom => {
                Some((self.work_duration + self.rest_duration) * self.total_rounds)
            }
            Mode::Emom => Some(EMOM_INTERVAL * self.total_rounds),
            Mode::Amrap => Some(self.duration),
            Mode::Clock | Mode::Stopwatch => None,
        }
    }

    /// Summarizes the configured workout.
    pub fn plan(&self) -> WorkoutPlan {
        let interval = self.mode.is_interval();
        WorkoutPlan {
            mode: self.mode,
            work_seconds: interval.then(|| self.work_duration.as_secs()),
            rest_seconds: interval.then(|| self.rest_duration.as_secs()),
            rounds: self.mode.has_rounds().then_some(self.total_rounds),
            minutes: (self.mode == Mode::Amrap).then(|| self.duration.as_secs() / 60),
            total_seconds: self.total_workout_duration().map(|d| d.as_secs()),
        }
    }
}

/// Builds the 3-2-1 countdown event when `remaining` is inside the window.
fn countdown_tick(remaining: Duration) -> Option<TimerEvent> {
    (!remaining.is_zero() && remaining <= COUNTDOWN_WINDOW).then(|| TimerEvent::CountdownTick {
        seconds_remaining: remaining.as_secs(),
    })
}

/// Formats a duration as `MM:SS`; minutes are not wrapped at the hour.
pub fn format_minutes_seconds(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

fn clamp_duration(value: Duration, min: Duration, max: Duration) -> Duration {
    value.clamp(min, max)
}

/// Moves `value` by `delta` steps, then clamps.
fn step_duration(
    value: Duration,
    step: Duration,
    delta: i32,
    min: Duration,
    max: Duration,
) -> Duration {
    if delta >= 0 {
        clamp_duration(value + step * delta.unsigned_abs(), min, max)
    } else {
        clamp_duration(
            value.saturating_sub(step * delta.unsigned_abs()),
            min,
            max,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

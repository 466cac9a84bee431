//! Application controller.
//!
//! The controller drives the timer engines once per second, decides which
//! audio cues to play and translates user actions into state changes. It
//! holds no terminal or runtime state, so every behavior can be exercised
//! with a [`MockCuePlayer`](crate::sound::MockCuePlayer).

use tracing::{debug, info};

use crate::sound::{AudioCues, CuePlayer};
use crate::timer::{Stopwatch, Timer, TimerEvent, COUNTDOWN_WINDOW};
use crate::types::{Mode, Phase, SettingField, WorkoutConfig};

// ============================================================================
// AppStatus
// ============================================================================

/// What the application is currently showing or doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppStatus {
    /// Timer screen, timer running or ready to start
    #[default]
    Running,
    /// Setup screen of a configurable mode
    Setup,
    /// Timer screen, paused by the user
    Paused,
    /// Timer screen after the workout completed
    Finished,
}

// ============================================================================
// Action
// ============================================================================

/// A user operation, usually produced by the key map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    StartPause,
    Reset,
    SelectMode(Mode),
    StopwatchToggle,
    StopwatchReset,
    Increase,
    Decrease,
    PrevSetting,
    NextSetting,
    Confirm,
    ToggleSound,
}

// ============================================================================
// AppController
// ============================================================================

/// Owns the timer, the background stopwatch and the cue player.
#[derive(Debug)]
pub struct AppController<C: CuePlayer = AudioCues> {
    timer: Timer,
    stopwatch: Stopwatch,
    cues: C,
    status: AppStatus,
    setting_field: SettingField,
    /// Last countdown second a beep was played for, 0 when none.
    last_countdown_beep: u64,
    should_quit: bool,
}

impl<C: CuePlayer> AppController<C> {
    /// Creates a controller showing the wall clock.
    pub fn new(cues: C) -> Self {
        Self::with_timer(cues, Timer::for_mode(Mode::Clock))
    }

    /// Creates a controller for a preselected mode with overrides applied.
    ///
    /// Configurable modes open on their setup screen.
    pub fn with_workout(cues: C, mode: Mode, config: &WorkoutConfig) -> Self {
        let mut app = Self::new(cues);
        app.select_mode(mode);
        app.timer.apply_config(config);
        app
    }

    /// Creates a controller around an already configured timer.
    pub fn with_timer(cues: C, timer: Timer) -> Self {
        Self {
            timer,
            stopwatch: Stopwatch::new(),
            cues,
            status: AppStatus::Running,
            setting_field: SettingField::Work,
            last_countdown_beep: 0,
            should_quit: false,
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn cues(&self) -> &C {
        &self.cues
    }

    pub fn status(&self) -> AppStatus {
        self.status
    }

    pub fn setting_field(&self) -> SettingField {
        self.setting_field
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ------------------------------------------------------------------------
    // Tick handling
    // ------------------------------------------------------------------------

    /// Advances everything by one second.
    pub fn handle_tick(&mut self) {
        self.stopwatch.tick();

        if !self.timer.mode.is_countdown() || !self.timer.running {
            return;
        }

        // The remaining time before the tick decides the countdown beep;
        // one beep per distinct second.
        let remaining = self.timer.time_remaining().as_secs();
        if remaining > COUNTDOWN_WINDOW.as_secs() {
            self.last_countdown_beep = 0;
        } else if remaining > 0 && remaining != self.last_countdown_beep {
            self.cues.play_countdown(remaining);
            self.last_countdown_beep = remaining;
        }

        let events = self.timer.tick();

        for event in &events {
            if let TimerEvent::CountdownTick { seconds_remaining } = *event {
                if seconds_remaining > COUNTDOWN_WINDOW.as_secs() {
                    debug!(seconds_remaining, "One minute warning");
                    self.cues.play_countdown(seconds_remaining);
                }
            }
        }

        if self.timer.is_finished() {
            self.timer.pause();
            self.status = AppStatus::Finished;
            self.cues.play_finish();
            info!(mode = %self.timer.mode, "Workout finished");
            return;
        }

        for event in events {
            match event {
                TimerEvent::IntervalChange { phase } => {
                    debug!(%phase, round = self.timer.round, "Interval change");
                    self.cues.play_interval(phase == Phase::Work);
                }
                TimerEvent::RoundChange { round } => {
                    debug!(round, "Round change");
                }
                TimerEvent::CountdownTick { .. } => {}
            }
        }
    }

    // ------------------------------------------------------------------------
    // Action handling
    // ------------------------------------------------------------------------

    /// Applies a user action.
    pub fn handle_action(&mut self, action: Action) {
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }

        if self.status == AppStatus::Setup {
            self.handle_setup_action(action);
            return;
        }

        match action {
            Action::SelectMode(mode) => self.select_mode(mode),
            Action::StopwatchToggle => self.stopwatch.toggle(),
            Action::StopwatchReset => self.stopwatch.reset(),
            Action::StartPause => self.start_pause(),
            Action::Reset => self.reset(),
            Action::ToggleSound => {
                self.cues.toggle();
            }
            Action::Increase
            | Action::Decrease
            | Action::PrevSetting
            | Action::NextSetting
            | Action::Confirm
            | Action::Quit => {}
        }
    }

    fn handle_setup_action(&mut self, action: Action) {
        match action {
            Action::Confirm => {
                self.status = AppStatus::Running;
                debug!(plan = ?self.timer.plan(), "Setup confirmed");
            }
            Action::Increase => self.timer.adjust(self.setting_field, 1),
            Action::Decrease => self.timer.adjust(self.setting_field, -1),
            Action::NextSetting => self.cycle_setting(1),
            Action::PrevSetting => self.cycle_setting(-1),
            _ => {}
        }
    }

    fn select_mode(&mut self, mode: Mode) {
        self.timer.set_mode(mode);
        self.last_countdown_beep = 0;

        match mode.setting_fields().first() {
            Some(&field) => {
                self.status = AppStatus::Setup;
                self.setting_field = field;
            }
            None => self.status = AppStatus::Running,
        }

        info!(%mode, "Mode selected");
    }

    fn start_pause(&mut self) {
        if self.timer.mode == Mode::Stopwatch {
            self.stopwatch.toggle();
            return;
        }

        if self.status == AppStatus::Finished {
            self.timer.reset();
            self.last_countdown_beep = 0;
        }

        self.timer.toggle();
        self.status = if self.timer.running {
            AppStatus::Running
        } else {
            AppStatus::Paused
        };
    }

    fn reset(&mut self) {
        if self.timer.mode == Mode::Stopwatch {
            self.stopwatch.reset();
            return;
        }

        self.timer.reset();
        self.status = AppStatus::Running;
        self.last_countdown_beep = 0;
    }

    /// Moves the selected field through the mode's fields, wrapping around.
    fn cycle_setting(&mut self, step: isize) {
        let fields = self.timer.mode.setting_fields();
        let Some(current) = fields.iter().position(|f| *f == self.setting_field) else {
            return;
        };
        let len = fields.len() as isize;
        let next = (current as isize + step).rem_euclid(len);
        self.setting_field = fields[next as usize];
    }
}

// ============================================================================
// Tests
// ============================================================================

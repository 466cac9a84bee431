//! Interactive terminal session.
//!
//! Runs the controller on the current-thread runtime: a one-second ticker,
//! terminal input forwarded from a blocking reader thread, and Ctrl-C. The
//! screen is redrawn after every tick or input.

use std::io::{self, Stdout};
use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use super::controller::{Action, AppController};
use super::keys::KeyMap;
use crate::sound::{AudioCues, CuePlayer};
use crate::timer::TICK;
use crate::types::{Mode, WorkoutConfig};
use crate::ui::{self, Theme};

/// How long the input thread waits for an event before checking for
/// shutdown.
const INPUT_POLL: Duration = Duration::from_millis(100);

// ============================================================================
// RunOptions
// ============================================================================

/// Options for an interactive session.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Mode to open; the wall clock when unset
    pub mode: Option<Mode>,
    /// Overrides for the preselected mode
    pub config: WorkoutConfig,
    /// Whether audio cues start enabled
    pub sound: bool,
}

/// Runs the timer UI until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub async fn run(options: RunOptions) -> Result<()> {
    let cues = AudioCues::spawn(options.sound);
    let mut app = match options.mode {
        Some(mode) => AppController::with_workout(cues, mode, &options.config),
        None => AppController::new(cues),
    };

    let mut guard = TerminalGuard::enter().context("Failed to initialize terminal")?;

    let (tx, rx) = mpsc::unbounded_channel();
    let reader = spawn_input_reader(tx).context("Failed to start input reader")?;

    let result = event_loop(&mut guard.terminal, &mut app, rx).await;

    if reader.join().is_err() {
        warn!("Input reader panicked");
    }
    drop(guard);

    info!("Session ended");
    result
}

/// Drives `app` until it asks to quit or the input channel closes.
///
/// # Errors
///
/// Returns an error if drawing fails.
pub async fn event_loop<B, C>(
    terminal: &mut Terminal<B>,
    app: &mut AppController<C>,
    mut input: mpsc::UnboundedReceiver<Event>,
) -> Result<()>
where
    B: Backend,
    C: CuePlayer,
{
    let theme = Theme::default();
    let keys = KeyMap::new();

    let mut ticker = interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick completes immediately.
    ticker.tick().await;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    terminal
        .draw(|frame| ui::render(frame, app, &theme))
        .context("Failed to draw")?;

    loop {
        tokio::select! {
            _ = ticker.tick() => app.handle_tick(),
            event = input.recv() => match event {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = keys.action_for(&key) {
                        debug!(?action, "Key action");
                        app.handle_action(action);
                    }
                }
                Some(_) => {}
                None => {
                    debug!("Input channel closed");
                    break;
                }
            },
            _ = &mut ctrl_c => app.handle_action(Action::Quit),
        }

        if app.should_quit() {
            break;
        }

        terminal
            .draw(|frame| ui::render(frame, app, &theme))
            .context("Failed to draw")?;
    }

    Ok(())
}

/// Reads terminal events on a blocking thread until the receiver is gone.
fn spawn_input_reader(tx: mpsc::UnboundedSender<Event>) -> io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("gymtimer-input".to_string())
        .spawn(move || loop {
            match event::poll(INPUT_POLL) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => {
                    if tx.is_closed() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
        })
}

// ============================================================================
// TerminalGuard
// ============================================================================

/// Raw mode and the alternate screen, restored on drop.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut guard = Self {
            terminal: Terminal::new(CrosstermBackend::new(io::stdout()))?,
        };
        execute!(guard.terminal.backend_mut(), EnterAlternateScreen)?;
        guard.terminal.hide_cursor()?;
        guard.terminal.clear()?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to disable raw mode: {}", e);
        }
        if let Err(e) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            warn!("Failed to leave alternate screen: {}", e);
        }
        if let Err(e) = self.terminal.show_cursor() {
            warn!("Failed to show cursor: {}", e);
        }
    }
}

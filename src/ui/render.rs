//! Timer and setup screens.
//!
//! The screens are built as plain lists of [`Line`]s and then centered in the
//! terminal, so their content can be checked without a terminal.

use chrono::{Local, NaiveTime};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::digits::render_big_time;
use super::theme::Theme;
use crate::app::{AppController, AppStatus};
use crate::sound::CuePlayer;
use crate::timer::format_minutes_seconds;
use crate::types::{Mode, Phase, SettingField};

const MODE_SELECTOR: &str =
    "[1]Clock  [2]EMOM  [3]Tabata  [4]AMRAP  [5]Custom  [6]Stopwatch";

const SETUP_HELP: &str = "[Up/Down] Adjust  [Left/Right] Switch  [Enter] Start  [Q] Quit";

/// Draws the current screen, centered in the frame.
pub fn render<C: CuePlayer>(frame: &mut Frame, app: &AppController<C>, theme: &Theme) {
    let lines = match app.status() {
        AppStatus::Setup => setup_lines(app, theme),
        _ => timer_lines(app, theme, Local::now().time()),
    };

    let area = centered(frame.area(), lines.len());
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Returns a full-width band of `height` rows in the vertical middle of `area`.
fn centered(area: Rect, height: usize) -> Rect {
    let height = u16::try_from(height).unwrap_or(u16::MAX);
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    middle
}

/// Returns the big time text and its color.
///
/// `now` is the wall-clock time shown in Clock mode.
pub fn time_display<C: CuePlayer>(
    app: &AppController<C>,
    theme: &Theme,
    now: NaiveTime,
) -> (String, Color) {
    let timer = app.timer();
    let stopwatch = app.stopwatch();

    let (text, color) = match timer.mode {
        Mode::Clock => (now.format("%H:%M:%S").to_string(), theme.neutral),
        Mode::Emom | Mode::Amrap => (format_minutes_seconds(timer.time_remaining()), theme.work),
        Mode::Tabata | Mode::Custom => {
            let color = if timer.phase == Phase::Rest {
                theme.rest
            } else {
                theme.work
            };
            (format_minutes_seconds(timer.time_remaining()), color)
        }
        Mode::Stopwatch => {
            let color = if stopwatch.running {
                theme.work
            } else {
                theme.paused
            };
            (stopwatch.format(), color)
        }
    };

    let color = match app.status() {
        AppStatus::Finished => theme.finished,
        AppStatus::Paused if timer.mode != Mode::Stopwatch => theme.paused,
        _ => color,
    };

    (text, color)
}

/// Builds the timer screen.
pub fn timer_lines<C: CuePlayer>(
    app: &AppController<C>,
    theme: &Theme,
    now: NaiveTime,
) -> Vec<Line<'static>> {
    let timer = app.timer();
    let stopwatch = app.stopwatch();
    let on_stopwatch = timer.mode == Mode::Stopwatch;

    let mut lines = vec![
        Line::styled(format!("MODE: {}", timer.mode), theme.title()),
        Line::default(),
    ];

    let (text, color) = time_display(app, theme, now);
    lines.extend(
        render_big_time(&text)
            .into_iter()
            .map(|row| Line::styled(row, theme.digits(color))),
    );

    if timer.mode.is_interval() {
        let color = if timer.phase == Phase::Rest {
            theme.rest
        } else {
            theme.work
        };
        lines.push(Line::default());
        lines.push(Line::styled(timer.phase.to_string(), theme.phase(color)));
    }

    if timer.mode.has_rounds() {
        lines.push(Line::default());
        lines.push(Line::styled(
            format!(
                "Round {} of {}",
                timer.round.min(timer.total_rounds),
                timer.total_rounds
            ),
            theme.help(),
        ));
    }

    if !on_stopwatch && (stopwatch.running || !stopwatch.elapsed.is_zero()) {
        let (state, color) = if stopwatch.running {
            ("running", theme.work)
        } else {
            ("paused", theme.paused)
        };
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("SW: {} ({})", stopwatch.format(), state),
            Style::default().fg(color),
        ));
    }

    let status = if on_stopwatch {
        (!stopwatch.running && !stopwatch.elapsed.is_zero())
            .then(|| Line::styled("PAUSED", Style::default().fg(theme.paused)))
    } else {
        match app.status() {
            AppStatus::Paused => Some(Line::styled("PAUSED", Style::default().fg(theme.paused))),
            AppStatus::Finished => Some(Line::styled("FINISHED!", theme.phase(theme.finished))),
            AppStatus::Running | AppStatus::Setup => None,
        }
    };
    if let Some(status) = status {
        lines.push(status);
    }

    let sound = if app.cues().is_enabled() { "ON" } else { "OFF" };
    let help = if on_stopwatch {
        format!("[Space] Start/Pause  [R] Reset  [S] Sound: {}  [Q] Quit", sound)
    } else {
        format!(
            "[Space] Start/Pause  [R] Reset  [W] Stopwatch  [S] Sound: {}  [Q] Quit",
            sound
        )
    };

    lines.push(Line::default());
    lines.push(Line::styled(MODE_SELECTOR, theme.help()));
    lines.push(Line::styled(help, theme.help()));
    lines
}

/// Builds the setup screen of a configurable mode.
pub fn setup_lines<C: CuePlayer>(app: &AppController<C>, theme: &Theme) -> Vec<Line<'static>> {
    let timer = app.timer();

    let mut lines = vec![
        Line::styled(format!("SETUP: {}", timer.mode), theme.title()),
        Line::default(),
    ];

    for &field in timer.mode.setting_fields() {
        let text = match field {
            SettingField::Work => format!("Work: {}s", timer.work_duration.as_secs()),
            SettingField::Rest => format!("Rest: {}s", timer.rest_duration.as_secs()),
            SettingField::Rounds => format!("Rounds: {}", timer.total_rounds),
            SettingField::Duration => format!("Duration: {} min", timer.duration.as_secs() / 60),
        };
        lines.push(Line::styled(
            text,
            theme.setting(field == app.setting_field()),
        ));
    }

    lines.push(Line::default());
    lines.push(Line::styled(SETUP_HELP, theme.help()));
    lines
}

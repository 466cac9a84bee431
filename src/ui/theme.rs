//! Colors and text styles of the terminal UI.

use ratatui::style::{Color, Modifier, Style};

/// Color palette passed into every render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Work intervals and running timers
    pub work: Color,
    /// Rest intervals
    pub rest: Color,
    /// Paused timers
    pub paused: Color,
    /// Completed workouts
    pub finished: Color,
    /// Wall clock and plain text
    pub neutral: Color,
    /// Help lines and round counter
    pub dim: Color,
    /// Titles and the selected setting
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            work: Color::Rgb(0x00, 0xFF, 0x00),
            rest: Color::Rgb(0xFF, 0x66, 0x00),
            paused: Color::Rgb(0xFF, 0xFF, 0x00),
            finished: Color::Rgb(0xFF, 0x00, 0x00),
            neutral: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x66, 0x66, 0x66),
            accent: Color::Rgb(0x00, 0xCC, 0xFF),
        }
    }
}

impl Theme {
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style of the big digits in `color`.
    pub fn digits(&self, color: Color) -> Style {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn phase(&self, color: Color) -> Style {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn help(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn setting(&self, selected: bool) -> Style {
        if selected {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.neutral)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let theme = Theme::default();
        assert_eq!(theme.work, Color::Rgb(0, 255, 0));
        assert_eq!(theme.rest, Color::Rgb(255, 102, 0));
        assert_eq!(theme.accent, Color::Rgb(0, 204, 255));
    }

    #[test]
    fn test_selected_setting_is_highlighted() {
        let theme = Theme::default();
        assert_eq!(theme.setting(true).fg, Some(theme.accent));
        assert!(theme.setting(true).add_modifier.contains(Modifier::BOLD));
        assert_eq!(theme.setting(false).fg, Some(theme.neutral));
    }
}

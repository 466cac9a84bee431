//! Terminal presentation.
//!
//! Rendering reads the controller and never mutates it. Colors come from a
//! [`Theme`] value passed into every call.

mod digits;
mod render;
mod theme;

pub use digits::{glyph, render_big_time, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use render::{render, setup_lines, time_display, timer_lines};
pub use theme::Theme;

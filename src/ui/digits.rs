//! Block-letter font for the big time display.
//!
//! Every glyph is 7 rows of 5 columns; glyphs are joined with one blank
//! column after each.

/// Rows per glyph.
pub const GLYPH_HEIGHT: usize = 7;

/// Columns per glyph, without the separator.
pub const GLYPH_WIDTH: usize = 5;

const BLANK: [&str; GLYPH_HEIGHT] = ["     "; GLYPH_HEIGHT];

/// Returns the rows of `c`, or a blank glyph for unsupported characters.
pub fn glyph(c: char) -> [&'static str; GLYPH_HEIGHT] {
    match c {
        '0' => [" ███ ", "█   █", "█   █", "█   █", "█   █", "█   █", " ███ "],
        '1' => ["  █  ", " ██  ", "  █  ", "  █  ", "  █  ", "  █  ", " ███ "],
        '2' => [" ███ ", "█   █", "    █", "  ██ ", " █   ", "█    ", "█████"],
        '3' => [" ███ ", "█   █", "    █", "  ██ ", "    █", "█   █", " ███ "],
        '4' => ["█   █", "█   █", "█   █", "█████", "    █", "    █", "    █"],
        '5' => ["█████", "█    ", "█    ", "████ ", "    █", "█   █", " ███ "],
        '6' => [" ███ ", "█   █", "█    ", "████ ", "█   █", "█   █", " ███ "],
        '7' => ["█████", "    █", "   █ ", "  █  ", "  █  ", "  █  ", "  █  "],
        '8' => [" ███ ", "█   █", "█   █", " ███ ", "█   █", "█   █", " ███ "],
        '9' => [" ███ ", "█   █", "█   █", " ████", "    █", "█   █", " ███ "],
        ':' => ["     ", "  █  ", "  █  ", "     ", "  █  ", "  █  ", "     "],
        _ => BLANK,
    }
}

/// Renders `text` as [`GLYPH_HEIGHT`] rows of block characters.
pub fn render_big_time(text: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .map(|row| {
            text.chars().fold(String::new(), |mut line, c| {
                line.push_str(glyph(c)[row]);
                line.push(' ');
                line
            })
        })
        .collect()
}

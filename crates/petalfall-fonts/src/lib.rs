//! Block letter banners for the petalfall celebration screen.

/// Height of every glyph in lines.
pub const GLYPH_HEIGHT: usize = 7;

/// Letter Y
pub const LETTER_Y: [&str; 7] = [
    "██  ██",
    "██  ██",
    " ████ ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
];

/// Letter A
pub const LETTER_A: [&str; 7] = [
    " ████ ",
    "██  ██",
    "██  ██",
    "██████",
    "██  ██",
    "██  ██",
    "██  ██",
];

/// Letter L
pub const LETTER_L: [&str; 7] = [
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██████",
];

/// Letter O
pub const LETTER_O: [&str; 7] = [
    " ████ ",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    " ████ ",
];

/// Letter V
pub const LETTER_V: [&str; 7] = [
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    " ████ ",
    "  ██  ",
];

/// Letter E
pub const LETTER_E: [&str; 7] = [
    "██████",
    "██    ",
    "██    ",
    "█████ ",
    "██    ",
    "██    ",
    "██████",
];

/// Letter U
pub const LETTER_U: [&str; 7] = [
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    "██  ██",
    " ████ ",
];

/// Exclamation mark (7 lines tall, 2 chars wide)
pub const BANG: [&str; 7] = ["██", "██", "██", "██", "██", "  ", "██"];

/// Word gap (7 lines tall, 3 chars wide)
pub const SPACE: [&str; 7] = ["   ", "   ", "   ", "   ", "   ", "   ", "   "];

/// Look up the glyph for a character, ignoring case.
pub fn glyph(ch: char) -> Option<&'static [&'static str; 7]> {
    match ch.to_ascii_uppercase() {
        'Y' => Some(&LETTER_Y),
        'A' => Some(&LETTER_A),
        'L' => Some(&LETTER_L),
        'O' => Some(&LETTER_O),
        'V' => Some(&LETTER_V),
        'E' => Some(&LETTER_E),
        'U' => Some(&LETTER_U),
        '!' => Some(&BANG),
        ' ' => Some(&SPACE),
        _ => None,
    }
}

/// Build a block letter banner.
///
/// Returns `None` if `text` contains a character without a glyph, so the
/// caller can fall back to plain text.
pub fn build_banner(text: &str) -> Option<Vec<String>> {
    let glyphs = text.chars().map(glyph).collect::<Option<Vec<_>>>()?;

    let lines = (0..GLYPH_HEIGHT)
        .map(|row| {
            glyphs
                .iter()
                .map(|g| g[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    Some(lines)
}

/// Width in columns of the banner for `text`, if every character has a glyph.
pub fn banner_width(text: &str) -> Option<usize> {
    build_banner(text).map(|lines| {
        lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    })
}

//! Character constants for background animations.

/// Petal glyphs by size band (small, medium, large), two variants each.
pub const PETAL_CHARS: [[char; 2]; 3] = [['•', '°'], ['❀', '✾'], ['✿', '❁']];

/// Characters used for confetti pieces.
pub const CONFETTI_CHARS: &[char] = &['▪', '▫', '◆', '●', '▴', '■', '~', '*'];

/// Characters used for floating hearts.
pub const HEART_CHARS: &[char] = &['♥', '♡', '❤', '❥'];

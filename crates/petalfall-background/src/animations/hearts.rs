//! Floating hearts (stateless, computed from position and time only).

use petalfall_core::Intensity;
use ratatui::style::Color;

use crate::chars::HEART_CHARS;
use crate::color::hsl_to_rgb;

/// Percentage of columns carrying a heart.
fn column_density(intensity: Intensity) -> usize {
    match intensity {
        Intensity::Low => 2,
        Intensity::Medium => 4,
        Intensity::High => 6,
        Intensity::Celebration => 9,
    }
}

/// Render a floating heart at the given position, if one is there.
///
/// Each selected column carries one heart rising from the bottom edge and
/// fading as it nears the top.
pub fn render_heart(
    x: u16,
    y: u16,
    height: u16,
    elapsed_ms: u64,
    intensity: Intensity,
    init_seed: u64,
) -> Option<(char, Color)> {
    if height == 0 {
        return None;
    }

    // Mix column index with the per-run seed so layouts differ between runs
    let seed = (x as usize)
        .wrapping_mul(31)
        .wrapping_add(init_seed as usize)
        .wrapping_mul(2_654_435_761)
        >> 8;

    if seed % 100 >= column_density(intensity) {
        return None;
    }

    // Lanes are longer than the screen so hearts leave gaps between passes
    let lane = height as usize + 6;
    let ms_per_row = 180 + (seed % 5) as u64 * 60;
    let offset = ((elapsed_ms / ms_per_row) as usize).wrapping_add(seed) % lane;
    let heart_y = height as i64 - 1 - offset as i64;

    if heart_y != y as i64 {
        return None;
    }

    let ch = HEART_CHARS[(seed / 7) % HEART_CHARS.len()];
    let rise = 1.0 - y as f32 / height as f32;
    let lightness = 0.65 - rise * 0.3;
    let hue = 330.0 + (seed % 30) as f32;

    Some((ch, hsl_to_rgb(hue, 0.75, lightness)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_hearts(width: u16, height: u16, elapsed_ms: u64, intensity: Intensity) -> usize {
        (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .filter(|&(x, y)| render_heart(x, y, height, elapsed_ms, intensity, 42).is_some())
            .count()
    }

    #[test]
    fn test_at_most_one_heart_per_column() {
        let height = 30;
        for x in 0..200 {
            let hearts = (0..height)
                .filter(|&y| render_heart(x, y, height, 12_345, Intensity::Celebration, 42).is_some())
                .count();
            assert!(hearts <= 1);
        }
    }

    #[test]
    fn test_density_follows_intensity() {
        let columns = |intensity| {
            (0..2_000u16)
                .filter(|&x| {
                    (0..40).any(|y| render_heart(x, y, 40, 0, intensity, 42).is_some())
                })
                .count()
        };
        assert!(columns(Intensity::Low) < columns(Intensity::Celebration));
    }

    #[test]
    fn test_hearts_move_over_time() {
        let height = 20;
        let positions = |elapsed_ms| -> Vec<(u16, u16)> {
            (0..height)
                .flat_map(|y| (0..300u16).map(move |x| (x, y)))
                .filter(|&(x, y)| {
                    render_heart(x, y, height, elapsed_ms, Intensity::Celebration, 42).is_some()
                })
                .collect()
        };
        assert_ne!(positions(0), positions(2_000));
    }

    #[test]
    fn test_zero_height_renders_nothing() {
        assert_eq!(count_hearts(50, 0, 0, Intensity::Celebration), 0);
    }
}

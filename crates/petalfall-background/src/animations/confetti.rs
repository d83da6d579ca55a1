//! Confetti burst animation (stateful, one shot, replayable).

use rand::Rng;

use crate::canvas::Canvas;
use crate::chars::CONFETTI_CHARS;
use crate::color::hsl_to_rgb;

/// Pieces thrown per burst.
pub const CONFETTI_PIECES: usize = 60;

/// State for a single confetti piece.
#[derive(Debug, Clone)]
pub struct ConfettiPiece {
    /// Horizontal position as a fraction of the width.
    pub x: f32,
    /// Fall speed in screen heights per second.
    pub speed: f32,
    /// Seconds before the piece enters the screen.
    pub delay: f32,
    /// Horizontal flutter phase offset.
    pub drift_phase: f32,
    /// Hue in degrees.
    pub hue: f32,
    /// Index into [`CONFETTI_CHARS`].
    pub char_idx: usize,
}

/// A burst of confetti that falls once and can be replayed.
#[derive(Debug, Default)]
pub struct ConfettiBurst {
    pieces: Vec<ConfettiPiece>,
    started_ms: u64,
}

impl ConfettiBurst {
    pub fn new() -> Self {
        Self::default()
    }

    /// Throw a fresh burst starting at `now_ms`.
    pub fn restart(&mut self, now_ms: u64) {
        let mut rng = rand::thread_rng();
        self.pieces = (0..CONFETTI_PIECES)
            .map(|_| ConfettiPiece {
                x: rng.gen_range(0.0..1.0),
                speed: rng.gen_range(0.35..0.6),
                delay: rng.gen_range(0.0..0.6),
                drift_phase: rng.gen_range(0.0..1.0),
                hue: rng.gen_range(0.0..360.0),
                char_idx: rng.gen_range(0..CONFETTI_CHARS.len()),
            })
            .collect();
        self.started_ms = now_ms;
    }

    /// Pieces of the current burst.
    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    /// Whether any piece is still on screen at `now_ms`.
    pub fn is_active(&self, now_ms: u64) -> bool {
        let t = self.elapsed_secs(now_ms);
        self.pieces.iter().any(|p| (t - p.delay) * p.speed < 1.0)
    }

    /// Draw the pieces still falling.
    pub fn draw(&self, canvas: &mut Canvas, now_ms: u64) {
        let t = self.elapsed_secs(now_ms);
        let w = canvas.width() as f32;
        let h = canvas.height() as f32;

        for piece in &self.pieces {
            let local = t - piece.delay;
            if local < 0.0 {
                continue;
            }
            let fallen = local * piece.speed;
            if fallen >= 1.0 {
                continue;
            }

            // Flutter sideways while falling
            let drift = ((local + piece.drift_phase) * std::f32::consts::TAU).sin();
            let x = (piece.x * w + drift).round() as i32;
            let y = (fallen * h) as i32;

            let ch = CONFETTI_CHARS[piece.char_idx % CONFETTI_CHARS.len()];
            canvas.put(x, y, ch, hsl_to_rgb(piece.hue, 0.85, 0.6));
        }
    }

    fn elapsed_secs(&self, now_ms: u64) -> f32 {
        now_ms.saturating_sub(self.started_ms) as f32 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_until_restarted() {
        let burst = ConfettiBurst::new();
        assert!(burst.pieces().is_empty());
        assert!(!burst.is_active(0));
    }

    #[test]
    fn test_burst_falls_then_ends() {
        let mut burst = ConfettiBurst::new();
        burst.restart(1_000);
        assert_eq!(burst.pieces().len(), CONFETTI_PIECES);
        assert!(burst.is_active(1_000));

        let mut canvas = Canvas::new(80, 24);
        burst.draw(&mut canvas, 1_700);
        assert!(canvas.filled() > 0);

        // Slowest piece: 0.6 s delay, then 1 / 0.35 s of falling.
        assert!(!burst.is_active(1_000 + 3_600));
        let mut canvas = Canvas::new(80, 24);
        burst.draw(&mut canvas, 1_000 + 3_600);
        assert_eq!(canvas.filled(), 0);
    }

    #[test]
    fn test_restart_replaces_pieces() {
        let mut burst = ConfettiBurst::new();
        burst.restart(0);
        burst.restart(10_000);
        assert_eq!(burst.pieces().len(), CONFETTI_PIECES);
        assert!(burst.is_active(10_000));
    }
}

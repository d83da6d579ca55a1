//! Falling rose petals (stateful, regenerated per batch).

use petalfall_core::{Hsl, Intensity, MotionPreference, Petal};
use rand::Rng;

use crate::canvas::Canvas;
use crate::chars::PETAL_CHARS;
use crate::color::hsl_color;

/// Hue shared by every petal.
const PETAL_HUE: f32 = 346.0;

/// Fewest petals shown when motion is reduced.
const MIN_REDUCED_PETALS: usize = 6;

/// Columns a petal drifts to either side while falling.
const SWAY_COLUMNS: f32 = 1.5;

/// Number of petals in a batch for the given inputs.
pub fn batch_size(intensity: Intensity, enabled: bool, reduced_motion: bool) -> usize {
    if !enabled {
        return 0;
    }
    let base = intensity.base_count();
    if reduced_motion {
        (base / 6).max(MIN_REDUCED_PETALS)
    } else {
        base
    }
}

/// Generate a fresh batch of petals using the thread-local RNG.
pub fn generate(intensity: Intensity, enabled: bool, reduced_motion: bool) -> Vec<Petal> {
    generate_with(&mut rand::thread_rng(), intensity, enabled, reduced_motion)
}

/// Generate a fresh batch of petals from `rng`.
///
/// Disabled yields an empty batch. Under reduced motion petals get no delay
/// and no duration, which means they are drawn in place.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    intensity: Intensity,
    enabled: bool,
    reduced_motion: bool,
) -> Vec<Petal> {
    let count = batch_size(intensity, enabled, reduced_motion);

    (0..count)
        .map(|id| {
            let size = rng.gen_range(10.0..40.0);
            let left = rng.gen_range(0.0..100.0);
            let (delay, duration) = if reduced_motion {
                (0.0, 0.0)
            } else {
                (rng.gen_range(0.0..3.0), rng.gen_range(3.0..7.0))
            };
            Petal {
                id,
                left,
                delay,
                duration,
                size,
                rotation: rng.gen_range(0.0..360.0),
                color_a: Hsl::from_percent(PETAL_HUE, 85.0, rng.gen_range(28.0..46.0)),
                color_b: Hsl::from_percent(PETAL_HUE, 70.0, rng.gen_range(38.0..56.0)),
            }
        })
        .collect()
}

/// The current batch of petals and the inputs it was generated from.
#[derive(Debug, Default)]
pub struct PetalField {
    petals: Vec<Petal>,
    /// Intensity and enabled flag of the current batch.
    inputs: Option<(Intensity, bool)>,
    /// Time the current batch started, in milliseconds.
    started_ms: u64,
    /// Number of batches generated so far.
    generation: u64,
}

impl PetalField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Regenerate the batch if intensity or the enabled flag changed.
    ///
    /// The motion preference is only queried when a new batch is built.
    /// Returns true when the batch was replaced.
    pub fn sync(
        &mut self,
        intensity: Intensity,
        enabled: bool,
        motion: impl MotionPreference,
        now_ms: u64,
    ) -> bool {
        if self.inputs == Some((intensity, enabled)) {
            return false;
        }

        let reduced_motion = enabled && motion.prefers_reduced_motion();
        self.petals = generate(intensity, enabled, reduced_motion);
        self.inputs = Some((intensity, enabled));
        self.started_ms = now_ms;
        self.generation += 1;

        log::debug!(
            "petal batch {}: {} petals (intensity {intensity}, enabled {enabled}, reduced motion {reduced_motion})",
            self.generation,
            self.petals.len(),
        );
        true
    }

    /// Petals of the current batch.
    pub fn petals(&self) -> &[Petal] {
        &self.petals
    }

    /// Number of batches generated so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Draw every visible petal.
    pub fn draw(&self, canvas: &mut Canvas, now_ms: u64) {
        let t = now_ms.saturating_sub(self.started_ms) as f32 / 1000.0;
        for petal in &self.petals {
            if let Some(sprite) = petal_sprite(petal, t, canvas.width(), canvas.height()) {
                canvas.put(sprite.x, sprite.y, sprite.ch, hsl_color(sprite.color));
            }
        }
    }
}

/// Where and how a petal appears at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PetalSprite {
    pub x: i32,
    pub y: i32,
    pub ch: char,
    pub color: Hsl,
}

/// Place a petal `t` seconds after its batch started.
///
/// An animated petal is hidden before its delay elapses and after it has
/// landed. A still petal sits at its `left` column on a row picked from its
/// rotation.
pub fn petal_sprite(petal: &Petal, t: f32, width: u16, height: u16) -> Option<PetalSprite> {
    if width == 0 || height == 0 {
        return None;
    }
    let w = width as f32;
    let h = height as f32;
    let column = petal.left / 100.0 * w;

    let (x, y, progress) = if petal.is_animated() {
        let local = t - petal.delay;
        if local < 0.0 {
            return None;
        }
        let progress = local / petal.duration;
        if progress >= 1.0 {
            return None;
        }
        let sway = (local / petal.sway_period() * std::f32::consts::TAU).sin() * SWAY_COLUMNS;
        ((column + sway).round(), progress * h, progress)
    } else {
        (column, petal.rotation / 360.0 * h, 0.0)
    };

    Some(PetalSprite {
        x: (x as i32).clamp(0, width as i32 - 1),
        y: (y as i32).clamp(0, height as i32 - 1),
        ch: petal_char(petal),
        color: petal.color_a.lerp(petal.color_b, progress),
    })
}

fn petal_char(petal: &Petal) -> char {
    let band = if petal.size < 20.0 {
        0
    } else if petal.size < 30.0 {
        1
    } else {
        2
    };
    let variant = (petal.rotation / 180.0) as usize % 2;
    PETAL_CHARS[band][variant]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn petal(delay: f32, duration: f32) -> Petal {
        Petal {
            id: 0,
            left: 50.0,
            delay,
            duration,
            size: 35.0,
            rotation: 90.0,
            color_a: Hsl::from_percent(PETAL_HUE, 85.0, 30.0),
            color_b: Hsl::from_percent(PETAL_HUE, 70.0, 50.0),
        }
    }

    #[test]
    fn test_disabled_yields_empty_batch() {
        for intensity in Intensity::ALL {
            assert!(generate(intensity, false, false).is_empty());
            assert!(generate(intensity, false, true).is_empty());
        }
    }

    #[test]
    fn test_full_motion_counts() {
        let counts: Vec<usize> = Intensity::ALL
            .iter()
            .map(|&i| generate(i, true, false).len())
            .collect();
        assert_eq!(counts, vec![8, 20, 40, 80]);
    }

    #[test]
    fn test_reduced_motion_counts() {
        let counts: Vec<usize> = Intensity::ALL
            .iter()
            .map(|&i| generate(i, true, true).len())
            .collect();
        assert_eq!(counts, vec![6, 6, 6, 13]);
    }

    #[test]
    fn test_ids_follow_generation_order() {
        let petals = generate(Intensity::Medium, true, false);
        assert!(petals.iter().enumerate().all(|(i, p)| p.id == i));
    }

    #[test]
    fn test_ranges_hold() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            for petal in generate_with(&mut rng, Intensity::Celebration, true, false) {
                assert!((0.0..100.0).contains(&petal.left));
                assert!((10.0..40.0).contains(&petal.size));
                assert!((0.0..360.0).contains(&petal.rotation));
                assert!((0.0..3.0).contains(&petal.delay));
                assert!((3.0..7.0).contains(&petal.duration));
                assert_eq!(petal.color_a.hue, PETAL_HUE);
                assert_eq!(petal.color_b.hue, PETAL_HUE);
                assert!((0.28..0.46).contains(&petal.color_a.lightness));
                assert!((0.38..0.56).contains(&petal.color_b.lightness));
            }
        }
    }

    #[test]
    fn test_reduced_motion_petals_stand_still() {
        for intensity in Intensity::ALL {
            for petal in generate(intensity, true, true) {
                assert_eq!(petal.delay, 0.0);
                assert_eq!(petal.duration, 0.0);
                assert!(!petal.is_animated());
            }
        }
    }

    #[test]
    fn test_repeated_generation_is_independent() {
        let first = generate(Intensity::High, true, false);
        let second = generate(Intensity::High, true, false);
        assert_eq!(first.len(), 40);
        assert_eq!(second.len(), 40);
        assert_ne!(first, second);
    }

    #[test]
    fn test_field_regenerates_only_on_input_change() {
        let mut field = PetalField::new();
        assert!(field.sync(Intensity::Low, true, false, 0));
        assert_eq!(field.petals().len(), 8);
        assert!(!field.sync(Intensity::Low, true, false, 100));
        assert_eq!(field.generation(), 1);

        assert!(field.sync(Intensity::High, true, false, 200));
        assert_eq!(field.petals().len(), 40);

        assert!(field.sync(Intensity::High, false, false, 300));
        assert!(field.petals().is_empty());
        assert_eq!(field.generation(), 3);
    }

    #[test]
    fn test_field_queries_motion_per_batch() {
        let mut field = PetalField::new();
        field.sync(Intensity::Celebration, true, true, 0);
        assert_eq!(field.petals().len(), 13);
        // Unchanged inputs keep the batch even if the motion signal changes.
        field.sync(Intensity::Celebration, true, false, 10);
        assert_eq!(field.petals().len(), 13);
        field.sync(Intensity::Low, true, false, 20);
        assert_eq!(field.petals().len(), 8);
    }

    #[test]
    fn test_sprite_hidden_before_delay_and_after_landing() {
        let p = petal(1.0, 4.0);
        assert!(petal_sprite(&p, 0.5, 80, 20).is_none());
        assert!(petal_sprite(&p, 5.0, 80, 20).is_none());

        let falling = petal_sprite(&p, 3.0, 80, 20).unwrap();
        assert_eq!(falling.y, 10);
        assert!((falling.x - 40).abs() <= 2);
        assert_eq!(falling.ch, '✿');
    }

    #[test]
    fn test_still_petal_drawn_in_place() {
        let p = petal(0.0, 0.0);
        let sprite = petal_sprite(&p, 100.0, 80, 20).unwrap();
        assert_eq!((sprite.x, sprite.y), (40, 5));
        assert_eq!(sprite.color, p.color_a);
    }

    #[test]
    fn test_sprite_stays_on_screen() {
        let mut p = petal(0.0, 5.0);
        p.left = 99.9;
        let sprite = petal_sprite(&p, 0.4, 10, 4).unwrap();
        assert!((0..10).contains(&sprite.x));
        assert!(petal_sprite(&p, 1.0, 0, 4).is_none());
    }

    #[test]
    fn test_field_draws_visible_petals() {
        let mut field = PetalField::new();
        field.sync(Intensity::Low, true, true, 0);
        let mut canvas = Canvas::new(100, 30);
        field.draw(&mut canvas, 0);
        assert!(canvas.filled() >= 1);
    }
}

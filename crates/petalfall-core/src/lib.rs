//! Core types shared by the petalfall crates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How many petals a celebration throws at the screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
    #[default]
    Celebration,
}

impl Intensity {
    /// All intensity levels, in cycling order.
    pub const ALL: [Intensity; 4] = [
        Intensity::Low,
        Intensity::Medium,
        Intensity::High,
        Intensity::Celebration,
    ];

    /// Number of petals in a full-motion batch.
    pub const fn base_count(self) -> usize {
        match self {
            Intensity::Low => 8,
            Intensity::Medium => 20,
            Intensity::High => 40,
            Intensity::Celebration => 80,
        }
    }

    /// Cycle to the next intensity level.
    pub fn next(self) -> Self {
        match self {
            Intensity::Low => Intensity::Medium,
            Intensity::Medium => Intensity::High,
            Intensity::High => Intensity::Celebration,
            Intensity::Celebration => Intensity::Low,
        }
    }

    /// Lowercase display name, as used on the command line and in config.
    pub const fn name(self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
            Intensity::Celebration => "celebration",
        }
    }

    /// Parse a lowercase level name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hue/saturation/lightness colour.
///
/// Hue is in degrees, saturation and lightness are fractions in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    /// Build a colour from CSS-style percentages.
    pub fn from_percent(hue: f32, saturation_pct: f32, lightness_pct: f32) -> Self {
        Self {
            hue,
            saturation: saturation_pct / 100.0,
            lightness: lightness_pct / 100.0,
        }
    }

    /// Linear blend towards `other`; `t` is clamped to `0.0..=1.0`.
    pub fn lerp(self, other: Hsl, t: f32) -> Hsl {
        let t = t.clamp(0.0, 1.0);
        Hsl {
            hue: self.hue + (other.hue - self.hue) * t,
            saturation: self.saturation + (other.saturation - self.saturation) * t,
            lightness: self.lightness + (other.lightness - self.lightness) * t,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({} {}% {:.1}%)",
            self.hue,
            (self.saturation * 100.0).round(),
            self.lightness * 100.0
        )
    }
}

/// One falling rose petal.
///
/// Petals only live for one batch; a new batch replaces the old one wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Petal {
    /// Index within its batch.
    pub id: usize,
    /// Horizontal position as a percentage of the screen width, `0.0..100.0`.
    pub left: f32,
    /// Seconds before the petal starts falling.
    pub delay: f32,
    /// Seconds the fall takes. Zero means the petal does not move.
    pub duration: f32,
    /// Petal size, `10.0..40.0`.
    pub size: f32,
    /// Rotation in degrees, `0.0..360.0`.
    pub rotation: f32,
    /// Gradient start colour.
    pub color_a: Hsl,
    /// Gradient end colour.
    pub color_b: Hsl,
}

impl Petal {
    /// Whether this petal falls at all.
    pub fn is_animated(&self) -> bool {
        self.duration > 0.0
    }

    /// Period of the side-to-side sway in seconds.
    pub fn sway_period(&self) -> f32 {
        1.6 + (self.id % 4) as f32 * 0.6
    }
}

/// Source of the "minimize animation" accessibility signal.
///
/// Implementations are polled on demand; no change notification is expected.
pub trait MotionPreference {
    /// Returns true when animation should be kept to a minimum.
    fn prefers_reduced_motion(&self) -> bool;
}

impl MotionPreference for bool {
    fn prefers_reduced_motion(&self) -> bool {
        *self
    }
}

impl<T: MotionPreference + ?Sized> MotionPreference for &T {
    fn prefers_reduced_motion(&self) -> bool {
        (**self).prefers_reduced_motion()
    }
}

//! Background animation state management.

use petalfall_core::{Intensity, MotionPreference};
use ratatui::{Frame, widgets::Paragraph};

use crate::animations::{confetti::ConfettiBurst, hearts, petals::PetalField};
use crate::canvas::Canvas;

/// What the background should show this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    /// Intensity of petals and hearts.
    pub intensity: Intensity,
    /// Whether the petals switch is on.
    pub petals_enabled: bool,
    /// Whether the confetti burst is currently shown.
    pub confetti_visible: bool,
    /// Whether to draw floating hearts.
    pub hearts: bool,
    /// Freeze the hearts and hide confetti.
    pub reduced_motion: bool,
}

/// Background animation state.
#[derive(Debug)]
pub struct BackgroundState {
    /// Current petal batch.
    petals: PetalField,
    /// Current confetti burst.
    confetti: ConfettiBurst,
    /// Seed captured at initialization for heart placement.
    init_seed: u64,
}

impl Default for BackgroundState {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundState {
    /// Create a new background state.
    pub fn new() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        // Capture system time as seed for randomness
        let init_seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        Self {
            petals: PetalField::new(),
            confetti: ConfettiBurst::new(),
            init_seed,
        }
    }

    /// Regenerate petals if the scene's intensity or switch changed.
    ///
    /// Returns true when a new batch was generated.
    pub fn sync_petals(
        &mut self,
        scene: &Scene,
        motion: impl MotionPreference,
        elapsed_ms: u64,
    ) -> bool {
        self.petals
            .sync(scene.intensity, scene.petals_enabled, motion, elapsed_ms)
    }

    /// Throw a fresh confetti burst.
    pub fn replay_confetti(&mut self, elapsed_ms: u64) {
        self.confetti.restart(elapsed_ms);
    }

    /// The petal field, for inspection.
    pub fn petals(&self) -> &PetalField {
        &self.petals
    }

    /// Draw all layers into a canvas of the given size.
    pub fn paint(&self, width: u16, height: u16, scene: &Scene, elapsed_ms: u64) -> Canvas {
        let mut canvas = Canvas::new(width, height);

        if scene.hearts {
            let hearts_ms = if scene.reduced_motion { 0 } else { elapsed_ms };
            for y in 0..height {
                for x in 0..width {
                    if let Some((ch, color)) = hearts::render_heart(
                        x,
                        y,
                        height,
                        hearts_ms,
                        scene.intensity,
                        self.init_seed,
                    ) {
                        canvas.put(x as i32, y as i32, ch, color);
                    }
                }
            }
        }

        if scene.confetti_visible && !scene.reduced_motion {
            self.confetti.draw(&mut canvas, elapsed_ms);
        }

        if scene.petals_enabled {
            self.petals.draw(&mut canvas, elapsed_ms);
        }

        canvas
    }

    /// Render the background to the frame.
    pub fn render(&self, frame: &mut Frame, scene: &Scene, elapsed_ms: u64) {
        let area = frame.area();
        let canvas = self.paint(area.width, area.height, scene, elapsed_ms);
        frame.render_widget(Paragraph::new(canvas.into_lines()), area);
    }
}

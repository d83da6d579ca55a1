//! Background animation rendering for the petalfall celebration screen.
//!
//! This crate provides the animated layers drawn behind the celebration card:
//! floating hearts (stateless, computed from position/time), a replayable
//! confetti burst, and batches of falling rose petals. Petal batches are
//! produced by a pure generator and replaced wholesale by [`PetalField`]
//! whenever the intensity or the petals switch changes.

mod animations;
mod canvas;
mod chars;
mod color;
mod state;

pub use animations::confetti::{CONFETTI_PIECES, ConfettiBurst, ConfettiPiece};
pub use animations::hearts::render_heart;
pub use animations::petals::{
    PetalField, PetalSprite, batch_size, generate, generate_with, petal_sprite,
};
pub use canvas::Canvas;
pub use color::{hsl_color, hsl_to_rgb};
pub use state::{BackgroundState, Scene};

//! Animation layers, drawn back to front: hearts, confetti, petals.

pub mod confetti;
pub mod hearts;
pub mod petals;

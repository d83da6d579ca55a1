//! Configuration and preference persistence for petalfall.
//!
//! The configuration file is read once at startup. The petals preference is a
//! single boolean persisted through a best-effort [`PreferenceStore`]; the
//! [`PetalToggle`] controller swallows every storage failure.

mod config;
mod error;
mod motion;
mod store;
mod toggle;

pub use config::{Config, project_dirs};
pub use error::Error;
pub use motion::EnvMotionPreference;
pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use toggle::{PETALS_ENABLED_KEY, PetalToggle};

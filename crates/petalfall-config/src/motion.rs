//! Reduced-motion signal read from the environment.

use std::env;

use petalfall_core::MotionPreference;

/// Environment variables consulted, in order.
const MOTION_VARS: [&str; 2] = ["PETALFALL_REDUCED_MOTION", "REDUCE_MOTION"];

/// Reads the reduced-motion signal from an explicit override or the environment.
///
/// The environment is read on every call; nothing is cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvMotionPreference {
    override_value: Option<bool>,
}

impl EnvMotionPreference {
    /// Read from the environment only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `value` when set, the environment otherwise.
    pub fn with_override(value: Option<bool>) -> Self {
        Self {
            override_value: value,
        }
    }
}

impl MotionPreference for EnvMotionPreference {
    fn prefers_reduced_motion(&self) -> bool {
        if let Some(value) = self.override_value {
            return value;
        }
        MOTION_VARS
            .iter()
            .find_map(|name| env::var(name).ok())
            .is_some_and(|value| is_truthy(&value))
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "reduce"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_values() {
        for value in ["1", "true", "YES", " on ", "reduce"] {
            assert!(is_truthy(value), "{value}");
        }
        for value in ["", "0", "false", "no-preference"] {
            assert!(!is_truthy(value), "{value}");
        }
    }

    #[test]
    fn test_override_wins() {
        assert!(EnvMotionPreference::with_override(Some(true)).prefers_reduced_motion());
        assert!(!EnvMotionPreference::with_override(Some(false)).prefers_reduced_motion());
    }
}

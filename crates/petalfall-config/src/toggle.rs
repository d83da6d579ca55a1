//! The petals on/off switch and its persisted preference.

use petalfall_core::MotionPreference;

use crate::error::Error;
use crate::store::PreferenceStore;

/// Key the petals preference is stored under.
pub const PETALS_ENABLED_KEY: &str = "petalsEnabled";

/// Holds whether petals are shown and persists every change.
///
/// Storage is best effort: failures are logged at debug level and otherwise
/// ignored, and the in-memory state stays authoritative.
#[derive(Debug)]
pub struct PetalToggle<S> {
    enabled: bool,
    store: S,
}

impl<S: PreferenceStore> PetalToggle<S> {
    /// Resolve the starting state.
    ///
    /// A stored preference wins, including an explicit `false`. Without one,
    /// petals start disabled when reduced motion is requested and enabled
    /// otherwise. The resolved value is written back.
    pub fn init(store: S, motion: impl MotionPreference) -> Self {
        let enabled = match read_preference(&store) {
            Ok(Some(stored)) => stored,
            Ok(None) => !motion.prefers_reduced_motion(),
            Err(err) => {
                log::debug!("ignoring unreadable petals preference: {err}");
                !motion.prefers_reduced_motion()
            }
        };

        let mut toggle = Self { enabled, store };
        toggle.persist();
        toggle
    }

    /// Whether petals are currently enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the switch. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.persist();
        self.enabled
    }

    /// Set the switch, persisting only when the value changes.
    pub fn set(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.persist();
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) {
        let value = if self.enabled { "true" } else { "false" };
        if let Err(err) = self.store.set(PETALS_ENABLED_KEY, value) {
            log::debug!("could not persist petals preference: {err}");
        }
    }
}

/// Read and decode the stored preference.
fn read_preference(store: &impl PreferenceStore) -> Result<Option<bool>, Error> {
    let Some(value) = store.get(PETALS_ENABLED_KEY)? else {
        return Ok(None);
    };
    serde_json::from_str::<bool>(&value)
        .map(Some)
        .map_err(|source| Error::InvalidValue {
            key: PETALS_ENABLED_KEY.to_owned(),
            value,
            source,
        })
}

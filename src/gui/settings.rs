use serde::{
    Deserialize,
    Serialize,
};

/// UI preferences persisted across launches. Care records are never part of
/// this; a session starts empty every time.
#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

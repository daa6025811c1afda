use serde::{Deserialize, Serialize};

/// Height assumed when nothing has been configured.
pub const DEFAULT_HEIGHT_INCHES: f64 = 72.0;

/// User-configurable settings consumed by the analytics layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Height in inches, used by the imperial BMI formula
    pub height_inches: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            height_inches: DEFAULT_HEIGHT_INCHES,
        }
    }
}

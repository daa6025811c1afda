use serde::{Deserialize, Serialize};

/// Trend statistics for one selected window of the log.
///
/// Derived purely from the window — recomputed on every range change and
/// never persisted. `Default` is the neutral all-zero record returned for
/// an empty window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendStats {
    /// Weight of the earliest entry in the window
    pub start_weight: f64,

    /// Weight of the latest entry in the window
    pub end_weight: f64,

    /// Highest weight observed
    pub max_weight: f64,

    /// Lowest weight observed
    pub min_weight: f64,

    /// Day the maximum was first reached, canonical text (empty when unset)
    pub date_of_max: String,

    /// Day the minimum was first reached, canonical text (empty when unset)
    pub date_of_min: String,

    /// start − end when the window ended lighter, else 0
    pub net_loss: f64,

    /// end − start when the window ended heavier, else 0
    pub net_gain: f64,

    /// max − min when the high came before the low, else 0
    pub max_to_min_loss: f64,

    /// max − min when the low came before the high, else 0
    pub min_to_max_gain: f64,

    /// BMI at the starting weight
    pub bmi_at_start: f64,

    /// BMI at the ending weight
    pub bmi_at_end: f64,

    /// BMI at the maximum weight
    pub bmi_at_max: f64,

    /// BMI at the minimum weight
    pub bmi_at_min: f64,
}

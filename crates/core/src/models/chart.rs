use serde::{Deserialize, Serialize};

/// Chart-ready series for one selected window.
///
/// The core computes the arrays — the frontend only renders. Labels and
/// weights are parallel, ascending by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// X axis: canonical date text
    pub labels: Vec<String>,

    /// Y axis: pounds, parallel to `labels`
    pub weights: Vec<f64>,
}

impl ChartSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

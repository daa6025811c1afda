use crate::dates;
use crate::models::entry::WeightEntry;
use crate::models::stats::TrendStats;

/// Multiplier of the imperial BMI formula (pounds and inches).
const BMI_IMPERIAL_FACTOR: f64 = 703.0;

/// Derives [`TrendStats`] from one chronologically ascending window.
///
/// Pure function of its input — no clock, no retained state between calls.
/// The ascending-order precondition is trusted, not re-verified: an
/// unordered input yields self-consistent but wrong direction fields.
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    /// Compute summary statistics for `ordered` (earliest entry first).
    ///
    /// An empty window yields the neutral all-zero record — "no entries in
    /// range" is an empty state, not an error.
    #[must_use]
    pub fn compute(&self, ordered: &[WeightEntry], height_inches: f64) -> TrendStats {
        let (Some(first), Some(last)) = (ordered.first(), ordered.last()) else {
            return TrendStats::default();
        };

        let start_weight = first.weight_lbs;
        let end_weight = last.weight_lbs;

        // Strict comparisons keep the earliest entry on ties, so a flat
        // series anchors both extrema on its first date.
        let mut max_weight = first.weight_lbs;
        let mut date_of_max = first.date.clone();
        let mut min_weight = first.weight_lbs;
        let mut date_of_min = first.date.clone();
        for entry in &ordered[1..] {
            if entry.weight_lbs > max_weight {
                max_weight = entry.weight_lbs;
                date_of_max = entry.date.clone();
            }
            if entry.weight_lbs < min_weight {
                min_weight = entry.weight_lbs;
                date_of_min = entry.date.clone();
            }
        }

        let net_gain = if end_weight > start_weight {
            end_weight - start_weight
        } else {
            0.0
        };
        let net_loss = if start_weight > end_weight {
            start_weight - end_weight
        } else {
            0.0
        };

        // Direction comes from the chronological order of the two extremum
        // anchors, not from their magnitudes. Anchors on the same day leave
        // both amounts at zero.
        let spread = max_weight - min_weight;
        let max_to_min_loss = if dates::before(date_of_max.as_str(), date_of_min.as_str()) {
            spread
        } else {
            0.0
        };
        let min_to_max_gain = if dates::after(date_of_max.as_str(), date_of_min.as_str()) {
            spread
        } else {
            0.0
        };

        TrendStats {
            start_weight,
            end_weight,
            max_weight,
            min_weight,
            date_of_max,
            date_of_min,
            net_loss,
            net_gain,
            max_to_min_loss,
            min_to_max_gain,
            bmi_at_start: Self::bmi(start_weight, height_inches),
            bmi_at_end: Self::bmi(end_weight, height_inches),
            bmi_at_max: Self::bmi(max_weight, height_inches),
            bmi_at_min: Self::bmi(min_weight, height_inches),
        }
    }

    /// Imperial BMI: `weight(lbs) × 703 / height(in)²`.
    #[must_use]
    pub fn bmi(weight_lbs: f64, height_inches: f64) -> f64 {
        weight_lbs * BMI_IMPERIAL_FACTOR / (height_inches * height_inches)
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}

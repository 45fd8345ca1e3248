//! Tunable thresholds shared by the analysis services.

use super::consistency::CONSISTENCY_THRESHOLD;

/// Tolerance for the criteria weight-sum sanity guard.
///
/// Weights come out of normalization summing to 1; drift beyond this is
/// logged as a warning but never interrupts a synthesis.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Tunable thresholds for an analysis run.
///
/// Defaults to the published constants; collaborators can override via
/// configuration (see `config::AnalysisConfig`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisOptions {
    /// CR below this counts as acceptably consistent.
    pub consistency_threshold: f64,
    /// Permitted drift of the criteria weight sum from 1.
    pub weight_sum_tolerance: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            consistency_threshold: CONSISTENCY_THRESHOLD,
            weight_sum_tolerance: WEIGHT_SUM_TOLERANCE,
        }
    }
}

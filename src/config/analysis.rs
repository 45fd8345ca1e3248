//! Analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{AnalysisOptions, CONSISTENCY_THRESHOLD, WEIGHT_SUM_TOLERANCE};

/// Analysis configuration
///
/// Overrides for the published analysis thresholds. Absent values fall
/// back to the library constants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisConfig {
    /// CR below this counts as acceptably consistent
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Permitted drift of the criteria weight sum from 1
    #[serde(default = "default_weight_sum_tolerance")]
    pub weight_sum_tolerance: f64,
}

impl AnalysisConfig {
    /// Convert into the options struct the analysis services consume
    pub fn options(&self) -> AnalysisOptions {
        AnalysisOptions {
            consistency_threshold: self.consistency_threshold,
            weight_sum_tolerance: self.weight_sum_tolerance,
        }
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.consistency_threshold.is_finite()
            || self.consistency_threshold <= 0.0
            || self.consistency_threshold > 1.0
        {
            return Err(ValidationError::InvalidConsistencyThreshold);
        }
        if !self.weight_sum_tolerance.is_finite()
            || self.weight_sum_tolerance <= 0.0
            || self.weight_sum_tolerance >= 0.1
        {
            return Err(ValidationError::InvalidWeightSumTolerance);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: default_consistency_threshold(),
            weight_sum_tolerance: default_weight_sum_tolerance(),
        }
    }
}

fn default_consistency_threshold() -> f64 {
    CONSISTENCY_THRESHOLD
}

fn default_weight_sum_tolerance() -> f64 {
    WEIGHT_SUM_TOLERANCE
}

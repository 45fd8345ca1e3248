//! Three-Level Synthesizer - classic goal → criteria → alternatives AHP.

use tracing::{debug, warn};

use super::{
    AnalysisOptions, ComparisonMatrix, ConsistencyRecord, LevelReport, MatrixAnalyzer,
    MatrixReport, RankedAlternative, SynthesisResult,
};
use crate::domain::foundation::AnalysisError;

/// Synthesizes one criteria matrix and one alternative matrix per
/// criterion into global alternative priorities.
///
/// Retained for flat {criteria, alternatives} input; the computation is
/// the two-level case of [`super::HierarchySynthesizer`] and must stay
/// numerically identical to it.
pub struct Synthesizer;

impl Synthesizer {
    /// Synthesizes with the default thresholds.
    pub fn synthesize(
        criteria: &[String],
        alternatives: &[String],
        criteria_matrix: &ComparisonMatrix,
        alternative_matrices: &[ComparisonMatrix],
    ) -> Result<SynthesisResult, AnalysisError> {
        Self::synthesize_with(
            criteria,
            alternatives,
            criteria_matrix,
            alternative_matrices,
            &AnalysisOptions::default(),
        )
    }

    /// Synthesizes with caller-supplied thresholds.
    ///
    /// # Errors
    ///
    /// Fails fast before any computation:
    /// - `Structural` for empty criteria/alternative lists or a matrix
    ///   count that does not match the criteria count.
    /// - `DimensionMismatch` for any matrix sized against the wrong
    ///   item count.
    pub fn synthesize_with(
        criteria: &[String],
        alternatives: &[String],
        criteria_matrix: &ComparisonMatrix,
        alternative_matrices: &[ComparisonMatrix],
        options: &AnalysisOptions,
    ) -> Result<SynthesisResult, AnalysisError> {
        if criteria.is_empty() {
            return Err(AnalysisError::structural("criteria list is empty"));
        }
        if alternatives.is_empty() {
            return Err(AnalysisError::structural("alternatives list is empty"));
        }
        if criteria_matrix.n() != criteria.len() {
            return Err(AnalysisError::dimension_mismatch(
                "criteria",
                criteria.len(),
                criteria_matrix.n(),
            ));
        }
        if alternative_matrices.len() != criteria.len() {
            return Err(AnalysisError::structural(format!(
                "expected one alternative matrix per criterion: {} criteria, got {} matrices",
                criteria.len(),
                alternative_matrices.len()
            )));
        }
        for (index, matrix) in alternative_matrices.iter().enumerate() {
            if matrix.n() != alternatives.len() {
                return Err(AnalysisError::dimension_mismatch(
                    format!("alternatives under criterion {} ({})", index, criteria[index]),
                    alternatives.len(),
                    matrix.n(),
                ));
            }
        }

        debug!(
            "Synthesizing {} criteria x {} alternatives",
            criteria.len(),
            alternatives.len()
        );

        let criteria_analysis = MatrixAnalyzer::analyze_with(criteria_matrix, options);
        let weights = criteria_analysis.priorities.clone();

        let weight_sum: f64 = weights.iter().sum();
        if (weight_sum - 1.0).abs() > options.weight_sum_tolerance {
            warn!(
                "Criteria weights sum to {} rather than 1; proceeding with synthesis",
                weight_sum
            );
        }

        let alternative_analyses: Vec<_> = alternative_matrices
            .iter()
            .map(|matrix| MatrixAnalyzer::analyze_with(matrix, options))
            .collect();

        let mut globals = vec![0.0; alternatives.len()];
        for (weight, analysis) in weights.iter().zip(&alternative_analyses) {
            for (global, local) in globals.iter_mut().zip(&analysis.priorities) {
                *global += weight * local;
            }
        }

        let levels = vec![
            LevelReport {
                level_name: "Criteria".to_string(),
                items: criteria.to_vec(),
                global_priorities: weights.clone(),
                matrices: vec![MatrixReport {
                    parent: None,
                    analysis: criteria_analysis.clone(),
                }],
            },
            LevelReport {
                level_name: "Alternatives".to_string(),
                items: alternatives.to_vec(),
                global_priorities: globals.clone(),
                matrices: alternative_analyses
                    .into_iter()
                    .zip(criteria)
                    .map(|(analysis, criterion)| MatrixReport {
                        parent: Some(criterion.clone()),
                        analysis,
                    })
                    .collect(),
            },
        ];

        let consistency_roster = ConsistencyRecord::roster_for(&levels);

        Ok(SynthesisResult {
            rankings: RankedAlternative::rank_all(alternatives, &globals),
            criteria_weights: weights,
            overall_consistency: criteria_analysis.consistency,
            levels,
            consistency_roster,
        })
    }
}

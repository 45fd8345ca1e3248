//! Single-Matrix Analyzer - priorities plus consistency in one pass.

use serde::{Deserialize, Serialize};

use super::{
    AnalysisOptions, ComparisonMatrix, ConsistencyEvaluator, ConsistencyResult, PrioritySolver,
};

/// Complete per-matrix result: priority vector and consistency measures.
///
/// The unit of work reused by both synthesizers, once per comparison
/// matrix in the hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixAnalysis {
    /// Normalized priority vector, one entry per matrix row.
    pub priorities: Vec<f64>,
    /// Consistency measurement for the same matrix.
    pub consistency: ConsistencyResult,
}

/// Composes the priority solver and the consistency evaluator.
///
/// Pure function of its input: no side effects, deterministic for
/// identical matrices.
pub struct MatrixAnalyzer;

impl MatrixAnalyzer {
    /// Analyzes a matrix with the default thresholds.
    pub fn analyze(matrix: &ComparisonMatrix) -> MatrixAnalysis {
        Self::analyze_with(matrix, &AnalysisOptions::default())
    }

    /// Analyzes a matrix with caller-supplied thresholds.
    pub fn analyze_with(matrix: &ComparisonMatrix, options: &AnalysisOptions) -> MatrixAnalysis {
        let priorities = PrioritySolver::solve(matrix);
        let consistency = ConsistencyEvaluator::evaluate_with_threshold(
            matrix,
            &priorities,
            options.consistency_threshold,
        );

        MatrixAnalysis {
            priorities,
            consistency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> ComparisonMatrix {
        ComparisonMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn analyze_combines_priorities_and_consistency() {
        let analysis = MatrixAnalyzer::analyze(&matrix(vec![
            vec![1.0, 2.0, 3.0],
            vec![0.5, 1.0, 2.0],
            vec![0.3333, 0.5, 1.0],
        ]));

        assert_eq!(analysis.priorities.len(), 3);
        assert_eq!(analysis.consistency.n, 3);
        assert!(analysis.consistency.is_applicable);
        assert!(analysis.consistency.is_consistent);
        assert!((analysis.priorities.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn analyze_is_deterministic() {
        let m = matrix(vec![vec![1.0, 5.0], vec![0.2, 1.0]]);
        assert_eq!(MatrixAnalyzer::analyze(&m), MatrixAnalyzer::analyze(&m));
    }

    #[test]
    fn analyze_with_respects_threshold_override() {
        let m = matrix(vec![
            vec![1.0, 3.0, 0.5],
            vec![1.0 / 3.0, 1.0, 4.0],
            vec![2.0, 0.25, 1.0],
        ]);

        let strict = MatrixAnalyzer::analyze_with(
            &m,
            &AnalysisOptions {
                consistency_threshold: 1e-6,
                ..AnalysisOptions::default()
            },
        );

        assert!(!strict.consistency.is_consistent);
    }

    #[test]
    fn analysis_serialization_round_trip() {
        let analysis = MatrixAnalyzer::analyze(&matrix(vec![vec![1.0, 2.0], vec![0.5, 1.0]]));

        let json = serde_json::to_string(&analysis).unwrap();
        let restored: MatrixAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, analysis);
    }
}

//! Consistency Evaluator - λmax, CI, and CR for a comparison matrix.

use serde::{Deserialize, Serialize};

use super::ComparisonMatrix;

/// Saaty's Random Index reference values for matrix sizes 1..=15.
///
/// The expected consistency index of a randomly filled reciprocal matrix
/// of the given size. Frozen at process start; index with
/// [`ConsistencyEvaluator::random_index`].
pub const RANDOM_INDEX: [f64; 15] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48, 1.56, 1.57, 1.59,
];

/// Random Index fallback for matrices larger than the reference table.
pub const RANDOM_INDEX_FALLBACK: f64 = 1.6;

/// A consistency ratio below this is considered acceptable.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Consistency measurement for one comparison matrix.
///
/// For n < 3 the matrix cannot violate transitivity, so the concept does
/// not apply: `is_applicable` is false, `cr` is reported as 0, and
/// `is_consistent` is forced true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyResult {
    /// Matrix order the measurement was taken at.
    pub n: usize,
    /// Estimated principal eigenvalue.
    pub lambda_max: f64,
    /// Consistency index `(λmax - n) / (n - 1)`.
    pub ci: f64,
    /// Consistency ratio `ci / random_index(n)`.
    pub cr: f64,
    /// Whether the consistency concept applies at this matrix size.
    pub is_applicable: bool,
    /// Whether the judgments are acceptably consistent.
    pub is_consistent: bool,
}

/// Evaluates how internally consistent a set of pairwise judgments is.
pub struct ConsistencyEvaluator;

impl ConsistencyEvaluator {
    /// Returns the Random Index for a matrix of order `n`.
    pub fn random_index(n: usize) -> f64 {
        if n == 0 {
            return 0.0;
        }
        match RANDOM_INDEX.get(n - 1) {
            Some(ri) => *ri,
            None => RANDOM_INDEX_FALLBACK,
        }
    }

    /// Estimates the principal eigenvalue of `matrix` given its priority vector.
    ///
    /// `λmax = (1/n) · Σ_i (Σ_j m[i][j] · p[j]) / p[i]`, skipping rows
    /// whose priority entry is zero or non-finite; such rows simply do
    /// not contribute rather than poisoning the estimate.
    pub fn lambda_max(matrix: &ComparisonMatrix, priorities: &[f64]) -> f64 {
        let n = matrix.n();
        let mut sum = 0.0;

        for (i, row) in matrix.rows().iter().enumerate() {
            let p = priorities[i];
            if p == 0.0 || !p.is_finite() {
                continue;
            }
            let weighted: f64 = row.iter().zip(priorities).map(|(m, p)| m * p).sum();
            sum += weighted / p;
        }

        sum / n as f64
    }

    /// Evaluates consistency with the default acceptability threshold.
    pub fn evaluate(matrix: &ComparisonMatrix, priorities: &[f64]) -> ConsistencyResult {
        Self::evaluate_with_threshold(matrix, priorities, CONSISTENCY_THRESHOLD)
    }

    /// Evaluates consistency against a caller-supplied CR threshold.
    pub fn evaluate_with_threshold(
        matrix: &ComparisonMatrix,
        priorities: &[f64],
        threshold: f64,
    ) -> ConsistencyResult {
        let n = matrix.n();
        let lambda_max = Self::lambda_max(matrix, priorities);

        let ci = if n <= 2 {
            0.0
        } else {
            (lambda_max - n as f64) / (n as f64 - 1.0)
        };

        let ri = Self::random_index(n);
        let is_applicable = n >= 3 && ri > 0.0;

        let cr = if is_applicable { ci / ri } else { 0.0 };
        let is_consistent = if is_applicable { cr < threshold } else { true };

        ConsistencyResult {
            n,
            lambda_max,
            ci,
            cr,
            is_applicable,
            is_consistent,
        }
    }
}

//! Priority Vector Solver - normalized weights from one comparison matrix.

use super::ComparisonMatrix;

/// Derives priority (weight) vectors from pairwise comparison matrices.
pub struct PrioritySolver;

impl PrioritySolver {
    /// Computes the normalized priority vector for a matrix.
    ///
    /// # Algorithm
    ///
    /// Row geometric means, normalized to sum 1:
    /// `gm_i = (Π_j m[i][j])^(1/n)`, `priority_i = gm_i / Σ_k gm_k`.
    ///
    /// This is the standard closed-form approximation to the principal
    /// eigenvector and needs no iterative convergence. Any finite
    /// positive matrix yields a finite result; degenerate all-zero rows
    /// are a caller validation failure and are not handled here.
    pub fn solve(matrix: &ComparisonMatrix) -> Vec<f64> {
        let n = matrix.n();
        let exponent = 1.0 / n as f64;

        let geometric_means: Vec<f64> = matrix
            .rows()
            .iter()
            .map(|row| row.iter().product::<f64>().powf(exponent))
            .collect();

        let total: f64 = geometric_means.iter().sum();

        geometric_means.iter().map(|gm| gm / total).collect()
    }
}

//! Pairwise comparison matrix - core data structure for AHP analysis.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::AnalysisError;

/// A square matrix of pairwise relative-importance judgments.
///
/// Construction validates shape only: the matrix must be non-empty,
/// square, and contain finite numbers. The reciprocal property
/// (`m[j][i] == 1 / m[i][j]`, unit diagonal) is the producer's contract
/// and is not numerically re-validated here.
///
/// Once built, a matrix is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<f64>>", try_from = "Vec<Vec<f64>>")]
pub struct ComparisonMatrix {
    rows: Vec<Vec<f64>>,
}

impl ComparisonMatrix {
    /// Creates a matrix from raw judgment rows.
    ///
    /// # Errors
    ///
    /// Returns `MalformedMatrix` if the input is empty, any row length
    /// differs from the row count, or any entry is not a finite number.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AnalysisError> {
        let n = rows.len();
        if n == 0 {
            return Err(AnalysisError::malformed_matrix("matrix has no rows"));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(AnalysisError::malformed_matrix(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            for (j, value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(AnalysisError::malformed_matrix(format!(
                        "entry [{}][{}] is not a finite number",
                        i, j
                    )));
                }
            }
        }

        Ok(Self { rows })
    }

    /// Creates a reciprocal matrix from upper-triangle judgments.
    ///
    /// `judgments` holds the entries above the diagonal in row-major
    /// order (`m[0][1], m[0][2], ..., m[n-2][n-1]`), the order a
    /// judgment form collects them in. The diagonal is set to 1 and the
    /// lower triangle to the reciprocals.
    ///
    /// # Errors
    ///
    /// Returns `MalformedMatrix` if the judgment count is not
    /// `n * (n - 1) / 2` or any judgment is not a finite positive number
    /// (a reciprocal could not be formed otherwise).
    pub fn from_upper_triangle(n: usize, judgments: &[f64]) -> Result<Self, AnalysisError> {
        if n == 0 {
            return Err(AnalysisError::malformed_matrix("matrix has no rows"));
        }
        let expected = n * (n - 1) / 2;
        if judgments.len() != expected {
            return Err(AnalysisError::malformed_matrix(format!(
                "{} upper-triangle judgments required for a {}x{} matrix, got {}",
                expected,
                n,
                n,
                judgments.len()
            )));
        }

        let mut rows = vec![vec![1.0; n]; n];
        let mut next = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                let value = judgments[next];
                next += 1;
                if !value.is_finite() || value <= 0.0 {
                    return Err(AnalysisError::malformed_matrix(format!(
                        "judgment for pair ({}, {}) must be a positive number, got {}",
                        i, j, value
                    )));
                }
                rows[i][j] = value;
                rows[j][i] = 1.0 / value;
            }
        }

        Self::from_rows(rows)
    }

    /// Returns the matrix order (number of rows/columns).
    pub fn n(&self) -> usize {
        self.rows.len()
    }

    /// Returns the judgment at row `i`, column `j`.
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    /// Returns the rows as a slice.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

impl TryFrom<Vec<Vec<f64>>> for ComparisonMatrix {
    type Error = AnalysisError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<ComparisonMatrix> for Vec<Vec<f64>> {
    fn from(matrix: ComparisonMatrix) -> Self {
        matrix.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_accepts_valid_square_matrix() {
        let matrix =
            ComparisonMatrix::from_rows(vec![vec![1.0, 2.0], vec![0.5, 1.0]]).unwrap();
        assert_eq!(matrix.n(), 2);
        assert_eq!(matrix.value(0, 1), 2.0);
        assert_eq!(matrix.value(1, 0), 0.5);
    }

    #[test]
    fn from_rows_accepts_single_entry() {
        let matrix = ComparisonMatrix::from_rows(vec![vec![1.0]]).unwrap();
        assert_eq!(matrix.n(), 1);
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        let result = ComparisonMatrix::from_rows(vec![]);
        assert!(matches!(
            result,
            Err(AnalysisError::MalformedMatrix { .. })
        ));
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let result = ComparisonMatrix::from_rows(vec![vec![1.0, 2.0], vec![0.5]]);
        match result {
            Err(AnalysisError::MalformedMatrix { reason }) => {
                assert!(reason.contains("row 1"));
                assert!(reason.contains("expected 2"));
            }
            other => panic!("Expected MalformedMatrix, got {:?}", other),
        }
    }

    #[test]
    fn from_rows_rejects_non_square() {
        let result = ComparisonMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![0.5, 1.0, 2.0]]);
        assert!(matches!(
            result,
            Err(AnalysisError::MalformedMatrix { .. })
        ));
    }

    #[test]
    fn from_rows_rejects_nan_and_infinity() {
        let nan = ComparisonMatrix::from_rows(vec![vec![1.0, f64::NAN], vec![0.5, 1.0]]);
        assert!(matches!(nan, Err(AnalysisError::MalformedMatrix { .. })));

        let inf = ComparisonMatrix::from_rows(vec![vec![1.0, f64::INFINITY], vec![0.5, 1.0]]);
        assert!(matches!(inf, Err(AnalysisError::MalformedMatrix { .. })));
    }

    #[test]
    fn from_upper_triangle_fills_reciprocals() {
        // m[0][1] = 2, m[0][2] = 3, m[1][2] = 1.5
        let matrix = ComparisonMatrix::from_upper_triangle(3, &[2.0, 3.0, 1.5]).unwrap();

        assert_eq!(matrix.value(0, 0), 1.0);
        assert_eq!(matrix.value(1, 1), 1.0);
        assert_eq!(matrix.value(2, 2), 1.0);
        assert_eq!(matrix.value(0, 1), 2.0);
        assert_eq!(matrix.value(1, 0), 0.5);
        assert_eq!(matrix.value(0, 2), 3.0);
        assert!((matrix.value(2, 0) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(matrix.value(1, 2), 1.5);
        assert!((matrix.value(2, 1) - 1.0 / 1.5).abs() < 1e-12);
    }

    #[test]
    fn from_upper_triangle_single_item_needs_no_judgments() {
        let matrix = ComparisonMatrix::from_upper_triangle(1, &[]).unwrap();
        assert_eq!(matrix.n(), 1);
        assert_eq!(matrix.value(0, 0), 1.0);
    }

    #[test]
    fn from_upper_triangle_rejects_wrong_judgment_count() {
        let result = ComparisonMatrix::from_upper_triangle(3, &[2.0, 3.0]);
        match result {
            Err(AnalysisError::MalformedMatrix { reason }) => {
                assert!(reason.contains("3 upper-triangle judgments"));
            }
            other => panic!("Expected MalformedMatrix, got {:?}", other),
        }
    }

    #[test]
    fn from_upper_triangle_rejects_non_positive_judgment() {
        let zero = ComparisonMatrix::from_upper_triangle(2, &[0.0]);
        assert!(matches!(zero, Err(AnalysisError::MalformedMatrix { .. })));

        let negative = ComparisonMatrix::from_upper_triangle(2, &[-3.0]);
        assert!(matches!(
            negative,
            Err(AnalysisError::MalformedMatrix { .. })
        ));
    }

    #[test]
    fn matrix_serializes_as_nested_arrays() {
        let matrix =
            ComparisonMatrix::from_rows(vec![vec![1.0, 2.0], vec![0.5, 1.0]]).unwrap();
        let json = serde_json::to_string(&matrix).unwrap();
        assert_eq!(json, "[[1.0,2.0],[0.5,1.0]]");
    }

    #[test]
    fn matrix_deserialization_validates_shape() {
        let valid: Result<ComparisonMatrix, _> = serde_json::from_str("[[1.0,2.0],[0.5,1.0]]");
        assert!(valid.is_ok());

        let ragged: Result<ComparisonMatrix, _> = serde_json::from_str("[[1.0,2.0],[0.5]]");
        assert!(ragged.is_err());
    }
}

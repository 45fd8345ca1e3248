//! Analysis Engine - the operations exposed to collaborators.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    AnalysisOptions, ComparisonMatrix, ConsistencyEvaluator, ConsistencyResult,
    HierarchySynthesizer, Level, PrioritySolver, Synthesizer, SynthesisResult,
};
use crate::domain::foundation::AnalysisError;

/// A complete synthesis request: the hierarchy descriptor with its
/// comparison matrices attached.
///
/// The two shapes collaborators submit. A payload carrying a `levels`
/// array deserializes to `MultiLevel`; flat `criteria`/`alternatives`
/// fields deserialize to `Classic`. Dispatch happens once, in
/// [`AnalysisEngine::run`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SynthesisRequest {
    /// General N-level hierarchy.
    MultiLevel {
        levels: Vec<Level>,
        matrices_by_level: Vec<Vec<ComparisonMatrix>>,
    },
    /// Classic goal → criteria → alternatives hierarchy.
    Classic {
        criteria: Vec<String>,
        alternatives: Vec<String>,
        criteria_matrix: ComparisonMatrix,
        alternative_matrices: Vec<ComparisonMatrix>,
    },
}

/// Entry point for the priority computation core.
///
/// Holds the tunable thresholds and exposes the callable operations;
/// every method is synchronous, deterministic, and free of I/O.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    options: AnalysisOptions,
}

impl AnalysisEngine {
    /// Creates an engine with the default thresholds.
    pub fn new() -> Self {
        Self {
            options: AnalysisOptions::default(),
        }
    }

    /// Creates an engine with custom thresholds.
    pub fn with_options(options: AnalysisOptions) -> Self {
        Self { options }
    }

    /// Returns the engine's thresholds.
    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Checks one comparison matrix for consistency.
    ///
    /// Used by the interactive "check consistency" step while judgments
    /// are being filled in; priorities are derived internally and only
    /// the consistency measures are returned.
    pub fn analyze_matrix(&self, matrix: &ComparisonMatrix) -> ConsistencyResult {
        let priorities = PrioritySolver::solve(matrix);
        ConsistencyEvaluator::evaluate_with_threshold(
            matrix,
            &priorities,
            self.options.consistency_threshold,
        )
    }

    /// Classic three-level synthesis from flat input.
    pub fn synthesize(
        &self,
        criteria: &[String],
        alternatives: &[String],
        criteria_matrix: &ComparisonMatrix,
        alternative_matrices: &[ComparisonMatrix],
    ) -> Result<SynthesisResult, AnalysisError> {
        Synthesizer::synthesize_with(
            criteria,
            alternatives,
            criteria_matrix,
            alternative_matrices,
            &self.options,
        )
    }

    /// General N-level synthesis.
    pub fn synthesize_hierarchy(
        &self,
        levels: &[Level],
        matrices_by_level: &[Vec<ComparisonMatrix>],
    ) -> Result<SynthesisResult, AnalysisError> {
        HierarchySynthesizer::synthesize_with(levels, matrices_by_level, &self.options)
    }

    /// Dispatches a request to the matching synthesizer.
    pub fn run(&self, request: &SynthesisRequest) -> Result<SynthesisResult, AnalysisError> {
        match request {
            SynthesisRequest::MultiLevel {
                levels,
                matrices_by_level,
            } => {
                debug!("Dispatching multi-level synthesis request");
                self.synthesize_hierarchy(levels, matrices_by_level)
            }
            SynthesisRequest::Classic {
                criteria,
                alternatives,
                criteria_matrix,
                alternative_matrices,
            } => {
                debug!("Dispatching classic synthesis request");
                self.synthesize(criteria, alternatives, criteria_matrix, alternative_matrices)
            }
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

//! N-Level Hierarchy Synthesizer - arbitrary-depth priority composition.

use tracing::{debug, warn};

use super::{
    AnalysisOptions, ChildAttribution, ComparisonMatrix, ConsistencyRecord, Level, LevelReport,
    MatrixAnalysis, MatrixAnalyzer, MatrixReport, RankedAlternative, SynthesisResult,
};
use crate::domain::foundation::AnalysisError;

/// Synthesizes an ordered level sequence, root (closest to the goal)
/// first, into global leaf priorities.
///
/// Level 0 carries one matrix; every deeper level carries one matrix
/// per parent item. Each level's child attribution (partitioned blocks
/// or the full item list under every parent) is classified up front,
/// and global priorities are composed level by level: a child's global
/// priority is its parent's global priority times its local priority,
/// summed over parents when the level is shared.
pub struct HierarchySynthesizer;

impl HierarchySynthesizer {
    /// Synthesizes with the default thresholds.
    pub fn synthesize(
        levels: &[Level],
        matrices_by_level: &[Vec<ComparisonMatrix>],
    ) -> Result<SynthesisResult, AnalysisError> {
        Self::synthesize_with(levels, matrices_by_level, &AnalysisOptions::default())
    }

    /// Synthesizes with caller-supplied thresholds.
    ///
    /// # Errors
    ///
    /// All validation happens before any matrix is analyzed:
    /// - `Structural` for fewer than 2 levels, an empty item list, or a
    ///   matrix count that does not match a parent level.
    /// - `DimensionMismatch` for matrix sizes that fit neither a
    ///   partition of the level nor full-list attribution.
    pub fn synthesize_with(
        levels: &[Level],
        matrices_by_level: &[Vec<ComparisonMatrix>],
        options: &AnalysisOptions,
    ) -> Result<SynthesisResult, AnalysisError> {
        let attributions = Self::validate(levels, matrices_by_level)?;

        debug!(
            "Synthesizing {}-level hierarchy, {} leaf alternatives",
            levels.len(),
            levels[levels.len() - 1].len()
        );

        let root_analysis = MatrixAnalyzer::analyze_with(&matrices_by_level[0][0], options);
        let root_weights = root_analysis.priorities.clone();

        let weight_sum: f64 = root_weights.iter().sum();
        if (weight_sum - 1.0).abs() > options.weight_sum_tolerance {
            warn!(
                "Root-level weights sum to {} rather than 1; proceeding with synthesis",
                weight_sum
            );
        }

        let mut reports = vec![LevelReport {
            level_name: levels[0].name.clone(),
            items: levels[0].items.clone(),
            global_priorities: root_weights.clone(),
            matrices: vec![MatrixReport {
                parent: None,
                analysis: root_analysis.clone(),
            }],
        }];

        let mut parent_globals = root_weights.clone();

        for (index, level) in levels.iter().enumerate().skip(1) {
            let analyses: Vec<MatrixAnalysis> = matrices_by_level[index]
                .iter()
                .map(|matrix| MatrixAnalyzer::analyze_with(matrix, options))
                .collect();

            let globals = Self::compose_globals(
                level.len(),
                &parent_globals,
                &analyses,
                &attributions[index - 1],
            );

            reports.push(LevelReport {
                level_name: level.name.clone(),
                items: level.items.clone(),
                global_priorities: globals.clone(),
                matrices: analyses
                    .into_iter()
                    .zip(&levels[index - 1].items)
                    .map(|(analysis, parent)| MatrixReport {
                        parent: Some(parent.clone()),
                        analysis,
                    })
                    .collect(),
            });

            parent_globals = globals;
        }

        let leaf = &levels[levels.len() - 1];
        let consistency_roster = ConsistencyRecord::roster_for(&reports);

        Ok(SynthesisResult {
            rankings: RankedAlternative::rank_all(&leaf.items, &parent_globals),
            criteria_weights: root_weights,
            overall_consistency: root_analysis.consistency,
            levels: reports,
            consistency_roster,
        })
    }

    /// Validates structure and classifies every level's attribution.
    ///
    /// Returns one `ChildAttribution` per non-root level, in level order.
    fn validate(
        levels: &[Level],
        matrices_by_level: &[Vec<ComparisonMatrix>],
    ) -> Result<Vec<ChildAttribution>, AnalysisError> {
        if levels.len() < 2 {
            return Err(AnalysisError::structural(format!(
                "hierarchy requires at least 2 levels, got {}",
                levels.len()
            )));
        }
        for (index, level) in levels.iter().enumerate() {
            if level.is_empty() {
                return Err(AnalysisError::structural(format!(
                    "level {} ({}) has no items",
                    index, level.name
                )));
            }
        }
        if matrices_by_level.len() != levels.len() {
            return Err(AnalysisError::structural(format!(
                "expected matrix assignments for {} levels, got {}",
                levels.len(),
                matrices_by_level.len()
            )));
        }

        let root_matrices = &matrices_by_level[0];
        if root_matrices.len() != 1 {
            return Err(AnalysisError::structural(format!(
                "level 0 ({}) requires exactly one comparison matrix, got {}",
                levels[0].name,
                root_matrices.len()
            )));
        }
        if root_matrices[0].n() != levels[0].len() {
            return Err(AnalysisError::dimension_mismatch(
                format!("level 0 ({})", levels[0].name),
                levels[0].len(),
                root_matrices[0].n(),
            ));
        }

        let mut attributions = Vec::with_capacity(levels.len() - 1);
        for (index, level) in levels.iter().enumerate().skip(1) {
            let sizes: Vec<usize> = matrices_by_level[index]
                .iter()
                .map(|matrix| matrix.n())
                .collect();
            attributions.push(ChildAttribution::classify(
                index,
                &level.name,
                level.len(),
                &levels[index - 1].items,
                &sizes,
            )?);
        }

        Ok(attributions)
    }

    /// Composes a level's global priorities from its parents' globals
    /// and the per-parent local priorities.
    fn compose_globals(
        item_count: usize,
        parent_globals: &[f64],
        analyses: &[MatrixAnalysis],
        attribution: &ChildAttribution,
    ) -> Vec<f64> {
        let mut globals = vec![0.0; item_count];

        match attribution {
            ChildAttribution::Partitioned { spans } => {
                for ((span, parent_global), analysis) in
                    spans.iter().zip(parent_globals).zip(analyses)
                {
                    for (offset, local) in analysis.priorities.iter().enumerate() {
                        globals[span.start + offset] = parent_global * local;
                    }
                }
            }
            ChildAttribution::Shared => {
                for (parent_global, analysis) in parent_globals.iter().zip(analyses) {
                    for (global, local) in globals.iter_mut().zip(&analysis.priorities) {
                        *global += parent_global * local;
                    }
                }
            }
        }

        globals
    }
}

//! Synthesis result types.
//!
//! Everything here is serde-serializable: the storage collaborator
//! persists a `SynthesisResult` verbatim as an opaque structured payload
//! and the report renderer consumes it read-only.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{ConsistencyResult, MatrixAnalysis};

/// One alternative's position in the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// Alternative label from the leaf level.
    pub name: String,
    /// Global (root-relative) priority in `[0, 1]`.
    pub priority: f64,
    /// 1-based rank, descending by priority. Ties keep the original
    /// item order (stable sort), so equal priorities rank in input
    /// order deterministically.
    pub rank: u32,
}

impl RankedAlternative {
    /// Ranks items by priority, descending, 1-based.
    pub fn rank_all(names: &[String], priorities: &[f64]) -> Vec<RankedAlternative> {
        let mut ranked: Vec<RankedAlternative> = names
            .iter()
            .zip(priorities)
            .map(|(name, priority)| RankedAlternative {
                name: name.clone(),
                priority: *priority,
                rank: 0,
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.priority
                .partial_cmp(&a.priority)
                .unwrap_or(Ordering::Equal)
        });

        for (index, entry) in ranked.iter_mut().enumerate() {
            entry.rank = index as u32 + 1;
        }

        ranked
    }
}

/// Analysis of one comparison matrix, tagged with the parent item it
/// was judged under (`None` for the root matrix).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixReport {
    pub parent: Option<String>,
    pub analysis: MatrixAnalysis,
}

/// Everything computed for one hierarchy level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelReport {
    /// Level name from the hierarchy descriptor.
    pub level_name: String,
    /// Item labels in input order.
    pub items: Vec<String>,
    /// Root-relative priority per item, aligned with `items`.
    pub global_priorities: Vec<f64>,
    /// Per-parent matrix analyses in parent order.
    pub matrices: Vec<MatrixReport>,
}

/// One row of the diagnostic consistency roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyRecord {
    /// Level index, root first.
    pub level: usize,
    /// Level name.
    pub level_name: String,
    /// Parent item this matrix was judged under (`None` at the root).
    pub parent: Option<String>,
    /// The matrix's consistency measurement.
    pub consistency: ConsistencyResult,
}

impl ConsistencyRecord {
    /// Flattens per-level reports into the root→leaf diagnostic roster.
    pub fn roster_for(levels: &[LevelReport]) -> Vec<ConsistencyRecord> {
        levels
            .iter()
            .enumerate()
            .flat_map(|(index, level)| {
                level.matrices.iter().map(move |report| ConsistencyRecord {
                    level: index,
                    level_name: level.level_name.clone(),
                    parent: report.parent.clone(),
                    consistency: report.analysis.consistency.clone(),
                })
            })
            .collect()
    }
}

/// Full output of one hierarchy synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisResult {
    /// Leaf alternatives ranked by global priority.
    pub rankings: Vec<RankedAlternative>,
    /// Root-level (criteria) weights in input order.
    pub criteria_weights: Vec<f64>,
    /// Consistency of the root comparison matrix.
    pub overall_consistency: ConsistencyResult,
    /// Per-level breakdown, root first.
    pub levels: Vec<LevelReport>,
    /// Every matrix's consistency, concatenated root→leaf for
    /// diagnostic display.
    pub consistency_roster: Vec<ConsistencyRecord>,
}

impl SynthesisResult {
    /// True when every matrix in the hierarchy passed its consistency check.
    pub fn all_consistent(&self) -> bool {
        self.consistency_roster
            .iter()
            .all(|record| record.consistency.is_consistent)
    }

    /// The top-ranked alternative, if any.
    pub fn top_alternative(&self) -> Option<&RankedAlternative> {
        self.rankings.first()
    }
}

//! Analysis domain events.
//!
//! Events emitted when analysis computations complete. The core does
//! not publish them itself; collaborators construct and route them so
//! that completed syntheses can be persisted (keyed by analysis id and
//! timestamp) and surfaced to interactive clients.

use serde::{Deserialize, Serialize};

use super::{ConsistencyResult, SynthesisResult};
use crate::domain::foundation::{domain_event, AnalysisId, EventId, Timestamp};

/// Recorded when an interactive consistency check runs on one matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyEvaluated {
    /// Unique event identifier for deduplication.
    pub event_id: EventId,
    /// The analysis this check belongs to.
    pub analysis_id: AnalysisId,
    /// Matrix order that was checked.
    pub n: usize,
    /// The consistency ratio measured.
    pub cr: f64,
    /// Whether the consistency concept applied at this size.
    pub is_applicable: bool,
    /// Whether the judgments passed the threshold.
    pub is_consistent: bool,
    /// When the check ran.
    pub evaluated_at: Timestamp,
}

domain_event!(
    ConsistencyEvaluated,
    event_type = "analysis.consistency_evaluated",
    schema_version = 1,
    aggregate_id = analysis_id,
    aggregate_type = "Analysis",
    occurred_at = evaluated_at,
    event_id = event_id
);

impl ConsistencyEvaluated {
    /// Builds the event from a consistency check result.
    pub fn from_check(analysis_id: AnalysisId, result: &ConsistencyResult) -> Self {
        Self {
            event_id: EventId::new(),
            analysis_id,
            n: result.n,
            cr: result.cr,
            is_applicable: result.is_applicable,
            is_consistent: result.is_consistent,
            evaluated_at: Timestamp::now(),
        }
    }
}

/// Published when a full-hierarchy synthesis completes.
///
/// Carries summarized results; the full `SynthesisResult` payload is
/// persisted separately by the storage collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisCompleted {
    /// Unique event identifier for deduplication.
    pub event_id: EventId,
    /// The analysis that completed.
    pub analysis_id: AnalysisId,
    /// Number of hierarchy levels synthesized.
    pub level_count: usize,
    /// Number of ranked leaf alternatives.
    pub alternative_count: usize,
    /// Name of the top-ranked alternative (None for empty rankings).
    pub top_alternative: Option<String>,
    /// Whether every matrix in the hierarchy passed its consistency check.
    pub all_consistent: bool,
    /// When the synthesis completed.
    pub completed_at: Timestamp,
}

domain_event!(
    SynthesisCompleted,
    event_type = "analysis.synthesis_completed",
    schema_version = 1,
    aggregate_id = analysis_id,
    aggregate_type = "Analysis",
    occurred_at = completed_at,
    event_id = event_id
);

impl SynthesisCompleted {
    /// Builds the event from a finished synthesis.
    pub fn from_result(analysis_id: AnalysisId, result: &SynthesisResult) -> Self {
        Self {
            event_id: EventId::new(),
            analysis_id,
            level_count: result.levels.len(),
            alternative_count: result.rankings.len(),
            top_alternative: result.top_alternative().map(|top| top.name.clone()),
            all_consistent: result.all_consistent(),
            completed_at: Timestamp::now(),
        }
    }
}

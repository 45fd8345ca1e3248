//! Analysis Module - Pure domain services for AHP priority computation.
//!
//! This module contains stateless functions that derive priority weights
//! from pairwise comparison judgments and compose them across a decision
//! hierarchy.
//!
//! # Components
//!
//! - `ComparisonMatrix` - Validated pairwise comparison matrix
//! - `PrioritySolver` - Geometric-mean priority vectors
//! - `ConsistencyEvaluator` - λmax, CI, CR against the Random Index table
//! - `MatrixAnalyzer` - Per-matrix priorities + consistency in one pass
//! - `Synthesizer` - Classic goal → criteria → alternatives synthesis
//! - `HierarchySynthesizer` - Arbitrary-depth hierarchy synthesis
//! - `AnalysisEngine` - The operations exposed to collaborators
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and deterministic for
//! identical input. No ports or adapters needed since there's no I/O or
//! external dependencies; the only output channels are return values and
//! `tracing` diagnostics.

mod comparison_matrix;
mod consistency;
mod engine;
mod events;
mod hierarchy;
mod hierarchy_synthesizer;
mod matrix_analyzer;
mod options;
mod priority;
mod result;
mod synthesizer;

// Re-export all public types
pub use comparison_matrix::ComparisonMatrix;
pub use consistency::{
    ConsistencyEvaluator, ConsistencyResult, CONSISTENCY_THRESHOLD, RANDOM_INDEX,
    RANDOM_INDEX_FALLBACK,
};
pub use engine::{AnalysisEngine, SynthesisRequest};
pub use events::{ConsistencyEvaluated, SynthesisCompleted};
pub use hierarchy::{ChildAttribution, ItemSpan, Level};
pub use hierarchy_synthesizer::HierarchySynthesizer;
pub use matrix_analyzer::{MatrixAnalysis, MatrixAnalyzer};
pub use options::{AnalysisOptions, WEIGHT_SUM_TOLERANCE};
pub use priority::PrioritySolver;
pub use result::{
    ConsistencyRecord, LevelReport, MatrixReport, RankedAlternative, SynthesisResult,
};
pub use synthesizer::Synthesizer;

//! Weighwise - Priority Weighting and Hierarchy Synthesis Engine
//!
//! This crate implements the computational core of the Analytic Hierarchy
//! Process: priority vectors derived from pairwise comparison judgments,
//! consistency screening against Saaty's random-index reference, and
//! synthesis of local priorities across a decision hierarchy into a single
//! ranked list of alternatives.

pub mod config;
pub mod domain;

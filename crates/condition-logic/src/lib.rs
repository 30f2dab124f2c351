// crates/condition-logic/src/lib.rs
// ============================================================================
// Module: Condition Logic Root
// Description: Public API surface for the condition algebra.
// Purpose: Wire together requirement trees, predicate traits, and trace hooks.
// Dependencies: crate::{requirement, trace, traits}
// ============================================================================

//! ## Overview
//! A small, domain-agnostic Boolean algebra over typed predicates. Callers
//! supply the leaves (anything implementing [`PredicateEval`]) and a reader
//! that the leaves evaluate against; the crate supplies AND/OR composition
//! with short-circuit evaluation and optional tracing of every leaf that was
//! actually evaluated.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod requirement;
pub mod trace;
pub mod traits;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use requirement::Requirement;
pub use requirement::collect_predicates;
pub use trace::NoopTrace;
pub use trace::RequirementTrace;
pub use traits::PredicateEval;

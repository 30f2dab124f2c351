// crates/condition-logic/src/trace.rs
// ============================================================================
// Module: Requirement Trace Hooks
// Description: Observation hooks for predicate evaluation.
// Purpose: Record which leaves were evaluated and what they returned.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Trace hooks observe leaf evaluation without influencing it. Because
//! evaluation short-circuits, a trace only sees the predicates that were
//! needed to reach the result.

// ============================================================================
// SECTION: Trace Trait
// ============================================================================

/// Hook invoked for every predicate evaluated during a requirement walk
pub trait RequirementTrace<P> {
    /// Called whenever a predicate is evaluated
    fn on_predicate_evaluated(&mut self, predicate: &P, result: bool);
}

/// No-op trace hook for fast paths
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTrace;

impl<P> RequirementTrace<P> for NoopTrace {
    fn on_predicate_evaluated(&mut self, _predicate: &P, _result: bool) {}
}

impl<P: Clone> RequirementTrace<P> for Vec<(P, bool)> {
    fn on_predicate_evaluated(&mut self, predicate: &P, result: bool) {
        self.push((predicate.clone(), result));
    }
}

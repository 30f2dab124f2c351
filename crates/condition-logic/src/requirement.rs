// crates/condition-logic/src/requirement.rs
// ============================================================================
// Module: Requirement Core Types
// Description: Boolean algebra over typed predicates.
// Purpose: Define `Requirement` along with construction and evaluation helpers.
// Dependencies: serde::{Deserialize, Serialize}, smallvec::SmallVec
// ============================================================================

//! ## Overview
//! This module defines the requirement tree and its evaluation. The logical
//! operators are domain-agnostic; the [`Requirement::Predicate`] variant is
//! where domain semantics are injected through [`PredicateEval`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use smallvec::SmallVec;

use crate::trace::NoopTrace;
use crate::trace::RequirementTrace;
use crate::traits::PredicateEval;

// ============================================================================
// SECTION: Requirement Definition
// ============================================================================

/// Requirement tree with domain-specific leaves
///
/// # Invariants
/// - Empty `And` is trivially satisfied.
/// - Empty `Or` is trivially unsatisfiable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Requirement<P> {
    /// Logical AND: all sub-requirements must be satisfied
    ///
    /// Evaluation short-circuits on the first failure.
    And(SmallVec<[Box<Self>; 4]>),

    /// Logical OR: at least one sub-requirement must be satisfied
    ///
    /// Evaluation short-circuits on the first success.
    Or(SmallVec<[Box<Self>; 4]>),

    /// Domain-specific atomic predicate
    Predicate(P),
}

// ============================================================================
// SECTION: Constructors
// ============================================================================

impl<P> Requirement<P> {
    /// Creates an AND requirement from the given children
    #[must_use]
    pub fn and(requirements: Vec<Self>) -> Self {
        Self::And(requirements.into_iter().map(Box::new).collect())
    }

    /// Creates an OR requirement from the given children
    #[must_use]
    pub fn or(requirements: Vec<Self>) -> Self {
        Self::Or(requirements.into_iter().map(Box::new).collect())
    }

    /// Creates a leaf requirement from a predicate
    #[must_use]
    pub const fn predicate(predicate: P) -> Self {
        Self::Predicate(predicate)
    }

    /// Creates a disjunction of conjunctions
    ///
    /// Each inner collection becomes one AND group; the groups are joined
    /// with OR. Group order is preserved, which fixes the evaluation order.
    #[must_use]
    pub fn any_of_all<G>(groups: impl IntoIterator<Item = G>) -> Self
    where
        G: IntoIterator<Item = P>,
    {
        Self::Or(
            groups
                .into_iter()
                .map(|group| Box::new(Self::And(group.into_iter().map(Self::boxed_leaf).collect())))
                .collect(),
        )
    }

    /// Boxes a predicate as a leaf node.
    fn boxed_leaf(predicate: P) -> Box<Self> {
        Box::new(Self::Predicate(predicate))
    }

    // ========================================================================
    // SECTION: Evaluation
    // ========================================================================

    /// Evaluates this requirement with short-circuiting
    pub fn eval(&self, reader: &P::Reader<'_>) -> bool
    where
        P: PredicateEval,
    {
        let mut trace = NoopTrace;
        self.eval_with_trace(reader, &mut trace)
    }

    /// Evaluates this requirement and reports every evaluated leaf to `trace`
    pub fn eval_with_trace<T>(&self, reader: &P::Reader<'_>, trace: &mut T) -> bool
    where
        P: PredicateEval,
        T: RequirementTrace<P>,
    {
        match self {
            Self::Predicate(predicate) => {
                let result = predicate.eval(reader);
                trace.on_predicate_evaluated(predicate, result);
                result
            }
            Self::And(requirements) => {
                for req in requirements {
                    if !req.eval_with_trace(reader, trace) {
                        return false;
                    }
                }
                true
            }
            Self::Or(requirements) => {
                for req in requirements {
                    if req.eval_with_trace(reader, trace) {
                        return true;
                    }
                }
                false
            }
        }
    }
}

// ============================================================================
// SECTION: Predicate Collection
// ============================================================================

/// Collects unique predicate leaves in first-seen order.
#[must_use]
pub fn collect_predicates<P: PartialEq>(requirement: &Requirement<P>) -> Vec<&P> {
    let mut out = Vec::new();
    collect_predicates_inner(requirement, &mut out);
    out
}

/// Walks a requirement tree and appends predicate references.
fn collect_predicates_inner<'a, P: PartialEq>(
    requirement: &'a Requirement<P>,
    out: &mut Vec<&'a P>,
) {
    match requirement {
        Requirement::Predicate(predicate) => {
            if !out.contains(&predicate) {
                out.push(predicate);
            }
        }
        Requirement::And(reqs) | Requirement::Or(reqs) => {
            for req in reqs {
                collect_predicates_inner(req, out);
            }
        }
    }
}

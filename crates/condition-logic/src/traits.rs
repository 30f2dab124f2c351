// crates/condition-logic/src/traits.rs
// ============================================================================
// Module: Predicate Traits
// Description: Evaluation contract for requirement leaves.
// Purpose: Let domains plug typed predicates into the universal algebra.
// Dependencies: none
// ============================================================================

//! ## Overview
//! A predicate is the boundary where the universal logic hands off to domain
//! semantics. The reader is borrowed for the duration of one evaluation, so a
//! domain can evaluate against live state without cloning it.

// ============================================================================
// SECTION: Predicate Trait
// ============================================================================

/// Core trait for predicate evaluation against a domain reader
///
/// # Examples
///
/// ```
/// use condition_logic::PredicateEval;
/// use condition_logic::Requirement;
///
/// struct AtLeast(u32);
///
/// impl PredicateEval for AtLeast {
///     type Reader<'a> = u32;
///
///     fn eval(&self, reader: &Self::Reader<'_>) -> bool {
///         *reader >= self.0
///     }
/// }
///
/// let requirement = Requirement::any_of_all(vec![vec![AtLeast(3), AtLeast(5)]]);
/// assert!(requirement.eval(&5));
/// assert!(!requirement.eval(&4));
/// ```
pub trait PredicateEval {
    /// Domain-specific view the predicate reads from
    type Reader<'a>;

    /// Returns `true` when the predicate holds for the reader
    fn eval(&self, reader: &Self::Reader<'_>) -> bool;
}

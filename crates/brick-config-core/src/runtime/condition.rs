// crates/brick-config-core/src/runtime/condition.rs
// ============================================================================
// Module: Condition Evaluator
// Description: Visibility evaluation and reset of conditioned fields.
// Purpose: Decide visibility from OR-of-AND groups and reset hidden fields.
// Dependencies: crate::core, crate::interfaces, crate::audit, condition-logic
// ============================================================================

//! ## Overview
//! A field is visible when it has no conditions, or when at least one of its
//! AND groups is fully satisfied. A group entry `name: expected` holds when
//! the selected value of the field called `name` loosely equals `expected`;
//! a name that matches no field reads as `null`.
//!
//! Evaluation is a single left-to-right fold in declaration order over a
//! [`SelectionSnapshot`] (name to selected value, first declaration wins).
//! The snapshot starts with every field's resolved value. When a field fails
//! its conditions it stays in the output but is reset: its declared default
//! (or nothing) is written to the value store, becomes its selected value,
//! and it is marked hidden. The reset value replaces the field's entry in the
//! snapshot, so later fields that reference it see the reset value, while
//! decisions already made earlier in the pass are never revisited.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use condition_logic::PredicateEval;
use condition_logic::Requirement;
use condition_logic::collect_predicates;
use serde_json::Value;
use serde_json::json;

use crate::audit::BuildAuditEvent;
use crate::audit::BuildAuditSink;
use crate::audit::EVENT_CONDITION_REFERENCE_MISSING;
use crate::audit::EVENT_FIELD_RESET;
use crate::core::ConditionGroup;
use crate::core::ResolvedField;
use crate::core::values;
use crate::interfaces::StoreError;
use crate::interfaces::ValueStore;
use crate::runtime::context::ResolutionContext;

// ============================================================================
// SECTION: Selection Snapshot
// ============================================================================

/// Live view of selected values keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSnapshot {
    /// Declaration index and selected value of the first field with each name.
    entries: BTreeMap<String, (usize, Option<Value>)>,
}

impl SelectionSnapshot {
    /// Seeds the snapshot from resolved fields; the first declaration wins.
    #[must_use]
    pub fn from_fields(fields: &[ResolvedField]) -> Self {
        let mut entries = BTreeMap::new();
        for (index, field) in fields.iter().enumerate() {
            if let Some(state) = &field.state {
                entries
                    .entry(state.name.clone())
                    .or_insert_with(|| (index, state.selected_value.clone()));
            }
        }
        Self {
            entries,
        }
    }

    /// Returns the selected value of the named field, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name).and_then(|(_, value)| value.as_ref())
    }

    /// Returns true when a field with the name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Replaces the value for `name` if the field at `index` owns that name.
    fn record(&mut self, index: usize, name: &str, value: Option<Value>) {
        if let Some((owner, current)) = self.entries.get_mut(name)
            && *owner == index
        {
            *current = value;
        }
    }
}

// ============================================================================
// SECTION: Field Predicate
// ============================================================================

/// Condition leaf: a named field's selected value loosely equals `expected`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEquals {
    /// Referenced field name.
    pub field: String,
    /// Expected value.
    pub expected: Value,
}

impl PredicateEval for FieldEquals {
    type Reader<'a> = SelectionSnapshot;

    fn eval(&self, reader: &Self::Reader<'_>) -> bool {
        values::loose_eq_opt(reader.get(&self.field), Some(&self.expected))
    }
}

/// Builds the OR-of-AND requirement for a field's condition groups.
#[must_use]
pub fn condition_requirement(groups: &[ConditionGroup]) -> Requirement<FieldEquals> {
    Requirement::any_of_all(groups.iter().map(|group| {
        group
            .iter()
            .map(|(field, expected)| FieldEquals {
                field: field.clone(),
                expected: expected.clone(),
            })
            .collect::<Vec<_>>()
    }))
}

// ============================================================================
// SECTION: Evaluator
// ============================================================================

/// Evaluates visibility across all resolved fields of a block.
pub struct ConditionEvaluator<'a, S> {
    /// Host value store receiving reset values.
    store: &'a S,
    /// Audit sink for resets and dangling references.
    audit: &'a dyn BuildAuditSink,
}

impl<'a, S: ValueStore> ConditionEvaluator<'a, S> {
    /// Creates an evaluator over the given store.
    #[must_use]
    pub const fn new(store: &'a S, audit: &'a dyn BuildAuditSink) -> Self {
        Self {
            store,
            audit,
        }
    }

    /// Evaluates all fields in declaration order, resetting hidden ones.
    ///
    /// The output has the same length and order as the input.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when writing a reset value fails.
    pub fn evaluate(
        &self,
        ctx: &ResolutionContext<'_>,
        mut fields: Vec<ResolvedField>,
    ) -> Result<Vec<ResolvedField>, StoreError> {
        let mut snapshot = SelectionSnapshot::from_fields(&fields);

        for (index, field) in fields.iter_mut().enumerate() {
            let Some(state) = field.state.as_mut() else {
                continue;
            };
            if state.is_unconditional() {
                continue;
            }

            let requirement = condition_requirement(&state.conditions);
            for predicate in collect_predicates(&requirement) {
                if !snapshot.contains(&predicate.field) {
                    self.audit.record(
                        &BuildAuditEvent::new(EVENT_CONDITION_REFERENCE_MISSING, ctx.editable_id)
                            .with_field(&state.name)
                            .with_detail(json!({ "reference": predicate.field })),
                    );
                }
            }

            if requirement.eval(&snapshot) {
                continue;
            }

            let reset = values::non_empty(field.widget.default.as_ref()).cloned();
            self.store.set_value(ctx.document, &state.field_type, &state.name, reset.as_ref())?;
            state.selected_value.clone_from(&reset);
            state.editmode_hidden = true;
            self.audit.record(
                &BuildAuditEvent::new(EVENT_FIELD_RESET, ctx.editable_id)
                    .with_field(&state.name)
                    .with_detail(reset.clone().unwrap_or(Value::Null)),
            );
            snapshot.record(index, &state.name, reset);
        }

        Ok(fields)
    }
}

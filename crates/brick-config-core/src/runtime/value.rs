// crates/brick-config-core/src/runtime/value.rs
// ============================================================================
// Module: Value Resolver
// Description: Computes a field's effective selected value.
// Purpose: Apply declared defaults to empty stored values and extract by type.
// Dependencies: crate::core, crate::interfaces, crate::audit
// ============================================================================

//! ## Overview
//! The selected value comes from the host value store:
//! 1. Read the stored value for `(document, type, name)`.
//! 2. When it is empty and a non-empty default is declared, write the default
//!    into the store and read it back, so later reads in the same build see it.
//! 3. Extract by type: checkboxes yield their checked state, every other type
//!    yields the raw stored data.
//! 4. The selected value is the extracted value when non-empty, else the
//!    declared default (which may itself be empty or absent).

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::audit::BuildAuditEvent;
use crate::audit::BuildAuditSink;
use crate::audit::EVENT_DEFAULT_APPLIED;
use crate::core::FieldType;
use crate::core::values;
use crate::interfaces::StoreError;
use crate::interfaces::StoredValue;
use crate::interfaces::ValueStore;
use crate::runtime::context::ResolutionContext;

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Resolves selected values against the host value store.
pub struct ValueResolver<'a, S> {
    /// Host value store.
    store: &'a S,
    /// Audit sink for default writes.
    audit: &'a dyn BuildAuditSink,
}

impl<'a, S: ValueStore> ValueResolver<'a, S> {
    /// Creates a resolver over the given store.
    #[must_use]
    pub const fn new(store: &'a S, audit: &'a dyn BuildAuditSink) -> Self {
        Self {
            store,
            audit,
        }
    }

    /// Returns the effective selected value for a field.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the value store fails.
    pub fn resolve(
        &self,
        ctx: &ResolutionContext<'_>,
        field_type: &FieldType,
        name: &str,
        default: Option<&Value>,
    ) -> Result<Option<Value>, StoreError> {
        let mut stored = self.store.get_value(ctx.document, field_type, name)?;

        if stored.empty
            && let Some(default) = values::non_empty(default)
        {
            self.store.set_value(ctx.document, field_type, name, Some(default))?;
            self.audit.record(
                &BuildAuditEvent::new(EVENT_DEFAULT_APPLIED, ctx.editable_id)
                    .with_field(name)
                    .with_detail(default.clone()),
            );
            stored = self.store.get_value(ctx.document, field_type, name)?;
        }

        let extracted = extract(field_type, stored);
        if values::is_empty(&extracted) { Ok(default.cloned()) } else { Ok(Some(extracted)) }
    }
}

/// Extracts the type-specific selection signal from a stored value.
fn extract(field_type: &FieldType, stored: StoredValue) -> Value {
    match field_type {
        FieldType::Checkbox => Value::Bool(values::is_truthy(&stored.data)),
        _ => stored.data,
    }
}

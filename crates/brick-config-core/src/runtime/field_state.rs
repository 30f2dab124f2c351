// crates/brick-config-core/src/runtime/field_state.rs
// ============================================================================
// Module: Additional Config Resolver
// Description: Builds the non-widget metadata and runtime state for a field.
// Purpose: Validate conditions, apply synthetic rewrites, and resolve values.
// Dependencies: crate::core, crate::interfaces, crate::runtime::{context, value}
// ============================================================================

//! ## Overview
//! The resolver produces a [`FieldState`] from a declared [`FieldSchema`]:
//! - the widget sub-object is not copied (the tag config resolver owns it),
//! - the synthetic `additionalClasses` type becomes a text input named
//!   `<editable id>AdditionalClasses` with a translated title, so the fixed
//!   slot can be conditioned like any other field,
//! - `edit_reload` is the reload decision the tag config resolver returned
//!   for the same field and is passed in explicitly,
//! - the field starts visible; the condition evaluator decides later,
//! - `conditions` defaults to an empty list and must otherwise be a list of
//!   AND groups, each a mapping or a list of mappings.
//!
//! Conditions are validated before the value store is touched, so a broken
//! schema never writes defaults.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::core::ConditionGroup;
use crate::core::ConfigurationError;
use crate::core::FieldSchema;
use crate::core::FieldState;
use crate::core::FieldType;
use crate::interfaces::Translator;
use crate::interfaces::ValueStore;
use crate::runtime::builder::BuildError;
use crate::runtime::context::ResolutionContext;
use crate::runtime::value::ValueResolver;
use crate::runtime::widget::ADMIN_DOMAIN;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Translation key for the additional-classes title.
pub const ADDITIONAL_CLASSES_TITLE: &str = "Additional";

/// Suffix appended to the editable id to name the additional-classes field.
pub const ADDITIONAL_CLASSES_SUFFIX: &str = "AdditionalClasses";

/// Pass-through keys that would collide with resolved state keys.
const RESERVED_STATE_KEYS: [&str; 4] = ["name", "edit_reload", "editmode_hidden", "selected_value"];

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Resolves field metadata and runtime state.
pub struct AdditionalConfigResolver<'a, T, S> {
    /// Translator for synthetic titles.
    translator: &'a T,
    /// Value resolver for selected values.
    values: ValueResolver<'a, S>,
}

impl<'a, T: Translator, S: ValueStore> AdditionalConfigResolver<'a, T, S> {
    /// Creates a resolver from a translator and a value resolver.
    #[must_use]
    pub const fn new(translator: &'a T, values: ValueResolver<'a, S>) -> Self {
        Self {
            translator,
            values,
        }
    }

    /// Resolves the state of one declared field.
    ///
    /// Returns `None` for a null declaration.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Configuration`] when conditions are malformed and
    /// [`BuildError::Store`] when the value store fails.
    pub fn resolve(
        &self,
        ctx: &ResolutionContext<'_>,
        name: &str,
        schema: Option<&FieldSchema>,
        edit_reload: bool,
    ) -> Result<Option<FieldState>, BuildError> {
        let Some(schema) = schema else {
            return Ok(None);
        };

        let conditions = parse_conditions(name, schema.conditions.as_ref())?;

        let (field_type, field_name, title) = if schema.field_type.is_additional_classes() {
            (
                FieldType::Input,
                format!("{}{ADDITIONAL_CLASSES_SUFFIX}", ctx.editable_id),
                Some(self.translator.translate(ADDITIONAL_CLASSES_TITLE, ADMIN_DOMAIN)),
            )
        } else {
            (schema.field_type.clone(), name.to_string(), schema.title.clone())
        };

        let selected_value =
            self.values.resolve(ctx, &field_type, &field_name, schema.default_value())?;

        let mut extra = schema.extra.clone();
        for key in RESERVED_STATE_KEYS {
            extra.remove(key);
        }

        Ok(Some(FieldState {
            name: field_name,
            field_type,
            title,
            description: schema.description.clone(),
            edit_reload,
            editmode_hidden: false,
            selected_value,
            conditions,
            extra,
        }))
    }
}

// ============================================================================
// SECTION: Condition Parsing
// ============================================================================

/// Parses raw conditions into ordered AND groups.
///
/// # Errors
///
/// Returns [`ConfigurationError::InvalidConditions`] when the value is not a
/// list of groups, or a group is neither a mapping nor a list of mappings.
pub fn parse_conditions(
    field: &str,
    raw: Option<&Value>,
) -> Result<Vec<ConditionGroup>, ConfigurationError> {
    let groups = match raw {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(groups)) => groups,
        Some(_) => {
            return Err(ConfigurationError::InvalidConditions {
                field: field.to_string(),
                reason: "expected a list".to_string(),
            });
        }
    };

    groups
        .iter()
        .enumerate()
        .map(|(index, group)| parse_condition_group(field, index, group))
        .collect()
}

/// Parses one AND group, given either as a mapping or as a list of mappings.
///
/// Entries of a listed group are merged in order; a repeated field name keeps
/// its last expected value.
fn parse_condition_group(
    field: &str,
    index: usize,
    group: &Value,
) -> Result<ConditionGroup, ConfigurationError> {
    let invalid = |reason: String| ConfigurationError::InvalidConditions {
        field: field.to_string(),
        reason,
    };
    match group {
        Value::Object(entries) => Ok(entries
            .iter()
            .map(|(key, expected)| (key.clone(), expected.clone()))
            .collect()),
        Value::Array(items) => {
            let mut merged = ConditionGroup::new();
            for (position, item) in items.iter().enumerate() {
                let Value::Object(entries) = item else {
                    return Err(invalid(format!("group {index} item {position} is not a mapping")));
                };
                merged.extend(
                    entries.iter().map(|(key, expected)| (key.clone(), expected.clone())),
                );
            }
            Ok(merged)
        }
        _ => Err(invalid(format!("group {index} is not a mapping"))),
    }
}

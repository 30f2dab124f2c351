// crates/brick-config-core/src/runtime/widget.rs
// ============================================================================
// Module: Tag Config Resolver
// Description: Derives the widget configuration for one field.
// Purpose: Normalize reload, default dimensions, and translate option stores.
// Dependencies: crate::core, crate::interfaces, crate::runtime::{context, policy}
// ============================================================================

//! ## Overview
//! The resolver turns a field's raw widget options into a [`WidgetConfig`]:
//! - widget reload is always suppressed; the configured reload is returned
//!   separately as [`TagResolution::edit_reload`],
//! - width and height are kept or defaulted only for capable types and
//!   dropped otherwise; an explicit value that is not a whole pixel count
//!   (`"100%"`, `150.5`) is passed through unchanged as a widget option,
//! - option stores are translated into ordered `(key, label)` pairs for
//!   store-requiring types and dropped otherwise.
//!
//! A store-requiring type that declares an empty store is a broken schema.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;

use crate::core::ConfigurationError;
use crate::core::FieldType;
use crate::core::RawWidgetConfig;
use crate::core::StoreEntry;
use crate::core::WidgetConfig;
use crate::core::values;
use crate::interfaces::Translator;
use crate::runtime::context::ResolutionContext;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Translation domain for editing-dialog labels.
pub const ADMIN_DOMAIN: &str = "admin";

// ============================================================================
// SECTION: Resolution Output
// ============================================================================

/// Result of resolving one field's widget options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagResolution {
    /// Resolved widget configuration.
    pub widget: WidgetConfig,
    /// Reload behavior configured for the field, for the host to act on.
    pub edit_reload: bool,
}

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Resolves raw widget options into widget configuration.
pub struct TagConfigResolver<'t, T> {
    /// Translator for store labels.
    translator: &'t T,
}

impl<'t, T: Translator> TagConfigResolver<'t, T> {
    /// Creates a resolver using the given translator.
    #[must_use]
    pub const fn new(translator: &'t T) -> Self {
        Self {
            translator,
        }
    }

    /// Resolves widget configuration for a field of `field_type`.
    ///
    /// An absent raw config yields an empty widget config and no reload.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when a store-requiring type declares an
    /// empty or malformed store.
    pub fn resolve(
        &self,
        ctx: &ResolutionContext<'_>,
        field_type: &FieldType,
        raw: Option<&RawWidgetConfig>,
    ) -> Result<TagResolution, ConfigurationError> {
        let Some(raw) = raw else {
            return Ok(TagResolution::default());
        };

        let edit_reload = raw.reload != Some(Value::Bool(false));
        let mut options = raw.options.clone();

        let width = if ctx.policy.has_dynamic_width(field_type) {
            let fallback = ctx.dimensions.width_for(ctx.window_size);
            resolve_dimension(raw.width.as_ref(), fallback, "width", &mut options)
        } else {
            None
        };

        let height = if ctx.policy.has_dynamic_height(field_type) {
            let fallback = ctx.dimensions.default_height;
            resolve_dimension(raw.height.as_ref(), fallback, "height", &mut options)
        } else {
            None
        };

        let store = match &raw.store {
            Some(store) if ctx.policy.needs_store(field_type) => {
                self.translate_store(ctx, field_type, store)?
            }
            _ => None,
        };

        Ok(TagResolution {
            widget: WidgetConfig {
                reload: Some(false),
                width,
                height,
                store,
                default: raw.default.clone(),
                options,
            },
            edit_reload,
        })
    }

    /// Translates a declared store into ordered entries.
    fn translate_store(
        &self,
        ctx: &ResolutionContext<'_>,
        field_type: &FieldType,
        store: &Value,
    ) -> Result<Option<Vec<StoreEntry>>, ConfigurationError> {
        if store.is_null() {
            return Ok(None);
        }
        if values::is_empty(store) {
            return Err(ConfigurationError::MissingStore {
                field_type: field_type.clone(),
                editable_id: ctx.editable_id.to_string(),
            });
        }

        let entries: Vec<(String, &Value)> = match store {
            Value::Object(map) => map.iter().map(|(key, value)| (key.clone(), value)).collect(),
            Value::Array(items) => {
                items.iter().enumerate().map(|(index, value)| (index.to_string(), value)).collect()
            }
            _ => {
                return Err(invalid_store(ctx, field_type, "expected a mapping or a list"));
            }
        };

        let mut out = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let Some(label) = store_label(value) else {
                return Err(invalid_store(
                    ctx,
                    field_type,
                    &format!("entry {key} has no usable label"),
                ));
            };
            out.push(StoreEntry(key, self.translator.translate(&label, ADMIN_DOMAIN)));
        }
        Ok(Some(out))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves one dimension of a capable type.
///
/// Absent or null falls back to the configured default. Whole non-negative
/// numbers that fit a `u32` become the dimension; any other value is moved
/// into `options` under `key` and no typed dimension is emitted.
fn resolve_dimension(
    raw: Option<&Value>,
    fallback: u32,
    key: &str,
    options: &mut Map<String, Value>,
) -> Option<u32> {
    match raw {
        None | Some(Value::Null) => Some(fallback),
        Some(value) => pixel_count(value).or_else(|| {
            options.insert(key.to_string(), value.clone());
            None
        }),
    }
}

/// Reads a whole pixel count from a JSON number.
fn pixel_count(value: &Value) -> Option<u32> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(whole) = number.as_u64() {
        return u32::try_from(whole).ok();
    }
    // Whole floats display without a fraction, e.g. `150.0` as `150`.
    number.as_f64()?.to_string().parse().ok()
}

/// Extracts the untranslated label of a store entry.
fn store_label(value: &Value) -> Option<String> {
    match value {
        Value::Object(entry) => entry.get("name").and_then(scalar_label),
        other => scalar_label(other),
    }
}

/// Renders a scalar as a label.
fn scalar_label(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Builds an invalid-store error for the current field.
fn invalid_store(
    ctx: &ResolutionContext<'_>,
    field_type: &FieldType,
    reason: &str,
) -> ConfigurationError {
    ConfigurationError::InvalidStore {
        field_type: field_type.clone(),
        editable_id: ctx.editable_id.to_string(),
        reason: reason.to_string(),
    }
}

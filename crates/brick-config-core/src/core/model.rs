// crates/brick-config-core/src/core/model.rs
// ============================================================================
// Module: Resolved Field Model
// Description: Output types produced by config resolution.
// Purpose: Provide the serializable render model handed to the host renderer.
// Dependencies: crate::core::field_type, serde, serde_json
// ============================================================================

//! ## Overview
//! Resolution turns each declared field into a [`ResolvedField`]: a
//! [`WidgetConfig`] for the editing control plus a [`FieldState`] with the
//! field's metadata, selected value, and visibility. Serialized key names
//! match what the host's field-set template reads (`tag_config`,
//! `additional_config`, `edit_reload`, `editmode_hidden`, `selected_value`).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::core::field_type::FieldType;

// ============================================================================
// SECTION: Document Context
// ============================================================================

/// Opaque identity of the document being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(u64);

impl DocumentId {
    /// Creates a document identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Document the build is scoped to; used only as a value-store key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentContext {
    /// Document identifier.
    pub id: DocumentId,
}

impl DocumentContext {
    /// Creates a document context for the given identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self {
            id: DocumentId::new(id),
        }
    }
}

// ============================================================================
// SECTION: Window Size
// ============================================================================

/// Block-level sizing preset governing default widget dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowSize {
    /// Narrow editing window.
    #[default]
    Small,
    /// Wide editing window.
    Large,
}

impl WindowSize {
    /// Derives the window size from a block parameter; anything but `large` is small.
    #[must_use]
    pub fn from_parameter(value: Option<&str>) -> Self {
        match value {
            Some("large") => Self::Large,
            _ => Self::Small,
        }
    }
}

// ============================================================================
// SECTION: Widget Config
// ============================================================================

/// Option store entry: key plus translated label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreEntry(pub String, pub String);

impl StoreEntry {
    /// Returns the option key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.0
    }

    /// Returns the translated label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.1
    }
}

/// Resolved widget configuration for one field.
///
/// # Invariants
/// - `reload` is `Some(false)` whenever options were declared and `None`
///   otherwise; the configured reload is surfaced on
///   [`FieldState::edit_reload`].
/// - `width`/`height`/`store` are present only for capable types.
/// - A field without declared options serializes as an empty object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Widget-level auto reload (always suppressed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reload: Option<bool>,
    /// Widget width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Widget height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Ordered option store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<Vec<StoreEntry>>,
    /// Declared default, used when the field is reset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Widget options passed through unchanged.
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

// ============================================================================
// SECTION: Field State
// ============================================================================

/// One AND group: every named field must loosely equal its expected value.
pub type ConditionGroup = BTreeMap<String, Value>;

/// Metadata and runtime state for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldState {
    /// Field name (unique key within the block).
    pub name: String,
    /// Effective field type (after synthetic rewrites).
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Field title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Field description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Configured reload behavior for the host.
    pub edit_reload: bool,
    /// Whether conditions hide the field in the editing dialog.
    pub editmode_hidden: bool,
    /// Effective selected value; `None` when absent.
    pub selected_value: Option<Value>,
    /// OR-of-AND visibility condition groups.
    pub conditions: Vec<ConditionGroup>,
    /// Descriptive keys passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldState {
    /// Returns true when the field has no visibility conditions.
    #[must_use]
    pub fn is_unconditional(&self) -> bool {
        self.conditions.is_empty()
    }
}

// ============================================================================
// SECTION: Resolved Field
// ============================================================================

/// Unit the condition evaluator operates on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedField {
    /// Widget configuration.
    #[serde(rename = "tag_config")]
    pub widget: WidgetConfig,
    /// Field state; `None` for a null declaration.
    #[serde(rename = "additional_config")]
    pub state: Option<FieldState>,
}

impl ResolvedField {
    /// Returns the field name when state is present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.state.as_ref().map(|state| state.name.as_str())
    }

    /// Returns true when the field is hidden by its conditions.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.state.as_ref().is_some_and(|state| state.editmode_hidden)
    }
}

// ============================================================================
// SECTION: Render Payload
// ============================================================================

/// Fully resolved payload handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPayload {
    /// Resolved fields in declaration order.
    pub config_elements: Vec<ResolvedField>,
    /// Name of the block editable the fields belong to.
    pub document_editable_name: String,
    /// Window size used for dimension defaults.
    pub window_size: WindowSize,
    /// Document the build was scoped to.
    pub document: DocumentContext,
}

// crates/brick-config-core/src/interfaces/mod.rs
// ============================================================================
// Module: Brick Config Interfaces
// Description: Host-facing contracts for translation, storage, and rendering.
// Purpose: Define the narrow collaborator surfaces used by the resolvers.
// Dependencies: crate::core, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The resolvers never talk to a host framework directly. Translation, the
//! authoring-time value store, template rendering, and the edit context are
//! consumed through the traits below so any host can plug in its own
//! implementations.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use thiserror::Error;

use crate::core::DocumentContext;
use crate::core::FieldType;
use crate::core::RenderPayload;

// ============================================================================
// SECTION: Translator
// ============================================================================

/// Message translator.
pub trait Translator {
    /// Translates `key` within `domain`, returning the key when untranslated.
    fn translate(&self, key: &str, domain: &str) -> String;
}

// ============================================================================
// SECTION: Value Store
// ============================================================================

/// Current authoring-time value of one named field.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredValue {
    /// Raw stored data; `Value::Null` when unset.
    pub data: Value,
    /// Whether the store considers the value empty.
    ///
    /// Checkbox fields report empty only when unset, not when unchecked.
    pub empty: bool,
}

impl StoredValue {
    /// Stored value representing an unset field.
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            data: Value::Null,
            empty: true,
        }
    }
}

/// Value store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store reported an error.
    #[error("value store error: {0}")]
    Store(String),
}

/// Read/write access to a single named field's value, scoped per document.
pub trait ValueStore {
    /// Reads the current value for a field.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the value cannot be read.
    fn get_value(
        &self,
        document: &DocumentContext,
        field_type: &FieldType,
        name: &str,
    ) -> Result<StoredValue, StoreError>;

    /// Writes a value for a field; `None` clears it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the value cannot be written.
    fn set_value(
        &self,
        document: &DocumentContext,
        field_type: &FieldType,
        name: &str,
        value: Option<&Value>,
    ) -> Result<(), StoreError>;
}

// ============================================================================
// SECTION: Renderer
// ============================================================================

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Renderer reported an error.
    #[error("render error: {0}")]
    Render(String),
}

/// Template renderer receiving the resolved payload.
pub trait Renderer {
    /// Renders the payload with the given template.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when rendering fails.
    fn render(&self, template_id: &str, payload: &RenderPayload) -> Result<String, RenderError>;
}

// ============================================================================
// SECTION: Edit Context
// ============================================================================

/// Host context the build is invoked from.
pub trait EditContext {
    /// Returns true when the current request is an authoring/edit request.
    fn is_editable(&self) -> bool;

    /// Returns the document being rendered.
    fn document(&self) -> &DocumentContext;
}

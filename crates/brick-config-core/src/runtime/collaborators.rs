// crates/brick-config-core/src/runtime/collaborators.rs
// ============================================================================
// Module: Reference Collaborators
// Description: Minimal translator, renderer, and edit context implementations.
// Purpose: Let hosts and tests run builds without a full framework.
// Dependencies: crate::core, crate::interfaces, serde_json
// ============================================================================

//! ## Overview
//! - [`CatalogTranslator`] looks messages up in a `(domain, key)` catalog and
//!   falls back to the key.
//! - [`JsonRenderer`] ignores the template and serializes the payload, for
//!   hosts that render the field set client-side.
//! - [`AuthoringContext`] is a plain [`EditContext`] value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::DocumentContext;
use crate::core::RenderPayload;
use crate::interfaces::EditContext;
use crate::interfaces::RenderError;
use crate::interfaces::Renderer;
use crate::interfaces::Translator;

// ============================================================================
// SECTION: Translator
// ============================================================================

/// Catalog-backed translator with key fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogTranslator {
    /// Messages keyed by `(domain, key)`.
    messages: BTreeMap<(String, String), String>,
}

impl CatalogTranslator {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message to the catalog.
    #[must_use]
    pub fn with_message(mut self, domain: &str, key: &str, message: &str) -> Self {
        self.messages.insert((domain.to_string(), key.to_string()), message.to_string());
        self
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, key: &str, domain: &str) -> String {
        self.messages
            .get(&(domain.to_string(), key.to_string()))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

// ============================================================================
// SECTION: Renderer
// ============================================================================

/// Renderer that serializes the payload as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, _template_id: &str, payload: &RenderPayload) -> Result<String, RenderError> {
        serde_json::to_string(payload).map_err(|err| RenderError::Render(err.to_string()))
    }
}

// ============================================================================
// SECTION: Edit Context
// ============================================================================

/// Plain edit context value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoringContext {
    /// Whether the request is an authoring request.
    pub editable: bool,
    /// Document being rendered.
    pub document: DocumentContext,
}

impl AuthoringContext {
    /// Creates an editable context for a document.
    #[must_use]
    pub const fn editing(document: DocumentContext) -> Self {
        Self {
            editable: true,
            document,
        }
    }

    /// Creates a read-only context for a document.
    #[must_use]
    pub const fn viewing(document: DocumentContext) -> Self {
        Self {
            editable: false,
            document,
        }
    }
}

impl EditContext for AuthoringContext {
    fn is_editable(&self) -> bool {
        self.editable
    }

    fn document(&self) -> &DocumentContext {
        &self.document
    }
}

// crates/brick-config-core/src/core/mod.rs
// ============================================================================
// Module: Brick Config Core Types
// Description: Canonical schema, field vocabulary, and render model types.
// Purpose: Provide stable, serializable types for config resolution.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Core types describe what a block declares ([`schema`]), the fixed field
//! vocabulary ([`field_type`]), value semantics ([`values`]), and what
//! resolution produces ([`model`]). All entities are build-scoped: created
//! fresh per invocation and never cached.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod error;
pub mod field_type;
pub mod model;
pub mod schema;
pub mod values;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::ConfigurationError;
pub use field_type::FieldType;
pub use model::ConditionGroup;
pub use model::DocumentContext;
pub use model::DocumentId;
pub use model::FieldState;
pub use model::RenderPayload;
pub use model::ResolvedField;
pub use model::StoreEntry;
pub use model::WidgetConfig;
pub use model::WindowSize;
pub use schema::BrickConfigNode;
pub use schema::ConfigElements;
pub use schema::ConfigParameter;
pub use schema::FieldSchema;
pub use schema::RawWidgetConfig;

// crates/brick-config-core/src/lib.rs
// ============================================================================
// Module: Brick Config Core Library
// Description: Public API surface for brick config resolution.
// Purpose: Expose core types, host interfaces, audit sinks, and the runtime.
// Dependencies: crate::{audit, core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Brick config resolution turns the declared editable fields of a content
//! block into a render model for the authoring dialog: per-field widget
//! configuration, per-field selected value and visibility, with inter-field
//! visibility conditions evaluated and hidden fields reset. It integrates
//! with the host through explicit interfaces for translation, value storage,
//! and rendering, and is a no-op outside authoring contexts.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use audit::BuildAuditEvent;
pub use audit::BuildAuditSink;
pub use audit::FileAuditSink;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use interfaces::EditContext;
pub use interfaces::RenderError;
pub use interfaces::Renderer;
pub use interfaces::StoreError;
pub use interfaces::StoredValue;
pub use interfaces::Translator;
pub use interfaces::ValueStore;
pub use runtime::AuthoringContext;
pub use runtime::BrickConfigBuilder;
pub use runtime::BuildError;
pub use runtime::BuildOutcome;
pub use runtime::BuildRequest;
pub use runtime::BuilderConfig;
pub use runtime::CatalogTranslator;
pub use runtime::ConditionEvaluator;
pub use runtime::InMemoryValueStore;
pub use runtime::JsonRenderer;
pub use runtime::ResolutionContext;
pub use runtime::TypeCapabilityPolicy;
pub use runtime::WidgetDimensions;

// crates/brick-config-core/src/runtime/mod.rs
// ============================================================================
// Module: Brick Config Runtime
// Description: Resolvers, condition evaluation, and the build orchestrator.
// Purpose: Turn a declared config node into a rendered field set.
// Dependencies: crate::{audit, core, interfaces}, condition-logic
// ============================================================================

//! ## Overview
//! Data flows leaves first: [`policy`] answers capability questions,
//! [`widget`] resolves widget config, [`value`] resolves selected values,
//! [`field_state`] builds field metadata, [`condition`] decides visibility
//! across the block, and [`builder`] drives them in order.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod builder;
pub mod collaborators;
pub mod condition;
pub mod context;
pub mod field_state;
pub mod policy;
pub mod store;
pub mod value;
pub mod widget;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use builder::BrickConfigBuilder;
pub use builder::BuildError;
pub use builder::BuildOutcome;
pub use builder::BuildRequest;
pub use builder::BuilderConfig;
pub use builder::DEFAULT_FIELD_SET_TEMPLATE;
pub use builder::RenderedBrick;
pub use collaborators::AuthoringContext;
pub use collaborators::CatalogTranslator;
pub use collaborators::JsonRenderer;
pub use condition::ConditionEvaluator;
pub use condition::FieldEquals;
pub use condition::SelectionSnapshot;
pub use context::ResolutionContext;
pub use field_state::AdditionalConfigResolver;
pub use policy::TypeCapabilityPolicy;
pub use policy::WidgetDimensions;
pub use store::InMemoryValueStore;
pub use value::ValueResolver;
pub use widget::TagConfigResolver;
pub use widget::TagResolution;

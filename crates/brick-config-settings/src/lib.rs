// crates/brick-config-settings/src/lib.rs
// ============================================================================
// Module: Brick Config Settings Library
// Description: Canonical settings model, validation, and schema loading.
// Purpose: Single source of truth for brick-config.toml semantics.
// Dependencies: brick-config-core, serde, serde_json, serde_yaml, toml
// ============================================================================

//! ## Overview
//! `brick-config-settings` loads deployment settings (capability tables,
//! default dimensions, render template, audit sink) from TOML with strict,
//! fail-closed validation, and loads block config nodes from YAML or JSON
//! while preserving element declaration order.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod schema;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use schema::load_brick_schema;
pub use schema::parse_brick_schema_json;
pub use schema::parse_brick_schema_yaml;

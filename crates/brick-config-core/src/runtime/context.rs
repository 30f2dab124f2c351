// crates/brick-config-core/src/runtime/context.rs
// ============================================================================
// Module: Resolution Context
// Description: Immutable per-build inputs shared by every resolver call.
// Purpose: Replace implicit builder state with an explicit value.
// Dependencies: crate::core, crate::runtime::policy
// ============================================================================

//! ## Overview
//! A [`ResolutionContext`] is created once per build and borrowed by each
//! resolver. Nothing in it changes during the build; per-field decisions
//! (like the reload flag) are passed between resolvers as explicit values.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::DocumentContext;
use crate::core::WindowSize;
use crate::runtime::policy::TypeCapabilityPolicy;
use crate::runtime::policy::WidgetDimensions;

// ============================================================================
// SECTION: Resolution Context
// ============================================================================

/// Build-scoped inputs for config resolution.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext<'a> {
    /// Document the build is scoped to.
    pub document: &'a DocumentContext,
    /// Block editable identifier (used for synthetic names and diagnostics).
    pub editable_id: &'a str,
    /// Window size derived from block parameters.
    pub window_size: WindowSize,
    /// Capability tables.
    pub policy: &'a TypeCapabilityPolicy,
    /// Default widget dimensions.
    pub dimensions: &'a WidgetDimensions,
}

// crates/brick-config-core/src/core/error.rs
// ============================================================================
// Module: Configuration Errors
// Description: Fatal schema errors raised during config resolution.
// Purpose: Name the broken field and block so hosts can surface the failure.
// Dependencies: crate::core::field_type, thiserror
// ============================================================================

//! ## Overview
//! A malformed field schema invalidates the whole block. These errors are
//! never recovered locally; they propagate to the host render pipeline.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::field_type::FieldType;

// ============================================================================
// SECTION: Configuration Error
// ============================================================================

/// Broken field schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A store-requiring type declared its store key with an empty value.
    #[error("{field_type} ({editable_id}) has no valid configured store")]
    MissingStore {
        /// Declared field type.
        field_type: FieldType,
        /// Block editable identifier.
        editable_id: String,
    },
    /// A declared store is not a mapping or list, or an entry has no label.
    #[error("{field_type} ({editable_id}) has an invalid store: {reason}")]
    InvalidStore {
        /// Declared field type.
        field_type: FieldType,
        /// Block editable identifier.
        editable_id: String,
        /// What was wrong with the store.
        reason: String,
    },
    /// `conditions` is present but not a list of AND-group mappings.
    #[error("conditions configuration for {field} needs to be a list of condition groups: {reason}")]
    InvalidConditions {
        /// Field name.
        field: String,
        /// What was wrong with the conditions.
        reason: String,
    },
}

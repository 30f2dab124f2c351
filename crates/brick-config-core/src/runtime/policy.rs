// crates/brick-config-core/src/runtime/policy.rs
// ============================================================================
// Module: Type Capability Policy
// Description: Static capability tables keyed by field type.
// Purpose: Answer which types carry a store, a dynamic width, or a dynamic height.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Capabilities are data, not code: the three tables below are plain sets of
//! [`FieldType`] tags with built-in defaults, and hosts may replace them via
//! settings without touching resolver logic. Default widget dimensions live
//! alongside in [`WidgetDimensions`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use crate::core::FieldType;
use crate::core::WindowSize;

// ============================================================================
// SECTION: Built-in Tables
// ============================================================================

/// Types that require an option store.
pub const DEFAULT_STORE_TYPES: [FieldType; 3] =
    [FieldType::Select, FieldType::Multiselect, FieldType::AdditionalClasses];

/// Types whose widget width can be set or defaulted.
pub const DEFAULT_DYNAMIC_WIDTH_TYPES: [FieldType; 16] = [
    FieldType::Multihref,
    FieldType::Href,
    FieldType::Image,
    FieldType::Input,
    FieldType::Multiselect,
    FieldType::Numeric,
    FieldType::Embed,
    FieldType::Pdf,
    FieldType::Renderlet,
    FieldType::Select,
    FieldType::Snippet,
    FieldType::Table,
    FieldType::Textarea,
    FieldType::Video,
    FieldType::Wysiwyg,
    FieldType::Parallaximage,
];

/// Types whose widget height can be set or defaulted.
pub const DEFAULT_DYNAMIC_HEIGHT_TYPES: [FieldType; 11] = [
    FieldType::Multihref,
    FieldType::Image,
    FieldType::Multiselect,
    FieldType::Embed,
    FieldType::Pdf,
    FieldType::Renderlet,
    FieldType::Snippet,
    FieldType::Textarea,
    FieldType::Video,
    FieldType::Wysiwyg,
    FieldType::Parallaximage,
];

/// Default width for small windows.
pub const DEFAULT_SMALL_WIDTH: u32 = 560;
/// Default width for large windows.
pub const DEFAULT_LARGE_WIDTH: u32 = 760;
/// Default widget height.
pub const DEFAULT_HEIGHT: u32 = 200;

// ============================================================================
// SECTION: Capability Policy
// ============================================================================

/// Capability tables keyed by field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCapabilityPolicy {
    /// Types that require an option store.
    store_types: BTreeSet<FieldType>,
    /// Types with a dynamic width.
    width_types: BTreeSet<FieldType>,
    /// Types with a dynamic height.
    height_types: BTreeSet<FieldType>,
}

impl Default for TypeCapabilityPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_TYPES, DEFAULT_DYNAMIC_WIDTH_TYPES, DEFAULT_DYNAMIC_HEIGHT_TYPES)
    }
}

impl TypeCapabilityPolicy {
    /// Creates a policy from explicit tables.
    #[must_use]
    pub fn new(
        store_types: impl IntoIterator<Item = FieldType>,
        width_types: impl IntoIterator<Item = FieldType>,
        height_types: impl IntoIterator<Item = FieldType>,
    ) -> Self {
        Self {
            store_types: store_types.into_iter().collect(),
            width_types: width_types.into_iter().collect(),
            height_types: height_types.into_iter().collect(),
        }
    }

    /// Returns true when the type requires an option store.
    #[must_use]
    pub fn needs_store(&self, field_type: &FieldType) -> bool {
        self.store_types.contains(field_type)
    }

    /// Returns true when the type carries a widget width.
    #[must_use]
    pub fn has_dynamic_width(&self, field_type: &FieldType) -> bool {
        self.width_types.contains(field_type)
    }

    /// Returns true when the type carries a widget height.
    #[must_use]
    pub fn has_dynamic_height(&self, field_type: &FieldType) -> bool {
        self.height_types.contains(field_type)
    }
}

// ============================================================================
// SECTION: Widget Dimensions
// ============================================================================

/// Default widget dimensions applied to capable types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetDimensions {
    /// Width used when the window size is small.
    pub small_width: u32,
    /// Width used when the window size is large.
    pub large_width: u32,
    /// Height used for height-capable types.
    pub default_height: u32,
}

impl Default for WidgetDimensions {
    fn default() -> Self {
        Self {
            small_width: DEFAULT_SMALL_WIDTH,
            large_width: DEFAULT_LARGE_WIDTH,
            default_height: DEFAULT_HEIGHT,
        }
    }
}

impl WidgetDimensions {
    /// Returns the default width for the window size.
    #[must_use]
    pub const fn width_for(&self, window_size: WindowSize) -> u32 {
        match window_size {
            WindowSize::Large => self.large_width,
            WindowSize::Small => self.small_width,
        }
    }
}

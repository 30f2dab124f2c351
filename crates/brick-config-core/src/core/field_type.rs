// crates/brick-config-core/src/core/field_type.rs
// ============================================================================
// Module: Field Type Vocabulary
// Description: Closed set of editable field type tags.
// Purpose: Replace string dispatch on type tags with an exhaustive enum.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Field types (de)serialize as their host tag (`"select"`, `"checkbox"`, ...).
//! Tags outside the built-in vocabulary are preserved as
//! [`FieldType::Custom`] so host-specific editables still flow through the
//! resolvers; capability tables decide what they may carry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Field Type
// ============================================================================

/// Editable field type tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    /// Synthetic slot for extra CSS classes; rewritten to [`FieldType::Input`].
    AdditionalClasses,
    /// Nested area block.
    Areablock,
    /// Boolean checkbox; selected value is its checked state.
    Checkbox,
    /// Date picker.
    Date,
    /// Embedded remote content.
    Embed,
    /// Single element reference.
    Href,
    /// Image reference.
    Image,
    /// Single-line text input.
    Input,
    /// Link editor.
    Link,
    /// Multiple element references.
    Multihref,
    /// Multi-value option list.
    Multiselect,
    /// Numeric input.
    Numeric,
    /// Parallax image reference.
    Parallaximage,
    /// PDF reference.
    Pdf,
    /// Rendered element reference.
    Renderlet,
    /// Single-value option list.
    Select,
    /// Snippet reference.
    Snippet,
    /// Table editor.
    Table,
    /// Multi-line text input.
    Textarea,
    /// Video reference.
    Video,
    /// Rich text editor.
    Wysiwyg,
    /// Host-specific tag outside the built-in vocabulary.
    Custom(String),
}

impl FieldType {
    /// Built-in vocabulary in tag order.
    pub const BUILTIN: [Self; 21] = [
        Self::AdditionalClasses,
        Self::Areablock,
        Self::Checkbox,
        Self::Date,
        Self::Embed,
        Self::Href,
        Self::Image,
        Self::Input,
        Self::Link,
        Self::Multihref,
        Self::Multiselect,
        Self::Numeric,
        Self::Parallaximage,
        Self::Pdf,
        Self::Renderlet,
        Self::Select,
        Self::Snippet,
        Self::Table,
        Self::Textarea,
        Self::Video,
        Self::Wysiwyg,
    ];

    /// Returns the host tag for this type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AdditionalClasses => "additionalClasses",
            Self::Areablock => "areablock",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
            Self::Embed => "embed",
            Self::Href => "href",
            Self::Image => "image",
            Self::Input => "input",
            Self::Link => "link",
            Self::Multihref => "multihref",
            Self::Multiselect => "multiselect",
            Self::Numeric => "numeric",
            Self::Parallaximage => "parallaximage",
            Self::Pdf => "pdf",
            Self::Renderlet => "renderlet",
            Self::Select => "select",
            Self::Snippet => "snippet",
            Self::Table => "table",
            Self::Textarea => "textarea",
            Self::Video => "video",
            Self::Wysiwyg => "wysiwyg",
            Self::Custom(tag) => tag,
        }
    }

    /// Parses a host tag, falling back to [`FieldType::Custom`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        Self::BUILTIN
            .iter()
            .find(|builtin| builtin.as_str() == tag)
            .cloned()
            .unwrap_or_else(|| Self::Custom(tag.to_string()))
    }

    /// Returns true for the synthetic additional-classes slot.
    #[must_use]
    pub const fn is_additional_classes(&self) -> bool {
        matches!(self, Self::AdditionalClasses)
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Custom(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

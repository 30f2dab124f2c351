// crates/brick-config-core/src/core/schema.rs
// ============================================================================
// Module: Brick Config Schema
// Description: Declarative input schema for a content block's config elements.
// Purpose: Deserialize config nodes while preserving declaration order.
// Dependencies: crate::core::field_type, serde, serde_json
// ============================================================================

//! ## Overview
//! A brick's config node declares its editable fields under
//! `configElements` (an ordered mapping of field name to [`FieldSchema`]) and
//! block-level parameters under `configParameter`. Declaration order is
//! significant: it is the rendering order and the condition evaluation order,
//! so the mapping is deserialized into an ordered sequence rather than a
//! hash map.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;
use serde_json::Map;
use serde_json::Value;

use crate::core::field_type::FieldType;

// ============================================================================
// SECTION: Raw Widget Config
// ============================================================================

/// Raw widget options declared under a field's `config` key.
///
/// `reload`, `width`, and `height` are kept as raw values; the tag config
/// resolver decides what they mean.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWidgetConfig {
    /// Whether the host should reload the block after the field changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reload: Option<Value>,
    /// Explicit widget width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Value>,
    /// Explicit widget height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Value>,
    /// Option store (map of key to label, or list of labels).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<Value>,
    /// Default value applied when the stored value is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Widget options not interpreted by the resolvers.
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

// ============================================================================
// SECTION: Field Schema
// ============================================================================

/// Declared config element for one editable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Field type tag.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Widget options consumed by the tag config resolver.
    #[serde(
        default,
        rename = "config",
        alias = "widgetConfig",
        skip_serializing_if = "Option::is_none"
    )]
    pub widget_config: Option<RawWidgetConfig>,
    /// Field title shown in the editing dialog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Field description shown in the editing dialog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw condition groups; validated during resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Value>,
    /// Descriptive keys passed through to the field state (e.g. `col_class`).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldSchema {
    /// Creates a schema with only a type set.
    #[must_use]
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            widget_config: None,
            title: None,
            description: None,
            conditions: None,
            extra: Map::new(),
        }
    }

    /// Returns the declared widget default, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&Value> {
        self.widget_config.as_ref().and_then(|config| config.default.as_ref())
    }
}

// ============================================================================
// SECTION: Config Elements
// ============================================================================

/// Config elements in declaration order; `None` marks a null declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigElements(Vec<(String, Option<FieldSchema>)>);

impl ConfigElements {
    /// Returns true when no elements are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of declared elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over elements in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&FieldSchema>)> {
        self.0.iter().map(|(name, schema)| (name.as_str(), schema.as_ref()))
    }

    /// Appends an element, keeping declaration order.
    pub fn push(&mut self, name: impl Into<String>, schema: FieldSchema) {
        self.0.push((name.into(), Some(schema)));
    }
}

impl FromIterator<(String, FieldSchema)> for ConfigElements {
    fn from_iter<I: IntoIterator<Item = (String, FieldSchema)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, schema)| (name, Some(schema))).collect())
    }
}

impl Serialize for ConfigElements {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, schema) in &self.0 {
            map.serialize_entry(name, schema)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ConfigElements {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ConfigElementsVisitor)
    }
}

/// Visitor that keeps map entries in document order.
struct ConfigElementsVisitor;

impl<'de> Visitor<'de> for ConfigElementsVisitor {
    type Value = ConfigElements;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a mapping of config element names to field schemas")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, schema)) = access.next_entry::<String, Option<FieldSchema>>()? {
            entries.push((name, schema));
        }
        Ok(ConfigElements(entries))
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(ConfigElements::default())
    }
}

// ============================================================================
// SECTION: Config Node
// ============================================================================

/// Block-level config node: declared elements plus block parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrickConfigNode {
    /// Declared config elements in order.
    #[serde(default)]
    pub config_elements: ConfigElements,
    /// Block-level parameters.
    #[serde(default)]
    pub config_parameter: ConfigParameter,
}

/// Block-level parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigParameter {
    /// Requested window size tag (`small` or `large`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_size: Option<String>,
    /// Parameters not interpreted by the resolvers.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// crates/brick-config-settings/src/schema.rs
// ============================================================================
// Module: Brick Schema Loading
// Description: Loads declared block config nodes from YAML or JSON.
// Purpose: Parse block schemas with strict limits and stable element order.
// Dependencies: brick-config-core, serde_json, serde_yaml
// ============================================================================

//! ## Overview
//! A block schema is the `configElements`/`configParameter` node a content
//! block declares. Files ending in `.yaml`/`.yml` are parsed as YAML and
//! files ending in `.json` as JSON; element order follows the document in
//! both cases.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use brick_config_core::BrickConfigNode;

use crate::config::SettingsError;
use crate::config::read_limited;

// ============================================================================
// SECTION: Loading
// ============================================================================

/// Supported schema encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SchemaFormat {
    /// YAML document.
    Yaml,
    /// JSON document.
    Json,
}

impl SchemaFormat {
    /// Picks the format from a file extension.
    fn from_path(path: &Path) -> Result<Self, SettingsError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(SettingsError::Invalid(format!(
                "unsupported schema file extension: {}",
                path.display()
            ))),
        }
    }
}

/// Loads a block schema from disk.
///
/// # Errors
///
/// Returns [`SettingsError`] when the file cannot be read, has an unsupported
/// extension, or does not parse as a config node.
pub fn load_brick_schema(path: &Path) -> Result<BrickConfigNode, SettingsError> {
    let format = SchemaFormat::from_path(path)?;
    let content = read_limited(path)?;
    match format {
        SchemaFormat::Yaml => parse_brick_schema_yaml(&content),
        SchemaFormat::Json => parse_brick_schema_json(&content),
    }
}

/// Parses a block schema from YAML text.
///
/// # Errors
///
/// Returns [`SettingsError::Parse`] when the text is not a valid config node.
pub fn parse_brick_schema_yaml(content: &str) -> Result<BrickConfigNode, SettingsError> {
    serde_yaml::from_str(content).map_err(|err| SettingsError::Parse(err.to_string()))
}

/// Parses a block schema from JSON text.
///
/// # Errors
///
/// Returns [`SettingsError::Parse`] when the text is not a valid config node.
pub fn parse_brick_schema_json(content: &str) -> Result<BrickConfigNode, SettingsError> {
    serde_json::from_str(content).map_err(|err| SettingsError::Parse(err.to_string()))
}

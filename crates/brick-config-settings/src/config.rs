// crates/brick-config-settings/src/config.rs
// ============================================================================
// Module: Brick Config Settings
// Description: Settings loading and validation for brick config resolution.
// Purpose: Provide strict, fail-closed settings parsing with hard limits.
// Dependencies: brick-config-core, serde, toml
// ============================================================================

//! ## Overview
//! Settings are loaded from a TOML file with strict size and path limits and
//! then validated. Every section is optional; an empty file yields the
//! built-in capability tables, 560/760/200 dimensions, the default field-set
//! template, and a no-op audit sink.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use brick_config_core::BuildAuditSink;
use brick_config_core::BuilderConfig;
use brick_config_core::FieldType;
use brick_config_core::FileAuditSink;
use brick_config_core::NoopAuditSink;
use brick_config_core::StderrAuditSink;
use brick_config_core::TypeCapabilityPolicy;
use brick_config_core::WidgetDimensions;
use brick_config_core::runtime::DEFAULT_FIELD_SET_TEMPLATE;
use brick_config_core::runtime::policy::DEFAULT_DYNAMIC_HEIGHT_TYPES;
use brick_config_core::runtime::policy::DEFAULT_DYNAMIC_WIDTH_TYPES;
use brick_config_core::runtime::policy::DEFAULT_HEIGHT;
use brick_config_core::runtime::policy::DEFAULT_LARGE_WIDTH;
use brick_config_core::runtime::policy::DEFAULT_SMALL_WIDTH;
use brick_config_core::runtime::policy::DEFAULT_STORE_TYPES;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default settings filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "brick-config.toml";
/// Environment variable used to override the settings path.
pub(crate) const CONFIG_ENV_VAR: &str = "BRICK_CONFIG_SETTINGS";
/// Maximum settings or schema file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of entries in one capability table.
pub(crate) const MAX_CAPABILITY_ENTRIES: usize = 256;

// ============================================================================
// SECTION: Settings Root
// ============================================================================

/// Brick config settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrickConfigSettings {
    /// Capability tables.
    #[serde(default)]
    pub capabilities: CapabilitySettings,
    /// Default widget dimensions.
    #[serde(default)]
    pub dimensions: DimensionSettings,
    /// Renderer settings.
    #[serde(default)]
    pub render: RenderSettings,
    /// Audit sink settings.
    #[serde(default)]
    pub audit: AuditSettings,
}

impl BrickConfigSettings {
    /// Loads settings from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let resolved = resolve_path(path)?;
        let content = read_limited(&resolved)?;
        let settings: Self =
            toml::from_str(&content).map_err(|err| SettingsError::Parse(err.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validates the settings for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when settings are invalid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.capabilities.validate()?;
        self.dimensions.validate()?;
        self.render.validate()?;
        self.audit.validate()?;
        Ok(())
    }

    /// Returns the capability policy described by these settings.
    #[must_use]
    pub fn policy(&self) -> TypeCapabilityPolicy {
        TypeCapabilityPolicy::new(
            self.capabilities.store_types.iter().cloned(),
            self.capabilities.dynamic_width_types.iter().cloned(),
            self.capabilities.dynamic_height_types.iter().cloned(),
        )
    }

    /// Returns the builder configuration described by these settings.
    #[must_use]
    pub fn builder_config(&self) -> BuilderConfig {
        BuilderConfig {
            policy: self.policy(),
            dimensions: self.dimensions.to_dimensions(),
            template: self.render.template.clone(),
        }
    }

    /// Opens the configured audit sink.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] when a file sink cannot be opened.
    pub fn audit_sink(&self) -> Result<Arc<dyn BuildAuditSink>, SettingsError> {
        self.audit.open()
    }
}

// ============================================================================
// SECTION: Capabilities
// ============================================================================

/// Capability tables keyed by field type tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CapabilitySettings {
    /// Types that require an option store.
    #[serde(default = "default_store_types")]
    pub store_types: Vec<FieldType>,
    /// Types with a dynamic width.
    #[serde(default = "default_dynamic_width_types")]
    pub dynamic_width_types: Vec<FieldType>,
    /// Types with a dynamic height.
    #[serde(default = "default_dynamic_height_types")]
    pub dynamic_height_types: Vec<FieldType>,
}

impl Default for CapabilitySettings {
    fn default() -> Self {
        Self {
            store_types: default_store_types(),
            dynamic_width_types: default_dynamic_width_types(),
            dynamic_height_types: default_dynamic_height_types(),
        }
    }
}

impl CapabilitySettings {
    /// Validates each capability table.
    fn validate(&self) -> Result<(), SettingsError> {
        validate_type_table("capabilities.store_types", &self.store_types)?;
        validate_type_table("capabilities.dynamic_width_types", &self.dynamic_width_types)?;
        validate_type_table("capabilities.dynamic_height_types", &self.dynamic_height_types)?;
        Ok(())
    }
}

/// Returns the built-in store table.
fn default_store_types() -> Vec<FieldType> {
    DEFAULT_STORE_TYPES.to_vec()
}

/// Returns the built-in dynamic width table.
fn default_dynamic_width_types() -> Vec<FieldType> {
    DEFAULT_DYNAMIC_WIDTH_TYPES.to_vec()
}

/// Returns the built-in dynamic height table.
fn default_dynamic_height_types() -> Vec<FieldType> {
    DEFAULT_DYNAMIC_HEIGHT_TYPES.to_vec()
}

/// Rejects oversized tables, blank tags, and duplicates.
fn validate_type_table(label: &str, types: &[FieldType]) -> Result<(), SettingsError> {
    if types.len() > MAX_CAPABILITY_ENTRIES {
        return Err(SettingsError::Invalid(format!("{label} exceeds {MAX_CAPABILITY_ENTRIES} entries")));
    }
    let mut seen = BTreeSet::new();
    for field_type in types {
        if field_type.as_str().trim().is_empty() {
            return Err(SettingsError::Invalid(format!("{label} contains a blank type tag")));
        }
        if !seen.insert(field_type) {
            return Err(SettingsError::Invalid(format!(
                "{label} contains duplicate type {field_type}"
            )));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Dimensions
// ============================================================================

/// Default widget dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DimensionSettings {
    /// Width for small windows.
    #[serde(default = "default_small_width")]
    pub small_width: u32,
    /// Width for large windows.
    #[serde(default = "default_large_width")]
    pub large_width: u32,
    /// Height for height-capable types.
    #[serde(default = "default_height")]
    pub default_height: u32,
}

impl Default for DimensionSettings {
    fn default() -> Self {
        Self {
            small_width: DEFAULT_SMALL_WIDTH,
            large_width: DEFAULT_LARGE_WIDTH,
            default_height: DEFAULT_HEIGHT,
        }
    }
}

impl DimensionSettings {
    /// Validates that every dimension is non-zero.
    fn validate(&self) -> Result<(), SettingsError> {
        for (label, value) in [
            ("dimensions.small_width", self.small_width),
            ("dimensions.large_width", self.large_width),
            ("dimensions.default_height", self.default_height),
        ] {
            if value == 0 {
                return Err(SettingsError::Invalid(format!("{label} must be greater than zero")));
            }
        }
        Ok(())
    }

    /// Converts into core widget dimensions.
    #[must_use]
    pub const fn to_dimensions(&self) -> WidgetDimensions {
        WidgetDimensions {
            small_width: self.small_width,
            large_width: self.large_width,
            default_height: self.default_height,
        }
    }
}

/// Returns the default small width.
const fn default_small_width() -> u32 {
    DEFAULT_SMALL_WIDTH
}

/// Returns the default large width.
const fn default_large_width() -> u32 {
    DEFAULT_LARGE_WIDTH
}

/// Returns the default height.
const fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

// ============================================================================
// SECTION: Render
// ============================================================================

/// Renderer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderSettings {
    /// Template identifier passed to the renderer.
    #[serde(default = "default_template")]
    pub template: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            template: default_template(),
        }
    }
}

impl RenderSettings {
    /// Validates the template identifier.
    fn validate(&self) -> Result<(), SettingsError> {
        if self.template.trim().is_empty() {
            return Err(SettingsError::Invalid("render.template must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Returns the default field-set template.
fn default_template() -> String {
    DEFAULT_FIELD_SET_TEMPLATE.to_string()
}

// ============================================================================
// SECTION: Audit
// ============================================================================

/// Audit sink selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSinkKind {
    /// Discard events.
    #[default]
    Noop,
    /// JSON lines on stderr.
    Stderr,
    /// JSON lines appended to a file.
    File,
}

/// Audit sink settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditSettings {
    /// Sink kind.
    #[serde(default)]
    pub sink: AuditSinkKind,
    /// Log file path (required for the file sink).
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl AuditSettings {
    /// Validates sink/path consistency.
    fn validate(&self) -> Result<(), SettingsError> {
        match (self.sink, &self.path) {
            (AuditSinkKind::File, None) => {
                Err(SettingsError::Invalid("audit.sink=file requires audit.path".to_string()))
            }
            (AuditSinkKind::File, Some(path)) => validate_path(path),
            (AuditSinkKind::Noop | AuditSinkKind::Stderr, Some(_)) => Err(SettingsError::Invalid(
                "audit.path is only valid with audit.sink=file".to_string(),
            )),
            (AuditSinkKind::Noop | AuditSinkKind::Stderr, None) => Ok(()),
        }
    }

    /// Opens the configured sink.
    fn open(&self) -> Result<Arc<dyn BuildAuditSink>, SettingsError> {
        match (self.sink, &self.path) {
            (AuditSinkKind::Noop, _) => Ok(Arc::new(NoopAuditSink)),
            (AuditSinkKind::Stderr, _) => Ok(Arc::new(StderrAuditSink)),
            (AuditSinkKind::File, Some(path)) => {
                let sink =
                    FileAuditSink::new(path).map_err(|err| SettingsError::Io(err.to_string()))?;
                Ok(Arc::new(sink))
            }
            (AuditSinkKind::File, None) => {
                Err(SettingsError::Invalid("audit.sink=file requires audit.path".to_string()))
            }
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Settings errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O failure while reading settings or schemas.
    #[error("settings io error: {0}")]
    Io(String),
    /// TOML/YAML/JSON parsing error.
    #[error("settings parse error: {0}")]
    Parse(String),
    /// Invalid settings data.
    #[error("invalid settings: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the settings path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, SettingsError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(SettingsError::Invalid("settings path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates a path against length limits.
pub(crate) fn validate_path(path: &Path) -> Result<(), SettingsError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(SettingsError::Invalid("path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(SettingsError::Invalid("path component too long".to_string()));
        }
    }
    Ok(())
}

/// Reads a UTF-8 file after enforcing path and size limits.
pub(crate) fn read_limited(path: &Path) -> Result<String, SettingsError> {
    validate_path(path)?;
    let bytes = fs::read(path).map_err(|err| SettingsError::Io(err.to_string()))?;
    if bytes.len() > MAX_CONFIG_FILE_SIZE {
        return Err(SettingsError::Invalid("file exceeds size limit".to_string()));
    }
    String::from_utf8(bytes).map_err(|_| SettingsError::Invalid("file must be utf-8".to_string()))
}

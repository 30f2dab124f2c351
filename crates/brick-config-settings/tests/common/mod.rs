// crates/brick-config-settings/tests/common/mod.rs
// ============================================================================
// Module: Settings Test Helpers
// Description: Shared helpers for settings and schema loading tests.
// ============================================================================

#![allow(dead_code, reason = "Each test binary uses a subset of the helpers.")]

use std::io::Write;

use brick_config_settings::BrickConfigSettings;
use brick_config_settings::SettingsError;
use tempfile::NamedTempFile;

/// Result type used by settings tests.
pub type TestResult = Result<(), String>;

/// Asserts that a result failed with a message containing `needle`.
pub fn assert_invalid<T>(result: Result<T, SettingsError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err(format!("expected failure containing {needle}")),
    }
}

/// Writes content to a temp file with the given suffix.
pub fn write_temp(suffix: &str, content: &[u8]) -> Result<NamedTempFile, String> {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().map_err(|err| err.to_string())?;
    file.write_all(content).map_err(|err| err.to_string())?;
    file.flush().map_err(|err| err.to_string())?;
    Ok(file)
}

/// Parses settings from TOML and validates them.
pub fn parse_settings(content: &str) -> Result<BrickConfigSettings, SettingsError> {
    let file = write_temp(".toml", content.as_bytes()).map_err(SettingsError::Io)?;
    BrickConfigSettings::load(Some(file.path()))
}

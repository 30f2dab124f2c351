//! Settings validation tests for brick-config-settings.
// crates/brick-config-settings/tests/settings_validation.rs
// ============================================================================
// Module: Settings Validation Tests
// Description: Validate capability tables, dimensions, render, and audit rules.
// Purpose: Ensure invalid settings are rejected before a builder is created.
// ============================================================================

mod common;

use std::fs;

use brick_config_core::BuildAuditEvent;
use brick_config_core::audit::EVENT_BUILD_EMPTY;
use brick_config_settings::AuditSettings;
use brick_config_settings::AuditSinkKind;
use brick_config_settings::BrickConfigSettings;
use common::TestResult;
use common::assert_invalid;
use common::parse_settings;

#[test]
fn duplicate_store_types_are_rejected() -> TestResult {
    assert_invalid(
        parse_settings("[capabilities]\nstore_types = [\"select\", \"select\"]\n"),
        "capabilities.store_types contains duplicate type select",
    )
}

#[test]
fn blank_type_tags_are_rejected() -> TestResult {
    assert_invalid(
        parse_settings("[capabilities]\ndynamic_width_types = [\"  \"]\n"),
        "blank type tag",
    )
}

#[test]
fn zero_dimensions_are_rejected() -> TestResult {
    assert_invalid(
        parse_settings("[dimensions]\nlarge_width = 0\n"),
        "dimensions.large_width must be greater than zero",
    )?;
    assert_invalid(
        parse_settings("[dimensions]\ndefault_height = 0\n"),
        "dimensions.default_height must be greater than zero",
    )
}

#[test]
fn blank_template_is_rejected() -> TestResult {
    assert_invalid(parse_settings("[render]\ntemplate = \"\"\n"), "render.template must not be empty")
}

#[test]
fn unknown_audit_sink_is_a_parse_error() -> TestResult {
    assert_invalid(parse_settings("[audit]\nsink = \"syslog\"\n"), "settings parse error")
}

#[test]
fn file_sink_requires_path() -> TestResult {
    assert_invalid(parse_settings("[audit]\nsink = \"file\"\n"), "audit.sink=file requires audit.path")
}

#[test]
fn path_without_file_sink_is_rejected() -> TestResult {
    assert_invalid(
        parse_settings("[audit]\nsink = \"stderr\"\npath = \"audit.log\"\n"),
        "audit.path is only valid with audit.sink=file",
    )
}

#[test]
fn file_sink_appends_json_lines() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("audit.jsonl");
    let settings = BrickConfigSettings {
        audit: AuditSettings {
            sink: AuditSinkKind::File,
            path: Some(path.clone()),
        },
        ..BrickConfigSettings::default()
    };
    settings.validate().map_err(|err| err.to_string())?;

    let sink = settings.audit_sink().map_err(|err| err.to_string())?;
    sink.record(&BuildAuditEvent::new(EVENT_BUILD_EMPTY, "content_1"));
    sink.record(&BuildAuditEvent::new(EVENT_BUILD_EMPTY, "content_2"));

    let written = fs::read_to_string(&path).map_err(|err| err.to_string())?;
    let lines: Vec<&str> = written.lines().collect();
    if lines.len() != 2 {
        return Err(format!("expected two audit lines, got {}", lines.len()));
    }
    let first: serde_json::Value = serde_json::from_str(lines[0]).map_err(|err| err.to_string())?;
    if first["event"] != "build_empty" || first["editable_id"] != "content_1" {
        return Err(format!("unexpected audit line {first}"));
    }
    Ok(())
}

#[test]
fn file_sink_reports_unopenable_path() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let settings = BrickConfigSettings {
        audit: AuditSettings {
            sink: AuditSinkKind::File,
            path: Some(dir.path().join("missing").join("audit.jsonl")),
        },
        ..BrickConfigSettings::default()
    };
    assert_invalid(settings.audit_sink(), "settings io error")
}

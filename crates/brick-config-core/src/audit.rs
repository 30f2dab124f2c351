// crates/brick-config-core/src/audit.rs
// ============================================================================
// Module: Build Audit Logging
// Description: Structured audit events for config resolution.
// Purpose: Emit build decisions without hard logging dependencies.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Resolution decisions that touch the value store or change visibility are
//! reported as [`BuildAuditEvent`]s through a [`BuildAuditSink`]. The core
//! never prints; deployments route events wherever they like. The default
//! sink discards everything.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Event Labels
// ============================================================================

/// Build skipped outside an editable context.
pub const EVENT_BUILD_NOT_APPLICABLE: &str = "build_not_applicable";
/// Build finished with no declared elements.
pub const EVENT_BUILD_EMPTY: &str = "build_empty";
/// A declared default was written into an empty stored value.
pub const EVENT_DEFAULT_APPLIED: &str = "default_applied";
/// A condition referenced a field that does not exist in the block.
pub const EVENT_CONDITION_REFERENCE_MISSING: &str = "condition_reference_missing";
/// A field failed its conditions and was reset.
pub const EVENT_FIELD_RESET: &str = "field_reset";
/// Build finished and the payload was rendered.
pub const EVENT_BUILD_COMPLETED: &str = "build_completed";

// ============================================================================
// SECTION: Types
// ============================================================================

/// Build audit event payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Block editable identifier.
    pub editable_id: String,
    /// Field name when the event concerns one field.
    pub field: Option<String>,
    /// Event-specific detail.
    pub detail: Option<Value>,
}

impl BuildAuditEvent {
    /// Creates a new event stamped with the current time.
    #[must_use]
    pub fn new(event: &'static str, editable_id: &str) -> Self {
        Self {
            event,
            timestamp_ms: now_ms(),
            editable_id: editable_id.to_string(),
            field: None,
            detail: None,
        }
    }

    /// Attaches the field name.
    #[must_use]
    pub fn with_field(mut self, field: &str) -> Self {
        self.field = Some(field.to_string());
        self
    }

    /// Attaches event detail.
    #[must_use]
    pub fn with_detail(mut self, detail: Value) -> Self {
        self.detail = Some(detail);
        self
    }
}

/// Returns the current time in milliseconds since the epoch.
fn now_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |duration| duration.as_millis())
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for build events.
pub trait BuildAuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &BuildAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl BuildAuditSink for StderrAuditSink {
    fn record(&self, event: &BuildAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl BuildAuditSink for FileAuditSink {
    fn record(&self, event: &BuildAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl BuildAuditSink for NoopAuditSink {
    fn record(&self, _event: &BuildAuditEvent) {}
}

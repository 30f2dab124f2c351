// crates/brick-config-core/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared fixtures, recording collaborators, and assertions.
// ============================================================================
//! ## Overview
//! Shared test helpers for brick config resolution tests: Result-based
//! assertions, an audit sink that records events, collaborators that fail on
//! demand, and builders for schemas declared as JSON.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    dead_code,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::sync::Mutex;

use brick_config_core::BrickConfigBuilder;
use brick_config_core::BrickConfigNode;
use brick_config_core::BuildAuditEvent;
use brick_config_core::BuildAuditSink;
use brick_config_core::BuildRequest;
use brick_config_core::BuilderConfig;
use brick_config_core::CatalogTranslator;
use brick_config_core::DocumentContext;
use brick_config_core::FieldState;
use brick_config_core::FieldType;
use brick_config_core::InMemoryValueStore;
use brick_config_core::JsonRenderer;
use brick_config_core::RenderError;
use brick_config_core::RenderPayload;
use brick_config_core::Renderer;
use brick_config_core::ResolutionContext;
use brick_config_core::ResolvedField;
use brick_config_core::StoreError;
use brick_config_core::StoredValue;
use brick_config_core::TypeCapabilityPolicy;
use brick_config_core::ValueStore;
use brick_config_core::WidgetDimensions;
use brick_config_core::WindowSize;
use serde_json::Value;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across brick config integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition {
        Ok(())
    } else {
        Err(Box::new(TestError {
            message: message.into(),
        }))
    }
}

/// Returns an error carrying the message.
pub fn fail<T>(message: impl Into<String>) -> TestResult<T> {
    Err(Box::new(TestError {
        message: message.into(),
    }))
}

// ========================================================================
// Fixtures
// ========================================================================

/// Editable identifier used by fixtures.
pub const EDITABLE_ID: &str = "content_1";

/// Editable name used by fixtures.
pub const EDITABLE_NAME: &str = "teaser";

/// Returns the fixture document.
pub const fn document() -> DocumentContext {
    DocumentContext::new(42)
}

/// Parses a config node from JSON, keeping element order.
pub fn node(value: Value) -> TestResult<BrickConfigNode> {
    Ok(serde_json::from_value(value)?)
}

/// Returns a build request for the fixture editable.
pub const fn request(config: &BrickConfigNode) -> BuildRequest<'_> {
    BuildRequest {
        editable_id: EDITABLE_ID,
        editable_name: EDITABLE_NAME,
        config,
    }
}

/// Returns a resolution context over the fixture document.
pub fn context<'a>(
    document: &'a DocumentContext,
    window_size: WindowSize,
    policy: &'a TypeCapabilityPolicy,
    dimensions: &'a WidgetDimensions,
) -> ResolutionContext<'a> {
    ResolutionContext {
        document,
        editable_id: EDITABLE_ID,
        window_size,
        policy,
        dimensions,
    }
}

/// Builder type used by most scenarios.
pub type TestBuilder = BrickConfigBuilder<CatalogTranslator, InMemoryValueStore, JsonRenderer>;

/// Creates a builder over the store with default configuration.
pub fn builder(store: InMemoryValueStore, audit: Arc<RecordingAuditSink>) -> TestBuilder {
    BrickConfigBuilder::new(CatalogTranslator::new(), store, JsonRenderer, BuilderConfig::default())
        .with_audit_sink(audit)
}

/// Resolves the payload for a node.
pub fn resolve_payload(builder: &TestBuilder, config: &BrickConfigNode) -> TestResult<RenderPayload> {
    match builder.resolve(&document(), &request(config))? {
        Some(payload) => Ok(payload),
        None => fail("expected a payload"),
    }
}

/// Finds a resolved field state by name.
pub fn state<'a>(payload: &'a RenderPayload, name: &str) -> TestResult<&'a FieldState> {
    payload
        .config_elements
        .iter()
        .filter_map(|field| field.state.as_ref())
        .find(|state| state.name == name)
        .map_or_else(|| fail(format!("field {name} missing")), Ok)
}

/// Finds a resolved field by name.
pub fn field<'a>(payload: &'a RenderPayload, name: &str) -> TestResult<&'a ResolvedField> {
    payload
        .config_elements
        .iter()
        .find(|field| field.name() == Some(name))
        .map_or_else(|| fail(format!("field {name} missing")), Ok)
}

// ========================================================================
// Recording Collaborators
// ========================================================================

/// Audit sink that keeps every event in memory.
#[derive(Default)]
pub struct RecordingAuditSink {
    /// Recorded events.
    events: Mutex<Vec<BuildAuditEvent>>,
}

impl RecordingAuditSink {
    /// Creates a shared recording sink.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Returns a copy of the recorded events.
    pub fn events(&self) -> Vec<BuildAuditEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }

    /// Returns the recorded event labels in order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.events().iter().map(|event| event.event).collect()
    }
}

impl BuildAuditSink for RecordingAuditSink {
    fn record(&self, event: &BuildAuditEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// Value store whose reads or writes always fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStore {
    /// Fail on reads as well as writes.
    pub fail_reads: bool,
}

impl ValueStore for FailingStore {
    fn get_value(
        &self,
        _document: &DocumentContext,
        _field_type: &FieldType,
        _name: &str,
    ) -> Result<StoredValue, StoreError> {
        if self.fail_reads {
            Err(StoreError::Store("read refused".to_string()))
        } else {
            Ok(StoredValue::unset())
        }
    }

    fn set_value(
        &self,
        _document: &DocumentContext,
        _field_type: &FieldType,
        _name: &str,
        _value: Option<&Value>,
    ) -> Result<(), StoreError> {
        Err(StoreError::Store("write refused".to_string()))
    }
}

/// Renderer that records template ids and can be told to fail.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    /// Template ids passed to `render`.
    templates: Arc<Mutex<Vec<String>>>,
    /// Fail every render.
    fail: bool,
}

impl RecordingRenderer {
    /// Creates a renderer that fails every render.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Returns the template ids rendered so far.
    pub fn templates(&self) -> Vec<String> {
        self.templates.lock().map(|templates| templates.clone()).unwrap_or_default()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, template_id: &str, payload: &RenderPayload) -> Result<String, RenderError> {
        if let Ok(mut templates) = self.templates.lock() {
            templates.push(template_id.to_string());
        }
        if self.fail {
            return Err(RenderError::Render("template missing".to_string()));
        }
        Ok(format!("{} fields", payload.config_elements.len()))
    }
}

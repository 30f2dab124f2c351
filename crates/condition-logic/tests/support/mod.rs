// crates/condition-logic/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result helpers and predicates for condition logic tests.
// ============================================================================
//! ## Overview
//! Shared test helpers for consistent Result-based assertions.

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

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use condition_logic::PredicateEval;
use serde::Deserialize;
use serde::Serialize;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across condition logic integration tests.
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

// ========================================================================
// Key/Value Predicate
// ========================================================================

/// Predicate that checks a named key holds an exact value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEquals {
    /// Key looked up in the reader.
    pub key: String,
    /// Expected value.
    pub expected: i64,
}

/// Builds a `KeyEquals` predicate.
pub fn key_eq(key: &str, expected: i64) -> KeyEquals {
    KeyEquals {
        key: key.to_string(),
        expected,
    }
}

impl PredicateEval for KeyEquals {
    type Reader<'a> = BTreeMap<String, i64>;

    fn eval(&self, reader: &Self::Reader<'_>) -> bool {
        reader.get(&self.key) == Some(&self.expected)
    }
}

/// Builds a reader from key/value pairs.
pub fn reader(pairs: &[(&str, i64)]) -> BTreeMap<String, i64> {
    pairs.iter().map(|(key, value)| ((*key).to_string(), *value)).collect()
}

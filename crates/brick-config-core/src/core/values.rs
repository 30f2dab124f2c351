// crates/brick-config-core/src/core/values.rs
// ============================================================================
// Module: Field Value Semantics
// Description: Emptiness and loose equality over JSON field values.
// Purpose: Match the host's notion of "empty" and condition equality.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Field values arrive from the host store as untyped JSON. Two rules matter
//! to the resolvers:
//! - [`is_empty`]: `null`, `false`, `0`, `0.0`, `""`, `"0"`, `[]`, and `{}`
//!   are empty. Defaults are only applied and kept when they are non-empty.
//! - [`loose_eq`]: condition values may cross numeric/string representations,
//!   so `"1"` equals `1` and `null` equals any empty value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Number;
use serde_json::Value;

// ============================================================================
// SECTION: Emptiness
// ============================================================================

/// Returns true when the value counts as empty.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number_is_zero(number),
        Value::String(text) => text.is_empty() || text == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Returns the value only when it is present and non-empty.
#[must_use]
pub fn non_empty(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| !is_empty(value))
}

/// Returns the truthiness of the value (the inverse of emptiness).
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    !is_empty(value)
}

/// Returns true when a JSON number equals zero.
fn number_is_zero(number: &Number) -> bool {
    number.as_f64().is_some_and(|value| value == 0.0)
}

// ============================================================================
// SECTION: Loose Equality
// ============================================================================

/// Compares two values with loose (representation-crossing) equality.
///
/// `None` stands for an absent value and behaves like `null`.
#[must_use]
pub fn loose_eq_opt(left: Option<&Value>, right: Option<&Value>) -> bool {
    loose_eq(left.unwrap_or(&Value::Null), right.unwrap_or(&Value::Null))
}

/// Compares two values with loose (representation-crossing) equality.
#[must_use]
pub fn loose_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Null, other) | (other, Value::Null) => is_empty(other),
        (Value::Bool(flag), other) | (other, Value::Bool(flag)) => *flag == is_truthy(other),
        (Value::Number(left), Value::Number(right)) => numbers_eq(left, right),
        (Value::Number(number), Value::String(text))
        | (Value::String(text), Value::Number(number)) => number_string_eq(number, text),
        (Value::String(left), Value::String(right)) => strings_eq(left, right),
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left.iter().zip(right.iter()).all(|(left, right)| loose_eq(left, right))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left.iter().all(|(key, value)| {
                    right.get(key).is_some_and(|other| loose_eq(value, other))
                })
        }
        _ => false,
    }
}

/// Compares two JSON numbers numerically.
fn numbers_eq(left: &Number, right: &Number) -> bool {
    if let (Some(left), Some(right)) = (left.as_i64(), right.as_i64()) {
        return left == right;
    }
    if let (Some(left), Some(right)) = (left.as_u64(), right.as_u64()) {
        return left == right;
    }
    match (left.as_f64(), right.as_f64()) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

/// Compares a number against a string, numerically when the string is numeric.
fn number_string_eq(number: &Number, text: &str) -> bool {
    match parse_numeric(text) {
        Some(parsed) => numbers_eq(number, &parsed),
        None => number.to_string() == text,
    }
}

/// Compares two strings, numerically when both are numeric.
fn strings_eq(left: &str, right: &str) -> bool {
    match (parse_numeric(left), parse_numeric(right)) {
        (Some(left), Some(right)) => numbers_eq(&left, &right),
        _ => left == right,
    }
}

/// Parses a numeric string (surrounding whitespace allowed) into a JSON number.
fn parse_numeric(text: &str) -> Option<Number> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(Number::from(value));
    }
    if let Ok(value) = trimmed.parse::<u64>() {
        return Some(Number::from(value));
    }
    let value = trimmed.parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Number::from_f64(value)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

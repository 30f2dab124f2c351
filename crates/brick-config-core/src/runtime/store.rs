// crates/brick-config-core/src/runtime/store.rs
// ============================================================================
// Module: In-Memory Value Store
// Description: Simple in-memory value store for tests and examples.
// Purpose: Provide a deterministic store implementation without a host.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! This module provides an in-memory implementation of [`ValueStore`] keyed
//! by document and field name. Emptiness follows the host rules: an unset
//! field is empty; a set checkbox is never empty (unchecked is a value); any
//! other field is empty when its data is. Read and write counters let tests
//! assert that a build did or did not touch the store.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use serde_json::Value;

use crate::core::DocumentContext;
use crate::core::DocumentId;
use crate::core::FieldType;
use crate::core::values;
use crate::interfaces::StoreError;
use crate::interfaces::StoredValue;
use crate::interfaces::ValueStore;

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// Store key: document plus field name.
type ValueKey = (DocumentId, String);

/// In-memory value store for tests and examples.
#[derive(Debug, Default, Clone)]
pub struct InMemoryValueStore {
    /// Stored values protected by a mutex.
    values: Arc<Mutex<BTreeMap<ValueKey, Value>>>,
    /// Number of `get_value` calls.
    reads: Arc<AtomicUsize>,
    /// Number of `set_value` calls.
    writes: Arc<AtomicUsize>,
}

impl InMemoryValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a value without counting it as a write.
    #[must_use]
    pub fn with_value(self, document: &DocumentContext, name: &str, value: Value) -> Self {
        if let Ok(mut guard) = self.values.lock() {
            guard.insert((document.id, name.to_string()), value);
        }
        self
    }

    /// Returns the stored value for a field, if set.
    #[must_use]
    pub fn value(&self, document: &DocumentContext, name: &str) -> Option<Value> {
        let guard = self.values.lock().ok()?;
        guard.get(&(document.id, name.to_string())).cloned()
    }

    /// Returns the number of reads performed through [`ValueStore`].
    #[must_use]
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Returns the number of writes performed through [`ValueStore`].
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl ValueStore for InMemoryValueStore {
    fn get_value(
        &self,
        document: &DocumentContext,
        field_type: &FieldType,
        name: &str,
    ) -> Result<StoredValue, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let guard = self
            .values
            .lock()
            .map_err(|_| StoreError::Store("value store mutex poisoned".to_string()))?;
        let Some(data) = guard.get(&(document.id, name.to_string())).cloned() else {
            return Ok(StoredValue::unset());
        };
        let empty = match field_type {
            FieldType::Checkbox => false,
            _ => values::is_empty(&data),
        };
        Ok(StoredValue {
            data,
            empty,
        })
    }

    fn set_value(
        &self,
        document: &DocumentContext,
        _field_type: &FieldType,
        name: &str,
        value: Option<&Value>,
    ) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut guard = self
            .values
            .lock()
            .map_err(|_| StoreError::Store("value store mutex poisoned".to_string()))?;
        let key = (document.id, name.to_string());
        match value {
            Some(value) if !value.is_null() => {
                guard.insert(key, value.clone());
            }
            _ => {
                guard.remove(&key);
            }
        }
        Ok(())
    }
}

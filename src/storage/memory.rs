//! In-memory gateway for tests.
//!
//! Same semantics as localStorage, plus switchable failures and a log of
//! every successful write.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;

use super::StorageGateway;
use crate::error::{StorageError, StorageResult};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    writes: RefCell<Vec<String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a value, as if written by an earlier session
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.values.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    /// Values written so far, oldest first
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

#[async_trait(?Send)]
impl StorageGateway for MemoryStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if self.fail_reads.get() {
            return Err(StorageError::Read("read rejected".to_string()));
        }
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        if self.fail_writes.get() {
            return Err(StorageError::Write("quota exceeded".to_string()));
        }
        self.writes.borrow_mut().push(value.clone());
        self.values.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}

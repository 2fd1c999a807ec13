//! In-memory entry store.
//!
//! Uses `RefCell` for interior mutability since the engine model is
//! single-threaded; this keeps the `EntryStore` trait on `&self` without
//! lock overhead. A rename's delete and insert happen under one borrow, so
//! it cannot be observed half-done here. Backs tests and offline hosts.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::debug;

use super::{EntryStore, StoreError};
use crate::entry::{Entry, normalize_nickname};

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<HashMap<String, Entry>>,
    fail_requests: RefCell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Seed the store, keying each entry by its normalized nickname.
    pub fn with_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let store = MemoryStore::new();
        {
            let mut records = store.records.borrow_mut();
            for entry in entries {
                records.insert(entry.normalized_nickname(), entry);
            }
        }
        store
    }

    /// Make every subsequent operation fail with `Unavailable`, for
    /// exercising outage handling in tests.
    pub fn set_fail_requests(&self, fail: bool) {
        *self.fail_requests.borrow_mut() = fail;
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Direct key lookup, mostly for assertions in tests.
    pub fn get(&self, nickname: &str) -> Option<Entry> {
        self.records.borrow().get(&normalize_nickname(nickname)).cloned()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if *self.fail_requests.borrow() {
            Err(StoreError::Unavailable("simulated outage".to_string()))
        } else {
            Ok(())
        }
    }
}

impl EntryStore for MemoryStore {
    fn list_all(&self) -> Result<Vec<Entry>, StoreError> {
        self.check_available()?;
        Ok(self.records.borrow().values().cloned().collect())
    }

    fn save(&self, entry: &Entry, previous_nickname: Option<&str>) -> Result<Entry, StoreError> {
        self.check_available()?;

        let new_key = entry.normalized_nickname();
        if new_key.is_empty() {
            return Err(StoreError::EmptyNickname);
        }

        let old_key = previous_nickname.map(normalize_nickname);
        let key_changed = old_key.as_deref().is_some_and(|old| old != new_key);
        let is_new = old_key.is_none();

        let mut records = self.records.borrow_mut();
        if (is_new || key_changed) && records.contains_key(&new_key) {
            return Err(StoreError::NicknameTaken {
                nickname: entry.nickname.clone(),
            });
        }

        if key_changed {
            if let Some(old) = old_key {
                records.remove(&old);
            }
        }
        records.insert(new_key.clone(), entry.clone());
        debug!(key = %new_key, id = %entry.id, "Entry saved");
        Ok(entry.clone())
    }
}

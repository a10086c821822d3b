//! Test doubles and common utilities for directory contract tests

#![allow(dead_code)]

use rubrica_core::error::Result;
use rubrica_core::model::{ContactKey, PhoneEntry};
use rubrica_core::{ContactDirectory, ContactStore, DirectoryConfig, MemoryContactStore};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Default first name used by every contract test
pub const DEFAULT_FIRST_NAME: &str = "Mario";

/// A store that delegates to a [`MemoryContactStore`] and counts successful writes
///
/// Clones share both the collection and the counters, so a test can hand one
/// clone to the directory and inspect the other.
#[derive(Clone, Default)]
pub struct CountingStore {
    inner: MemoryContactStore,
    writes: Arc<AtomicUsize>,
    reads: Arc<AtomicUsize>,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls that changed the collection
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of single-key lookups
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Snapshot of the stored entries
    pub async fn snapshot(&self) -> Vec<PhoneEntry> {
        self.inner.list().await.unwrap()
    }

    fn record_write(&self, changed: bool) {
        if changed {
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[async_trait::async_trait]
impl ContactStore for CountingStore {
    async fn get(&self, key: &ContactKey) -> Result<Option<PhoneEntry>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key).await
    }

    async fn insert_if_absent(&self, entry: PhoneEntry) -> Result<bool> {
        let inserted = self.inner.insert_if_absent(entry).await?;
        self.record_write(inserted);
        Ok(inserted)
    }

    async fn replace_number(&self, key: &ContactKey, number: String) -> Result<Option<PhoneEntry>> {
        let updated = self.inner.replace_number(key, number).await?;
        self.record_write(updated.is_some());
        Ok(updated)
    }

    async fn remove(&self, key: &ContactKey) -> Result<Option<PhoneEntry>> {
        let removed = self.inner.remove(key).await?;
        self.record_write(removed.is_some());
        Ok(removed)
    }

    async fn list(&self) -> Result<Vec<PhoneEntry>> {
        self.inner.list().await
    }

    async fn len(&self) -> Result<usize> {
        self.inner.len().await
    }
}

/// Directory backed by a memory store with the test default first name
pub fn directory() -> ContactDirectory {
    ContactDirectory::new(DirectoryConfig::new(DEFAULT_FIRST_NAME)).expect("valid config")
}

/// Directory backed by a [`CountingStore`]; returns the store handle for inspection
pub fn counted_directory() -> (ContactDirectory, CountingStore) {
    let store = CountingStore::new();
    let dir = ContactDirectory::with_store(
        Box::new(store.clone()),
        DirectoryConfig::new(DEFAULT_FIRST_NAME),
    )
    .expect("valid config");
    (dir, store)
}

pub fn key(surname: &str, first_name: &str) -> ContactKey {
    ContactKey::new(surname, first_name)
}

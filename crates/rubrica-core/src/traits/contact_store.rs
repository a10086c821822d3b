// # Contact Store Trait
//
// Defines the interface between the directory and its storage.
//
// ## Purpose
//
// The store owns the collection of phone entries and is the only place that
// takes locks. The directory composes these primitives into the public
// operations (defaulting, validation, error reporting).
//
// ## Atomicity
//
// Each method is a single critical section. In particular
// `insert_if_absent` performs the existence check and the append under the
// same write lock, so two concurrent creations of one key can never both
// succeed.

use async_trait::async_trait;

use crate::model::{ContactKey, PhoneEntry};

/// Trait for contact store implementations
///
/// Implementations must be thread-safe and usable across async tasks.
/// Lookups compare keys case-sensitively on both fields.
///
/// ## Implementation Guidelines
///
/// - **One lock per call**: never expose a guard or a reference into the
///   collection to callers
/// - **Insertion order**: `list()` returns entries in the order they were
///   inserted; `replace_number` keeps an entry in its position
/// - **No partial mutation**: a call that returns `false`/`None` must leave
///   the collection untouched
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Look up the entry stored under `key`
    ///
    /// # Returns
    ///
    /// - `Ok(Some(PhoneEntry))`: A copy of the stored entry
    /// - `Ok(None)`: No entry for the key
    /// - `Err(Error)`: Storage error
    async fn get(&self, key: &ContactKey) -> Result<Option<PhoneEntry>, crate::Error>;

    /// Append `entry` unless its key is already occupied
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: The entry was appended
    /// - `Ok(false)`: An entry with the same key exists, nothing changed
    /// - `Err(Error)`: Storage error
    async fn insert_if_absent(&self, entry: PhoneEntry) -> Result<bool, crate::Error>;

    /// Replace the number of the entry stored under `key`
    ///
    /// # Returns
    ///
    /// - `Ok(Some(PhoneEntry))`: The entry after the update
    /// - `Ok(None)`: No entry for the key, nothing changed
    /// - `Err(Error)`: Storage error
    async fn replace_number(
        &self,
        key: &ContactKey,
        number: String,
    ) -> Result<Option<PhoneEntry>, crate::Error>;

    /// Remove the entry stored under `key`
    ///
    /// # Returns
    ///
    /// - `Ok(Some(PhoneEntry))`: The removed entry
    /// - `Ok(None)`: No entry for the key
    /// - `Err(Error)`: Storage error
    async fn remove(&self, key: &ContactKey) -> Result<Option<PhoneEntry>, crate::Error>;

    /// Snapshot of every entry, in insertion order
    async fn list(&self) -> Result<Vec<PhoneEntry>, crate::Error>;

    /// Number of stored entries
    async fn len(&self) -> Result<usize, crate::Error>;
}

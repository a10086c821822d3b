// # Memory Contact Store
//
// In-memory implementation of ContactStore.
//
// ## Layout
//
// Entries live in a `Vec` behind a single `RwLock`. Lookups are a linear scan
// over both key fields, which is fine for a personal directory and keeps
// insertion order for free.
//
// ## Crash Behavior
//
// - All entries are lost on restart/crash
// - No recovery possible (state is in-memory only)

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::Error;
use crate::model::{ContactKey, PhoneEntry};
use crate::traits::ContactStore;

/// In-memory contact store
///
/// Cloning is cheap and every clone shares the same collection.
///
/// # Example
///
/// ```rust,no_run
/// use rubrica_core::model::{ContactKey, PhoneEntry};
/// use rubrica_core::store::MemoryContactStore;
/// use rubrica_core::traits::ContactStore;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = MemoryContactStore::new();
///
///     store.insert_if_absent(PhoneEntry::new("Rossi", "Mario", "123")).await?;
///
///     let entry = store.get(&ContactKey::new("Rossi", "Mario")).await?;
///     assert_eq!(entry.map(|e| e.number), Some("123".to_string()));
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryContactStore {
    inner: Arc<RwLock<Vec<PhoneEntry>>>,
}

impl MemoryContactStore {
    /// Create a new empty memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the store is empty
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

fn position(entries: &[PhoneEntry], key: &ContactKey) -> Option<usize> {
    entries.iter().position(|entry| entry.matches(key))
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn get(&self, key: &ContactKey) -> Result<Option<PhoneEntry>, Error> {
        let guard = self.inner.read().await;
        Ok(guard.iter().find(|entry| entry.matches(key)).cloned())
    }

    async fn insert_if_absent(&self, entry: PhoneEntry) -> Result<bool, Error> {
        let mut guard = self.inner.write().await;
        if position(&guard, &entry.key()).is_some() {
            return Ok(false);
        }
        guard.push(entry);
        Ok(true)
    }

    async fn replace_number(
        &self,
        key: &ContactKey,
        number: String,
    ) -> Result<Option<PhoneEntry>, Error> {
        let mut guard = self.inner.write().await;
        Ok(guard.iter_mut().find(|entry| entry.matches(key)).map(|entry| {
            entry.number = number;
            entry.clone()
        }))
    }

    async fn remove(&self, key: &ContactKey) -> Result<Option<PhoneEntry>, Error> {
        let mut guard = self.inner.write().await;
        Ok(position(&guard, key).map(|index| guard.remove(index)))
    }

    async fn list(&self) -> Result<Vec<PhoneEntry>, Error> {
        Ok(self.inner.read().await.clone())
    }

    async fn len(&self) -> Result<usize, Error> {
        Ok(self.inner.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_basic() {
        let store = MemoryContactStore::new();
        let key = ContactKey::new("Rossi", "Mario");

        // Initially empty
        assert!(store.is_empty().await);
        assert_eq!(store.len().await.unwrap(), 0);

        // Insert and get
        assert!(
            store
                .insert_if_absent(PhoneEntry::new("Rossi", "Mario", "123"))
                .await
                .unwrap()
        );
        assert_eq!(store.len().await.unwrap(), 1);

        let retrieved = store.get(&key).await.unwrap().unwrap();
        assert_eq!(retrieved.number, "123");

        // Remove
        let removed = store.remove(&key).await.unwrap();
        assert_eq!(removed.map(|e| e.number), Some("123".to_string()));
        assert!(store.is_empty().await);
        assert_eq!(store.remove(&key).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_insert_if_absent_rejects_duplicate() {
        let store = MemoryContactStore::new();

        assert!(
            store
                .insert_if_absent(PhoneEntry::new("Rossi", "Mario", "123"))
                .await
                .unwrap()
        );
        assert!(
            !store
                .insert_if_absent(PhoneEntry::new("Rossi", "Mario", "999"))
                .await
                .unwrap()
        );

        let entry = store
            .get(&ContactKey::new("Rossi", "Mario"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(entry.number, "123");
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_replace_number_keeps_position() {
        let store = MemoryContactStore::new();
        for (surname, number) in [("Rossi", "1"), ("Bianchi", "2"), ("Verdi", "3")] {
            store
                .insert_if_absent(PhoneEntry::new(surname, "Mario", number))
                .await
                .unwrap();
        }

        let updated = store
            .replace_number(&ContactKey::new("Rossi", "Mario"), "42".to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated, PhoneEntry::new("Rossi", "Mario", "42"));

        let surnames: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.surname)
            .collect();
        assert_eq!(surnames, vec!["Rossi", "Bianchi", "Verdi"]);
    }

    #[tokio::test]
    async fn test_replace_number_missing_key() {
        let store = MemoryContactStore::new();
        let result = store
            .replace_number(&ContactKey::new("Bianchi", "Luca"), "555".to_string())
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryContactStore::new();
        let other = store.clone();

        store
            .insert_if_absent(PhoneEntry::new("Rossi", "Mario", "123"))
            .await
            .unwrap();
        assert_eq!(other.len().await.unwrap(), 1);

        other.remove(&ContactKey::new("Rossi", "Mario")).await.unwrap();
        assert!(store.is_empty().await);
    }
}

//! Contact directory
//!
//! The [`ContactDirectory`] is the only component with state-management
//! decisions. It is responsible for:
//! - Resolving the first name of new contacts (configured default)
//! - Rejecting requests with missing required fields
//! - Keeping at most one entry per [`ContactKey`]
//! - Reporting every failure as a typed [`Error`]
//!
//! ## Operation Flow
//!
//! ```text
//! adapter ── NewContact / ContactKey ──▶ ContactDirectory ──▶ ContactStore
//!    ▲                                        │
//!    └──────── Ok(outcome) / Err(Error) ◀─────┘
//! ```
//!
//! No failure path mutates the store: validation happens before any write,
//! and the store's conditional writes leave the collection untouched when
//! they report `false`/`None`.

use crate::config::DirectoryConfig;
use crate::error::{Error, Result};
use crate::model::{ContactKey, NewContact, PhoneEntry, present};
use crate::store::MemoryContactStore;
use crate::traits::ContactStore;
use tracing::{debug, info, warn};

/// In-memory phone directory keyed by `(surname, first_name)`
///
/// ## Threading
///
/// All methods take `&self`; share the directory behind an `Arc`. Mutual
/// exclusion is provided by the underlying [`ContactStore`].
pub struct ContactDirectory {
    /// Storage for the entries
    store: Box<dyn ContactStore>,

    /// First name applied when a contact is created without one
    default_first_name: String,
}

impl ContactDirectory {
    /// Create an empty directory backed by a [`MemoryContactStore`]
    pub fn new(config: DirectoryConfig) -> Result<Self> {
        Self::with_store(Box::new(MemoryContactStore::new()), config)
    }

    /// Create a directory on top of an existing store
    pub fn with_store(store: Box<dyn ContactStore>, config: DirectoryConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            store,
            default_first_name: config.default_first_name,
        })
    }

    /// The configured default first name
    pub fn default_first_name(&self) -> &str {
        &self.default_first_name
    }

    /// Find the entry stored under `key`
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if no entry exists for the key
    pub async fn lookup(&self, key: &ContactKey) -> Result<PhoneEntry> {
        match self.store.get(key).await? {
            Some(entry) => Ok(entry),
            None => {
                debug!("Lookup miss for {}", key);
                Err(Error::not_found(key.clone()))
            }
        }
    }

    /// Add a new contact
    ///
    /// An absent (or empty) first name is replaced by the configured default.
    /// Returns the key the entry was stored under, so the caller can build a
    /// locator for it.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if the surname or the number is absent
    /// - [`Error::Conflict`] if an entry already exists for the resolved key
    pub async fn add(&self, request: NewContact) -> Result<ContactKey> {
        let surname = present(request.surname).ok_or_else(|| Error::missing("surname"))?;
        let number = present(request.number).ok_or_else(|| Error::missing("number"))?;
        let first_name = present(request.first_name)
            .unwrap_or_else(|| self.default_first_name.clone());

        let entry = PhoneEntry::new(surname, first_name, number);
        let key = entry.key();

        if !self.store.insert_if_absent(entry).await? {
            warn!("Rejected duplicate contact {}", key);
            return Err(Error::conflict(key));
        }

        info!("Added contact {}", key);
        Ok(key)
    }

    /// Replace the number of an existing contact
    ///
    /// Existence is checked before the number: a request for an absent
    /// contact reports `NotFound` even when the number is missing too.
    /// Only an absent number is rejected; an empty one is stored as given.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if no entry exists for the key
    /// - [`Error::Validation`] if the number is absent
    pub async fn update(&self, key: &ContactKey, number: Option<String>) -> Result<PhoneEntry> {
        self.lookup(key).await?;

        let number = number.ok_or_else(|| Error::missing("number"))?;

        match self.store.replace_number(key, number).await? {
            Some(entry) => {
                info!("Updated number of {}", key);
                Ok(entry)
            }
            // Removed between the lookup and the write
            None => Err(Error::not_found(key.clone())),
        }
    }

    /// Remove a contact
    ///
    /// Returns the key of the removed entry for confirmation messaging.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if no entry exists for the key
    pub async fn remove(&self, key: &ContactKey) -> Result<ContactKey> {
        match self.store.remove(key).await? {
            Some(entry) => {
                info!("Removed contact {}", key);
                Ok(entry.key())
            }
            None => {
                debug!("Remove miss for {}", key);
                Err(Error::not_found(key.clone()))
            }
        }
    }

    /// All entries, in insertion order
    pub async fn list(&self) -> Result<Vec<PhoneEntry>> {
        self.store.list().await
    }

    /// Number of entries in the directory
    pub async fn len(&self) -> Result<usize> {
        self.store.len().await
    }

    /// Check if the directory has no entries
    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}

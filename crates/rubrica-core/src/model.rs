//! Data model for the contact directory
//!
//! A [`PhoneEntry`] is identified solely by its [`ContactKey`]: the
//! `(surname, first_name)` pair, compared case-sensitively.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The `(surname, first_name)` pair identifying a directory entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContactKey {
    /// Contact surname
    pub surname: String,
    /// Contact first name
    pub first_name: String,
}

impl ContactKey {
    /// Create a new contact key
    pub fn new(surname: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            surname: surname.into(),
            first_name: first_name.into(),
        }
    }
}

impl fmt::Display for ContactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.surname, self.first_name)
    }
}

/// A single phone number stored in the directory
///
/// Serialized with the field names of the public HTTP surface
/// (`cognome`, `nome`, `numero`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneEntry {
    /// Contact surname
    #[serde(rename = "cognome")]
    pub surname: String,
    /// Contact first name
    #[serde(rename = "nome")]
    pub first_name: String,
    /// Phone number, format is not validated
    #[serde(rename = "numero")]
    pub number: String,
}

impl PhoneEntry {
    /// Create a new phone entry
    pub fn new(
        surname: impl Into<String>,
        first_name: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        Self {
            surname: surname.into(),
            first_name: first_name.into(),
            number: number.into(),
        }
    }

    /// Key identifying this entry
    pub fn key(&self) -> ContactKey {
        ContactKey::new(self.surname.clone(), self.first_name.clone())
    }

    /// Check whether this entry is stored under `key`
    pub fn matches(&self, key: &ContactKey) -> bool {
        self.surname == key.surname && self.first_name == key.first_name
    }
}

/// Fields supplied by a caller creating a contact
///
/// Each field is either present or absent. Empty strings count as absent,
/// so `?nome=` falls back to the default first name just like omitting it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContact {
    /// Contact surname (required)
    pub surname: Option<String>,
    /// Contact first name (defaulted when absent)
    pub first_name: Option<String>,
    /// Phone number (required)
    pub number: Option<String>,
}

impl NewContact {
    /// Create a request with every field present
    pub fn new(
        surname: impl Into<String>,
        first_name: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        Self {
            surname: Some(surname.into()),
            first_name: Some(first_name.into()),
            number: Some(number.into()),
        }
    }

    /// Set the surname
    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    /// Set the first name
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the phone number
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }
}

/// Treat an empty string as an absent value
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

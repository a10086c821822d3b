//! Contract Test: Default first name
//!
//! Constraints verified:
//! - Omitting the first name on Add stores the configured default
//! - The stored key uses the resolved first name
//! - Duplicate detection runs against the resolved key

mod common;

use common::*;
use rubrica_core::{ContactDirectory, DirectoryConfig, Error, NewContact};

#[tokio::test]
async fn omitted_first_name_stores_default() {
    let dir = directory();

    let stored = dir
        .add(NewContact::default().with_surname("Rossi").with_number("123"))
        .await
        .expect("add succeeds");
    assert_eq!(stored, key("Rossi", "Mario"));

    let entry = dir.lookup(&key("Rossi", "Mario")).await.unwrap();
    assert_eq!(entry.number, "123");
}

#[tokio::test]
async fn default_comes_from_configuration() {
    let dir = ContactDirectory::new(DirectoryConfig::new("Giulia")).unwrap();
    assert_eq!(dir.default_first_name(), "Giulia");

    let stored = dir
        .add(NewContact::default().with_surname("Verdi").with_number("777"))
        .await
        .unwrap();
    assert_eq!(stored, key("Verdi", "Giulia"));
}

#[tokio::test]
async fn defaulted_add_conflicts_with_explicit_default() {
    let dir = directory();
    dir.add(NewContact::new("Rossi", DEFAULT_FIRST_NAME, "123"))
        .await
        .unwrap();

    let err = dir
        .add(NewContact::default().with_surname("Rossi").with_number("999"))
        .await
        .unwrap_err();
    assert_eq!(err, Error::Conflict(key("Rossi", "Mario")));
}

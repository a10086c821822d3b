//! Core traits for the rubrica directory
//!
//! - [`ContactStore`]: Storage backing the [`ContactDirectory`](crate::ContactDirectory)

pub mod contact_store;

pub use contact_store::ContactStore;

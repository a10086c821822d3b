// # rubrica-core
//
// Core library for the rubrica contact directory.
//
// ## Architecture Overview
//
// - **ContactStore**: Trait for the storage holding phone entries
// - **MemoryContactStore**: Lock-guarded in-memory store
// - **ContactDirectory**: Add/lookup/update/remove keyed by (surname, first name)
//
// The HTTP surface lives in `rubrica-http`; this crate never deals with
// status codes or URIs. Every operation returns a typed `Result`.

pub mod config;
pub mod directory;
pub mod error;
pub mod model;
pub mod store;
pub mod traits;

// Re-export core types for convenience
pub use config::{DirectoryConfig, RubricaConfig, ServerConfig};
pub use directory::ContactDirectory;
pub use error::{Error, Result};
pub use model::{ContactKey, NewContact, PhoneEntry};
pub use store::MemoryContactStore;
pub use traits::ContactStore;

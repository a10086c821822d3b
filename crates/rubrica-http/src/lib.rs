//! HTTP adapter for the rubrica directory
//!
//! Translates requests under `/rubrica` into [`ContactDirectory`] calls and
//! their outcomes into status codes, plain-text messages and `Location`
//! headers. No directory logic lives here.
//!
//! | Method   | Path                          | Success            | Failures      |
//! |----------|-------------------------------|--------------------|---------------|
//! | `POST`   | `/rubrica?cognome&nome&numero`| 201 + `Location`   | 400, 409      |
//! | `GET`    | `/rubrica`                    | 200 JSON array     |               |
//! | `GET`    | `/rubrica/{cognome}/{nome}`   | 200 JSON entry     | 404           |
//! | `PUT`    | `/rubrica/{cognome}/{nome}?numero` | 200 text      | 400, 404      |
//! | `DELETE` | `/rubrica/{cognome}/{nome}`   | 200 text           | 404           |
//!
//! [`ContactDirectory`]: rubrica_core::ContactDirectory

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ApiResult, Operation};
pub use routes::{BASE_PATH, router};

//! SQLite backend for the Quad portal store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. Embedded documents (courses, contact
//! details, locations) are stored as JSON text columns, keeping the
//! document-store shape of the data model.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;

//! Core types and trait definitions for the Quad student-union portal.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod access;
pub mod announcement;
pub mod college;
pub mod error;
pub mod role;
pub mod store;
pub mod user;

pub use error::{Error, Result};

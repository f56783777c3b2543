//! Core types and trait definitions for the Rolo contact store.
//!
//! This crate is deliberately free of HTTP dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod contact;
pub mod error;
pub mod store;
pub mod validate;

pub use error::{Error, Result};

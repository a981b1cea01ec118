//! Domain rules for the recipe catalog.
//!
//! Nothing in this crate touches the database or the filesystem; it holds
//! the error type, shared id types, recipe field defaults and validation,
//! and upload filename handling.

pub mod error;
pub mod recipe;
pub mod types;
pub mod upload;

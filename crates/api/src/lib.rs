//! Public API traits and types for the rsassa library
//!
//! This crate provides the public API surface shared by the rsassa crates:
//! the error type every scheme converts into and the [`Signature`] trait.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::{signature, Signature};

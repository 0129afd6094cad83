//! Constant values for rsassa cryptographic operations
//!
//! Algorithm parameters live here so every crate reads them from one place.

#![no_std]

pub mod traditional;
pub mod utils;

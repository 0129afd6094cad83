//! Digital signature schemes
//!
//! This crate implements RSASSA-PKCS1-v1_5 (RFC 8017) over the SHA-2 family,
//! with key-size profiles for 2048, 3072 and 4096-bit moduli.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traditional;

pub use error::{Error, Result};

// Re-exports from traditional schemes
pub use traditional::rsa::{
    HashAlgorithm, Pkcs1v15, Rejection, Rsa2048PrivateKey, Rsa2048PublicKey, RsaPkcs1v15Sha256,
    RsaPrivateKey, RsaPublicKey, RsaSignature, VerifyOutcome,
};

//! # rsassa
//!
//! RSASSA-PKCS1-v1_5 signatures (RFC 8017, section 8.2) over the SHA-2 family.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rsassa = "0.3"
//! ```
//!
//! ```no_run
//! use rsassa::prelude::*;
//! use rsassa::crypto_bigint::U2048;
//!
//! # fn demo(n: U2048, e: U2048, d: U2048) -> rsassa::sign::Result<()> {
//! let signature = rsassa::sign(&n, &d, b"12345")?;
//! assert_eq!(signature.len(), 256);
//!
//! let outcome = rsassa::verify(&n, &e, b"12345", signature.as_bytes())?;
//! assert_eq!(outcome, VerifyOutcome::Valid);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `alloc`: Heap allocation without `std`
//! - `serde`: `Serialize`/`Deserialize` for `HashAlgorithm` and `VerifyOutcome`
//! - `trace`: `tracing` events at the sign/verify boundary
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`rsassa-api`]: Public error type and the `Signature` trait
//! - [`rsassa-internal`]: Constant-time and byte-order helpers
//! - [`rsassa-params`]: Modulus sizes, DigestInfo prefixes and digest sizes
//! - [`rsassa-sign`]: EMSA-PKCS1-v1_5 and the sign/verify engine

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports
pub use rsassa_api as api;
pub use rsassa_internal as internal;
pub use rsassa_params as params;
pub use rsassa_sign as sign;

pub use crypto_bigint;
pub use zeroize;

pub use rsassa_sign::traditional::rsa::{sign, verify};

/// Common imports for rsassa users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::Signature;

    // Re-export the signature scheme
    pub use crate::sign::traditional::rsa::{
        HashAlgorithm, Pkcs1v15, Rejection, Rsa2048PrivateKey, Rsa2048PublicKey,
        RsaPkcs1v15Sha256, RsaPrivateKey, RsaPublicKey, RsaSignature, VerifyOutcome,
    };
}

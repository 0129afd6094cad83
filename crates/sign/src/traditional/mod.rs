//! Traditional signature schemes
//!
//! This module contains the RSA signature schemes.

pub mod rsa;

// Re-export RSA types
pub use rsa::{Pkcs1v15, RsaPkcs1v15Sha256, RsaPrivateKey, RsaPublicKey, RsaSignature};

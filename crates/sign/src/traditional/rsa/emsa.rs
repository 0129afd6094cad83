//! EMSA-PKCS1-v1_5 encoding (RFC 8017, section 9.2)
//!
//! ```text
//! EM = 0x00 || 0x01 || PS || 0x00 || T
//! T  = DigestInfo prefix || H(M)
//! PS = 0xFF repeated k - len(T) - 3 times, at least 8 bytes
//! ```
//!
//! The encoding is deterministic: the same message and length always produce
//! the same bytes.

use alloc::vec::Vec;

use super::hash::HashAlgorithm;
use crate::error::{Error, Result};
use rsassa_params::traditional::rsa::{
    PKCS1_V15_HEADER, PKCS1_V15_MIN_OVERHEAD, PKCS1_V15_PAD_BYTE, PKCS1_V15_SEPARATOR,
};

/// An encoded message of exactly `k` bytes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedMessage(Vec<u8>);

impl EncodedMessage {
    /// Encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes, always the `k` it was encoded for
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true: the minimum encoding is `len(T) + 11` bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for EncodedMessage {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Smallest `k` an encoding with `hash` fits into
pub const fn min_encoded_len(hash: HashAlgorithm) -> usize {
    hash.digest_info_len() + PKCS1_V15_MIN_OVERHEAD
}

/// Hash `message` and encode it into `k` bytes
///
/// # Errors
///
/// - [`Error::MessageTooLong`] if the message exceeds the hash input limit
/// - [`Error::EncodingTooShort`] if `k < len(T) + 11`
pub fn encode(hash: HashAlgorithm, message: &[u8], k: usize) -> Result<EncodedMessage> {
    let digest = hash.digest(message)?;
    encode_digest(hash, digest.as_ref(), k)
}

/// Encode a precomputed digest into `k` bytes
///
/// # Errors
///
/// - [`Error::InvalidDigestLength`] if `digest` is not `hash.output_size()` bytes
/// - [`Error::EncodingTooShort`] if `k < len(T) + 11`
pub fn encode_digest(hash: HashAlgorithm, digest: &[u8], k: usize) -> Result<EncodedMessage> {
    if digest.len() != hash.output_size() {
        return Err(Error::InvalidDigestLength {
            expected: hash.output_size(),
            actual: digest.len(),
        });
    }

    let required = min_encoded_len(hash);
    if k < required {
        return Err(Error::EncodingTooShort {
            required,
            actual: k,
        });
    }

    let prefix = hash.digest_info_prefix();
    let ps_len = k - hash.digest_info_len() - 3;

    let mut em = Vec::with_capacity(k);
    em.extend_from_slice(&PKCS1_V15_HEADER);
    em.resize(PKCS1_V15_HEADER.len() + ps_len, PKCS1_V15_PAD_BYTE);
    em.push(PKCS1_V15_SEPARATOR);
    em.extend_from_slice(prefix);
    em.extend_from_slice(digest);

    debug_assert_eq!(em.len(), k);
    Ok(EncodedMessage(em))
}

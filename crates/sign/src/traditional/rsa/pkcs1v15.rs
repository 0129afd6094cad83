//! RSASSA-PKCS1-v1_5 sign and verify (RFC 8017, sections 8.2.1 and 8.2.2)

use crypto_bigint::Uint;
use rsassa_internal::constant_time::ct_eq;

use super::arith::{pow_mod_public, pow_mod_secret, uint_from_be, uint_to_be};
use super::emsa::encode_digest;
use super::hash::HashAlgorithm;
use super::keys::{RsaPrivateKey, RsaPublicKey, RsaSignature};
use crate::error::{Error, Result};

#[cfg(feature = "trace")]
use tracing::debug;

/// Why a signature was rejected
///
/// Carries no detail derived from secret data or from the recovered encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    /// The signature is longer than the modulus
    SignatureTooLong,
    /// The signature integer is not in `[0, n - 1]`
    OutOfRange,
    /// `s^e mod n` does not fit in `k` bytes
    RepresentativeTooLarge,
    /// The recovered encoding differs from the expected one
    EncodingMismatch,
}

impl Rejection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Rejection::SignatureTooLong => "signature longer than the modulus",
            Rejection::OutOfRange => "signature representative out of range",
            Rejection::RepresentativeTooLarge => "message representative too large",
            Rejection::EncodingMismatch => "encoded message mismatch",
        }
    }
}

/// Result of a verification that ran to completion
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerifyOutcome {
    Valid,
    Invalid(Rejection),
}

impl VerifyOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, VerifyOutcome::Valid)
    }
}

/// RSASSA-PKCS1-v1_5 configured with a hash algorithm and, optionally, a
/// fixed modulus size
///
/// `LIMBS` is the capacity of the integers; the signature length `k` comes
/// from the bit length of the modulus actually supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pkcs1v15<const LIMBS: usize> {
    hash: HashAlgorithm,
    modulus_bits: Option<usize>,
}

impl<const LIMBS: usize> Default for Pkcs1v15<LIMBS> {
    fn default() -> Self {
        Self::new(HashAlgorithm::Sha256)
    }
}

impl<const LIMBS: usize> Pkcs1v15<LIMBS> {
    /// Scheme over `hash` accepting any modulus that fits in `LIMBS`
    pub const fn new(hash: HashAlgorithm) -> Self {
        Self {
            hash,
            modulus_bits: None,
        }
    }

    /// Pin the modulus size; keys of any other bit length are rejected
    pub const fn with_modulus_bits(self, bits: usize) -> Self {
        Self {
            hash: self.hash,
            modulus_bits: Some(bits),
        }
    }

    pub const fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    pub const fn modulus_bits(&self) -> Option<usize> {
        self.modulus_bits
    }

    fn check_modulus(&self, actual: usize) -> Result<()> {
        match self.modulus_bits {
            Some(expected) if expected != actual => {
                Err(Error::ModulusSizeMismatch { expected, actual })
            }
            _ => Ok(()),
        }
    }

    /// Sign `message`
    ///
    /// The signature is exactly `key.size()` bytes. Exponentiation by the
    /// private exponent runs in constant time.
    ///
    /// # Errors
    ///
    /// Encoding errors ([`Error::MessageTooLong`], [`Error::EncodingTooShort`])
    /// and [`Error::ModulusSizeMismatch`] for a pinned profile.
    pub fn sign(&self, key: &RsaPrivateKey<LIMBS>, message: &[u8]) -> Result<RsaSignature> {
        let digest = self.hash.digest(message)?;
        self.sign_prehash(key, digest.as_ref())
    }

    /// Sign a digest computed with [`Self::hash`]
    pub fn sign_prehash(&self, key: &RsaPrivateKey<LIMBS>, digest: &[u8]) -> Result<RsaSignature> {
        self.check_modulus(key.modulus_bits())?;
        let k = key.size();

        #[cfg(feature = "trace")]
        debug!(hash = %self.hash, modulus_bits = key.modulus_bits(), "RSASSA-PKCS1-v1_5 sign");

        let em = encode_digest(self.hash, digest, k)?;

        // RSASP1: the representative must be smaller than the modulus
        let m: Uint<LIMBS> = uint_from_be(em.as_bytes()).ok_or(Error::RepresentativeOutOfRange)?;
        if m >= *key.modulus() {
            return Err(Error::RepresentativeOutOfRange);
        }

        let s = pow_mod_secret(&m, key.private_exponent(), key.modulus());

        // s < n <= 256^k, so the fixed-width conversion cannot overflow
        let bytes = uint_to_be(&s, k).ok_or(Error::RepresentativeOutOfRange)?;
        Ok(RsaSignature::new(bytes))
    }

    /// Verify `signature` over `message`
    ///
    /// A malformed or non-matching signature is `Ok(VerifyOutcome::Invalid)`.
    /// `Err` is reserved for problems with the key or configuration, which are
    /// reported before the signature is examined.
    pub fn verify(
        &self,
        key: &RsaPublicKey<LIMBS>,
        message: &[u8],
        signature: &[u8],
    ) -> Result<VerifyOutcome> {
        let digest = self.hash.digest(message)?;
        self.verify_prehash(key, digest.as_ref(), signature)
    }

    /// Verify `signature` over a digest computed with [`Self::hash`]
    pub fn verify_prehash(
        &self,
        key: &RsaPublicKey<LIMBS>,
        digest: &[u8],
        signature: &[u8],
    ) -> Result<VerifyOutcome> {
        self.check_modulus(key.modulus_bits())?;
        let k = key.size();

        #[cfg(feature = "trace")]
        debug!(hash = %self.hash, modulus_bits = key.modulus_bits(), "RSASSA-PKCS1-v1_5 verify");

        let expected = encode_digest(self.hash, digest, k)?;

        if signature.len() > k {
            return Ok(reject(Rejection::SignatureTooLong));
        }

        let s: Uint<LIMBS> = match uint_from_be(signature) {
            Some(s) if s < *key.modulus() => s,
            _ => return Ok(reject(Rejection::OutOfRange)),
        };

        let m = pow_mod_public(&s, key.public_exponent(), key.modulus());

        let em = match uint_to_be(&m, k) {
            Some(em) => em,
            None => return Ok(reject(Rejection::RepresentativeTooLarge)),
        };

        if ct_eq(&em, expected.as_bytes()) {
            Ok(VerifyOutcome::Valid)
        } else {
            Ok(reject(Rejection::EncodingMismatch))
        }
    }
}

fn reject(reason: Rejection) -> VerifyOutcome {
    #[cfg(feature = "trace")]
    debug!(reason = reason.as_str(), "signature rejected");

    VerifyOutcome::Invalid(reason)
}

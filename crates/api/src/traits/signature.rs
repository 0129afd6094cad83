//! Digital signature traits for rsassa
//!
//! Key generation is outside this API: keys are supplied by the caller on
//! every call and schemes hold no key material between calls.

use crate::Result;
use zeroize::Zeroize;

/// Core trait for digital signature algorithms
///
/// Secret keys are opaque types that cannot be directly manipulated as bytes.
/// Implementations must not require mutable access to key material.
pub trait Signature {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Zeroize;

    /// Signature data type
    type SignatureData: Clone + AsRef<[u8]>;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Sign a message with the given secret key
    ///
    /// # Security Requirements
    ///
    /// Must not leak information about the secret key through timing.
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData>;

    /// Verify a signature against a message and public key
    ///
    /// Returns `Ok(())` for a valid signature and
    /// [`Error::InvalidSignature`](crate::Error::InvalidSignature) otherwise.
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()>;
}

//! RSASSA-PKCS1-v1_5 signatures
//!
//! Implements the signature scheme of RFC 8017, section 8.2, over the SHA-2
//! family:
//!
//! ```text
//! sign:   M -> H(M) -> EMSA-PKCS1-v1_5 -> m -> s = m^d mod n -> k bytes
//! verify: S -> s in [0, n-1] -> m = s^e mod n -> k bytes == EMSA-PKCS1-v1_5(M)
//! ```
//!
//! # Security
//!
//! - Exponentiation by the private exponent is a fixed-window Montgomery
//!   ladder over the full limb width, independent of the exponent value.
//! - The recovered encoding is compared with the expected one in constant time.
//! - Signatures are always exactly `k` bytes; leading zero bytes are kept.
//!
//! Keys are supplied on every call. Nothing here keeps state between calls,
//! so every operation may run concurrently on any number of threads.

mod arith;
pub mod emsa;
pub mod hash;
mod keys;
mod pkcs1v15;


use crypto_bigint::{Uint, U2048, U3072, U4096};
use rsassa_api::{Error as ApiError, Result as ApiResult, Signature as SignatureTrait};
use rsassa_params::traditional::rsa::{RSA_MODULUS_2048, RSA_MODULUS_3072, RSA_MODULUS_4096};

pub use emsa::{encode, encode_digest, EncodedMessage};
pub use hash::{HashAlgorithm, HashOutput};
pub use keys::{RsaPrivateKey, RsaPublicKey, RsaSignature};
pub use pkcs1v15::{Pkcs1v15, Rejection, VerifyOutcome};

use crate::error::Result;

/// Limb count holding a 2048-bit modulus
pub const RSA2048_LIMBS: usize = U2048::LIMBS;

/// Limb count holding a 3072-bit modulus
pub const RSA3072_LIMBS: usize = U3072::LIMBS;

/// Limb count holding a 4096-bit modulus
pub const RSA4096_LIMBS: usize = U4096::LIMBS;

/// 2048-bit profile types
pub type Rsa2048PublicKey = RsaPublicKey<RSA2048_LIMBS>;
pub type Rsa2048PrivateKey = RsaPrivateKey<RSA2048_LIMBS>;

pub type Rsa3072PublicKey = RsaPublicKey<RSA3072_LIMBS>;
pub type Rsa3072PrivateKey = RsaPrivateKey<RSA3072_LIMBS>;

pub type Rsa4096PublicKey = RsaPublicKey<RSA4096_LIMBS>;
pub type Rsa4096PrivateKey = RsaPrivateKey<RSA4096_LIMBS>;

impl Pkcs1v15<RSA2048_LIMBS> {
    /// SHA-256 with a 2048-bit modulus
    pub const fn rsa2048_sha256() -> Self {
        Self::new(HashAlgorithm::Sha256).with_modulus_bits(RSA_MODULUS_2048)
    }
}

impl Pkcs1v15<RSA3072_LIMBS> {
    /// SHA-384 with a 3072-bit modulus
    pub const fn rsa3072_sha384() -> Self {
        Self::new(HashAlgorithm::Sha384).with_modulus_bits(RSA_MODULUS_3072)
    }
}

impl Pkcs1v15<RSA4096_LIMBS> {
    /// SHA-512 with a 4096-bit modulus
    pub const fn rsa4096_sha512() -> Self {
        Self::new(HashAlgorithm::Sha512).with_modulus_bits(RSA_MODULUS_4096)
    }
}

/// Sign `message` with SHA-256 under the private key `(modulus, private_exponent)`
///
/// Returns exactly `ceil(bits(modulus) / 8)` bytes.
pub fn sign<const LIMBS: usize>(
    modulus: &Uint<LIMBS>,
    private_exponent: &Uint<LIMBS>,
    message: &[u8],
) -> Result<RsaSignature> {
    let key = RsaPrivateKey::new(*modulus, *private_exponent)?;
    Pkcs1v15::default().sign(&key, message)
}

/// Verify a SHA-256 signature under the public key `(modulus, public_exponent)`
pub fn verify<const LIMBS: usize>(
    modulus: &Uint<LIMBS>,
    public_exponent: &Uint<LIMBS>,
    message: &[u8],
    signature: &[u8],
) -> Result<VerifyOutcome> {
    let key = RsaPublicKey::new(*modulus, *public_exponent)?;
    Pkcs1v15::default().verify(&key, message, signature)
}

/// RSASSA-PKCS1-v1_5 with SHA-256 and a 2048-bit modulus
pub struct RsaPkcs1v15Sha256;

impl SignatureTrait for RsaPkcs1v15Sha256 {
    type PublicKey = Rsa2048PublicKey;
    type SecretKey = Rsa2048PrivateKey;
    type SignatureData = RsaSignature;

    fn name() -> &'static str {
        "RSASSA-PKCS1-v1_5-SHA256"
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        Pkcs1v15::rsa2048_sha256()
            .sign(secret_key, message)
            .map_err(ApiError::from)
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        let outcome = Pkcs1v15::rsa2048_sha256()
            .verify(public_key, message, signature.as_bytes())
            .map_err(ApiError::from)?;

        match outcome {
            VerifyOutcome::Valid => Ok(()),
            VerifyOutcome::Invalid(reason) => Err(ApiError::InvalidSignature {
                context: "RSASSA-PKCS1-v1_5 verify",
                reason: reason.as_str(),
            }),
        }
    }
}

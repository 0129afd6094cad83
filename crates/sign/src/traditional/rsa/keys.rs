//! RSA key and signature containers
//!
//! Keys are plain integer pairs supplied by the caller; parsing PEM or DER
//! and generating keys happen elsewhere.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crypto_bigint::Uint;
use zeroize::Zeroize;

use super::arith::{byte_len, is_odd, uint_from_be};
use crate::error::{Error, Result};

fn check_modulus<const LIMBS: usize>(n: &Uint<LIMBS>, context: &'static str) -> Result<()> {
    if *n <= Uint::ONE {
        return Err(Error::InvalidKey {
            context,
            reason: "modulus must be greater than one",
        });
    }
    if !is_odd(n) {
        return Err(Error::InvalidKey {
            context,
            reason: "modulus must be odd",
        });
    }
    Ok(())
}

fn check_exponent<const LIMBS: usize>(
    x: &Uint<LIMBS>,
    n: &Uint<LIMBS>,
    context: &'static str,
) -> Result<()> {
    if *x == Uint::ZERO || x >= n {
        return Err(Error::InvalidKey {
            context,
            reason: "exponent must lie in [1, n - 1]",
        });
    }
    Ok(())
}

fn parse<const LIMBS: usize>(bytes: &[u8], context: &'static str) -> Result<Uint<LIMBS>> {
    uint_from_be(bytes).ok_or(Error::InvalidKey {
        context,
        reason: "integer wider than the key size",
    })
}

/// RSA public key `(n, e)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaPublicKey<const LIMBS: usize> {
    n: Uint<LIMBS>,
    e: Uint<LIMBS>,
}

impl<const LIMBS: usize> RsaPublicKey<LIMBS> {
    /// Build a public key, checking that `n` is odd and `0 < e < n`
    pub fn new(n: Uint<LIMBS>, e: Uint<LIMBS>) -> Result<Self> {
        check_modulus(&n, "RSA public key")?;
        check_exponent(&e, &n, "RSA public exponent")?;
        Ok(Self { n, e })
    }

    /// Build a public key from big-endian integers of any width
    pub fn from_be_bytes(n: &[u8], e: &[u8]) -> Result<Self> {
        Self::new(
            parse(n, "RSA modulus")?,
            parse(e, "RSA public exponent")?,
        )
    }

    pub fn modulus(&self) -> &Uint<LIMBS> {
        &self.n
    }

    pub fn public_exponent(&self) -> &Uint<LIMBS> {
        &self.e
    }

    /// Bit length of the modulus
    pub fn modulus_bits(&self) -> usize {
        self.n.bits()
    }

    /// `k`: byte length of the modulus, and of every signature under it
    pub fn size(&self) -> usize {
        byte_len(&self.n)
    }
}

/// RSA private key `(n, d)`
///
/// The private exponent is wiped on drop and never printed.
#[derive(Clone)]
pub struct RsaPrivateKey<const LIMBS: usize> {
    n: Uint<LIMBS>,
    d: Uint<LIMBS>,
}

impl<const LIMBS: usize> RsaPrivateKey<LIMBS> {
    /// Build a private key, checking that `n` is odd and `0 < d < n`
    pub fn new(n: Uint<LIMBS>, d: Uint<LIMBS>) -> Result<Self> {
        check_modulus(&n, "RSA private key")?;
        check_exponent(&d, &n, "RSA private exponent")?;
        Ok(Self { n, d })
    }

    /// Build a private key from big-endian integers of any width
    pub fn from_be_bytes(n: &[u8], d: &[u8]) -> Result<Self> {
        let n = parse(n, "RSA modulus")?;
        let mut d = parse(d, "RSA private exponent")?;
        let key = Self::new(n, d);
        d.zeroize();
        key
    }

    pub fn modulus(&self) -> &Uint<LIMBS> {
        &self.n
    }

    pub(crate) fn private_exponent(&self) -> &Uint<LIMBS> {
        &self.d
    }

    /// Bit length of the modulus
    pub fn modulus_bits(&self) -> usize {
        self.n.bits()
    }

    /// `k`: byte length of the modulus, and of every signature under it
    pub fn size(&self) -> usize {
        byte_len(&self.n)
    }
}

impl<const LIMBS: usize> Zeroize for RsaPrivateKey<LIMBS> {
    fn zeroize(&mut self) {
        self.d.zeroize();
        self.n.zeroize();
    }
}

impl<const LIMBS: usize> Drop for RsaPrivateKey<LIMBS> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<const LIMBS: usize> fmt::Debug for RsaPrivateKey<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("n", &self.n)
            .field("d", &"<redacted>")
            .finish()
    }
}

/// RSASSA-PKCS1-v1_5 signature
///
/// Always exactly `k` bytes: the integer `s` is left-padded with zeros, so a
/// signature whose leading byte is zero keeps its full width.
#[derive(Clone, PartialEq, Eq)]
pub struct RsaSignature(Vec<u8>);

impl RsaSignature {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// `k`, the byte length of the signing modulus
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Lowercase hex of all `k` bytes, leading zeros included
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl AsRef<[u8]> for RsaSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for RsaSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RsaSignature({})", self.to_hex())
    }
}

//! Glue between byte strings and `crypto-bigint` residues

use alloc::vec;
use alloc::vec::Vec;

use crypto_bigint::modular::runtime_mod::{DynResidue, DynResidueParams};
use crypto_bigint::Uint;
use rsassa_internal::endian::copy_be_padded;
use zeroize::Zeroizing;

/// Parse a big-endian byte string of any width
///
/// Returns `None` if the value needs more than `Uint::<LIMBS>::BYTES` bytes.
pub(crate) fn uint_from_be<const LIMBS: usize>(bytes: &[u8]) -> Option<Uint<LIMBS>> {
    let mut buf = Zeroizing::new(vec![0u8; Uint::<LIMBS>::BYTES]);
    if !copy_be_padded(bytes, &mut buf) {
        return None;
    }
    Some(Uint::from_be_slice(&buf))
}

/// Serialize `x` as exactly `k` big-endian bytes, keeping leading zeros
///
/// Returns `None` if `x >= 256^k`.
pub(crate) fn uint_to_be<const LIMBS: usize>(x: &Uint<LIMBS>, k: usize) -> Option<Vec<u8>> {
    let mut full = Zeroizing::new(Vec::with_capacity(Uint::<LIMBS>::BYTES));
    for word in x.as_words().iter().rev() {
        full.extend_from_slice(&word.to_be_bytes());
    }

    let mut out = vec![0u8; k];
    if copy_be_padded(&full, &mut out) {
        Some(out)
    } else {
        None
    }
}

/// Whether `x` is odd
pub(crate) fn is_odd<const LIMBS: usize>(x: &Uint<LIMBS>) -> bool {
    x.as_words().first().is_some_and(|w| w & 1 == 1)
}

/// `base^exponent mod modulus` for a secret exponent
///
/// Montgomery exponentiation over every bit of the limb width: the sequence
/// of operations is independent of the exponent's value and bit length.
/// `modulus` must be odd.
pub(crate) fn pow_mod_secret<const LIMBS: usize>(
    base: &Uint<LIMBS>,
    exponent: &Uint<LIMBS>,
    modulus: &Uint<LIMBS>,
) -> Uint<LIMBS> {
    let params = DynResidueParams::new(modulus);
    DynResidue::new(base, params).pow(exponent).retrieve()
}

/// `base^exponent mod modulus` for a public exponent
///
/// Only iterates over the significant bits of `exponent`, which is public.
/// `modulus` must be odd.
pub(crate) fn pow_mod_public<const LIMBS: usize>(
    base: &Uint<LIMBS>,
    exponent: &Uint<LIMBS>,
    modulus: &Uint<LIMBS>,
) -> Uint<LIMBS> {
    let params = DynResidueParams::new(modulus);
    DynResidue::new(base, params)
        .pow_bounded_exp(exponent, exponent.bits())
        .retrieve()
}

/// Byte length of `x`, `ceil(bits(x) / 8)`
pub(crate) fn byte_len<const LIMBS: usize>(x: &Uint<LIMBS>) -> usize {
    x.bits().div_ceil(8)
}

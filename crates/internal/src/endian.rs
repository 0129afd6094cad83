//! Fixed-width big-endian byte string utilities
//!
//! Integers cross the API boundary as big-endian byte strings of arbitrary
//! width; the arithmetic works on fixed-width buffers.

use crate::constant_time::ct_is_zero;

/// Copy the big-endian integer `src` into `dst`, left-padding with zeros
///
/// Leading zero bytes of `src` beyond the width of `dst` are accepted.
/// Returns `false` (leaving `dst` zeroed) if the value does not fit.
/// Branches only on the lengths of the inputs.
pub fn copy_be_padded(src: &[u8], dst: &mut [u8]) -> bool {
    dst.iter_mut().for_each(|b| *b = 0);

    if src.len() <= dst.len() {
        let offset = dst.len() - src.len();
        dst[offset..].copy_from_slice(src);
        return true;
    }

    let (excess, tail) = src.split_at(src.len() - dst.len());
    if !bool::from(ct_is_zero(excess)) {
        return false;
    }
    dst.copy_from_slice(tail);
    true
}

//! Constants for hash functions

/// Output size of SHA-224 in bytes
pub const SHA224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-384 in bytes
pub const SHA384_OUTPUT_SIZE: usize = 48;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Maximum input of SHA-224 and SHA-256 in bits (FIPS 180-4)
pub const SHA256_MAX_INPUT_BITS: u128 = (1u128 << 64) - 1;

/// Maximum input of SHA-384, SHA-512 and the truncated SHA-512 variants in bits
pub const SHA512_MAX_INPUT_BITS: u128 = u128::MAX;

// DER encodings of DigestInfo minus the digest value (RFC 8017, section 9.2, note 1).
// Each is `SEQUENCE { SEQUENCE { OID, NULL }, OCTET STRING (digest length) }`.

/// DigestInfo prefix for SHA-224
pub const SHA224_DIGEST_INFO_PREFIX: [u8; 19] = [
    0x30, 0x2d, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x04,
    0x05, 0x00, 0x04, 0x1c,
];

/// DigestInfo prefix for SHA-256
pub const SHA256_DIGEST_INFO_PREFIX: [u8; 19] = [
    0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01,
    0x05, 0x00, 0x04, 0x20,
];

/// DigestInfo prefix for SHA-384
pub const SHA384_DIGEST_INFO_PREFIX: [u8; 19] = [
    0x30, 0x41, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x02,
    0x05, 0x00, 0x04, 0x30,
];

/// DigestInfo prefix for SHA-512
pub const SHA512_DIGEST_INFO_PREFIX: [u8; 19] = [
    0x30, 0x51, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x03,
    0x05, 0x00, 0x04, 0x40,
];

/// DigestInfo prefix for SHA-512/224
pub const SHA512_224_DIGEST_INFO_PREFIX: [u8; 19] = [
    0x30, 0x2d, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x05,
    0x05, 0x00, 0x04, 0x1c,
];

/// DigestInfo prefix for SHA-512/256
pub const SHA512_256_DIGEST_INFO_PREFIX: [u8; 19] = [
    0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x06,
    0x05, 0x00, 0x04, 0x20,
];

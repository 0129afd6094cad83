//! Constants for RSA algorithm

/// RSA with 2048-bit modulus
pub const RSA_MODULUS_2048: usize = 2048;

/// RSA with 3072-bit modulus
pub const RSA_MODULUS_3072: usize = 3072;

/// RSA with 4096-bit modulus
pub const RSA_MODULUS_4096: usize = 4096;

/// Common RSA public exponent (65537)
pub const RSA_PUBLIC_EXPONENT: u32 = 65537;

/// Byte length for RSA-2048 key
pub const RSA_2048_BYTE_LENGTH: usize = RSA_MODULUS_2048 / 8;

/// Leading framing bytes of an EMSA-PKCS1-v1_5 encoded message (`0x00 || 0x01`)
pub const PKCS1_V15_HEADER: [u8; 2] = [0x00, 0x01];

/// Byte filling the padding string PS
pub const PKCS1_V15_PAD_BYTE: u8 = 0xFF;

/// Byte separating PS from the DigestInfo
pub const PKCS1_V15_SEPARATOR: u8 = 0x00;

/// Minimum length of the padding string PS (RFC 8017, section 9.2, step 3)
pub const PKCS1_V15_MIN_PAD_LENGTH: usize = 8;

/// Minimum `k - len(T)`: eight bytes of PS plus three framing bytes
pub const PKCS1_V15_MIN_OVERHEAD: usize = PKCS1_V15_MIN_PAD_LENGTH + 3;

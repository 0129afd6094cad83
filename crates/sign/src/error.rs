//! Error types for the signature crate

use core::fmt;

/// Errors that can occur during signature operations
///
/// An invalid signature is not an error: verification reports it as
/// [`VerifyOutcome::Invalid`](crate::VerifyOutcome::Invalid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The message exceeds the input limit of the hash function
    MessageTooLong {
        /// Input limit of the hash function in bits
        limit_bits: u128,
    },

    /// The modulus is too short to hold the encoded message
    EncodingTooShort {
        /// Minimum encoded message length in bytes, `len(T) + 11`
        required: usize,
        /// Byte length of the modulus
        actual: usize,
    },

    /// A precomputed digest does not match the output size of the hash
    InvalidDigestLength { expected: usize, actual: usize },

    /// The message representative is not smaller than the modulus
    RepresentativeOutOfRange,

    /// Key material failed validation
    InvalidKey {
        context: &'static str,
        reason: &'static str,
    },

    /// The key does not have the modulus size this scheme is pinned to
    ModulusSizeMismatch { expected: usize, actual: usize },
}

impl Error {
    /// Whether this error was raised by EMSA-PKCS1-v1_5 encoding
    ///
    /// Encoding errors point at the key parameters or the hash choice,
    /// never at the signature under verification.
    pub fn is_encoding(&self) -> bool {
        matches!(
            self,
            Error::MessageTooLong { .. }
                | Error::EncodingTooShort { .. }
                | Error::InvalidDigestLength { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MessageTooLong { limit_bits } => {
                write!(f, "Message too long: hash input is limited to {} bits", limit_bits)
            }
            Error::EncodingTooShort { required, actual } => {
                write!(
                    f,
                    "Intended encoded message length too short: need {} bytes, modulus has {}",
                    required, actual
                )
            }
            Error::InvalidDigestLength { expected, actual } => {
                write!(f, "Invalid digest length: expected {}, got {}", expected, actual)
            }
            Error::RepresentativeOutOfRange => {
                write!(f, "Message representative out of range")
            }
            Error::InvalidKey { context, reason } => {
                write!(f, "Invalid key: {}: {}", context, reason)
            }
            Error::ModulusSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "Invalid modulus size: expected {} bits, got {}",
                    expected, actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Convert to api::Error
impl From<Error> for rsassa_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::MessageTooLong { .. } => rsassa_api::Error::InvalidParameter {
                context: "EMSA-PKCS1-v1_5 encode",
                reason: "message too long",
            },
            Error::EncodingTooShort { required, actual } => rsassa_api::Error::InvalidLength {
                context: "EMSA-PKCS1-v1_5 encode",
                expected: required,
                actual,
            },
            Error::InvalidDigestLength { expected, actual } => rsassa_api::Error::InvalidLength {
                context: "digest",
                expected,
                actual,
            },
            Error::RepresentativeOutOfRange => rsassa_api::Error::InvalidParameter {
                context: "RSASP1",
                reason: "message representative out of range",
            },
            Error::InvalidKey { context, reason } => {
                rsassa_api::Error::InvalidKey { context, reason }
            }
            Error::ModulusSizeMismatch { expected, actual } => rsassa_api::Error::InvalidLength {
                context: "modulus bits",
                expected,
                actual,
            },
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

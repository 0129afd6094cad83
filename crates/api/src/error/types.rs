//! Error type definitions for signature operations

/// Primary error type for signature operations
///
/// Every variant carries a static `context` naming the operation that failed.
/// Messages are static so the type stays usable without an allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        context: &'static str,
        reason: &'static str,
    },

    /// The signature did not verify, or could not be parsed
    InvalidSignature {
        context: &'static str,
        reason: &'static str,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        reason: &'static str,
    },

    /// Other error
    Other {
        context: &'static str,
        reason: &'static str,
    },
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { reason, .. } => Self::InvalidKey { context, reason },
            Self::InvalidSignature { reason, .. } => Self::InvalidSignature { context, reason },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { reason, .. } => Self::InvalidParameter { context, reason },
            Self::Other { reason, .. } => Self::Other { context, reason },
        }
    }

    /// The operation this error was raised in
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidSignature { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context, reason } => {
                write!(f, "Invalid key: {}: {}", context, reason)
            }
            Self::InvalidSignature { context, reason } => {
                write!(f, "Invalid signature: {}: {}", context, reason)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidParameter { context, reason } => {
                write!(f, "{}: {}", context, reason)
            }
            Self::Other { context, reason } => {
                write!(f, "{}: {}", context, reason)
            }
        }
    }
}

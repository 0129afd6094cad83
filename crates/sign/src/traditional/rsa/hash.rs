//! Hash algorithms usable with EMSA-PKCS1-v1_5
//!
//! Each algorithm resolves to its digest function, the DER DigestInfo prefix
//! identifying it, its output size, and its input limit.

use crate::error::{Error, Result};
use rsassa_params::utils::hash::{
    SHA224_DIGEST_INFO_PREFIX, SHA224_OUTPUT_SIZE, SHA256_DIGEST_INFO_PREFIX,
    SHA256_MAX_INPUT_BITS, SHA256_OUTPUT_SIZE, SHA384_DIGEST_INFO_PREFIX, SHA384_OUTPUT_SIZE,
    SHA512_224_DIGEST_INFO_PREFIX, SHA512_256_DIGEST_INFO_PREFIX, SHA512_DIGEST_INFO_PREFIX,
    SHA512_MAX_INPUT_BITS, SHA512_OUTPUT_SIZE,
};
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};

/// Largest digest any supported algorithm produces
pub const MAX_DIGEST_SIZE: usize = SHA512_OUTPUT_SIZE;

/// Hash algorithm selecting the digest and DigestInfo of an encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HashAlgorithm {
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
}

impl HashAlgorithm {
    /// Every supported algorithm
    pub const ALL: [HashAlgorithm; 6] = [
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha512_224,
        HashAlgorithm::Sha512_256,
    ];

    /// Canonical FIPS 180-4 name
    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha224 => "SHA-224",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Sha512_224 => "SHA-512/224",
            HashAlgorithm::Sha512_256 => "SHA-512/256",
        }
    }

    /// Look an algorithm up by name
    ///
    /// Case-insensitive; hyphens, slashes and underscores are ignored, so `"SHA-256"`,
    /// `"sha256"` and `"Sha-512/256"` are all recognized.
    pub fn from_name(name: &str) -> Option<Self> {
        fn folded(s: &str) -> impl Iterator<Item = u8> + '_ {
            s.bytes()
                .filter(|b| !matches!(b, b'-' | b'/' | b'_'))
                .map(|b| b.to_ascii_lowercase())
        }

        Self::ALL
            .into_iter()
            .find(|alg| folded(alg.name()).eq(folded(name)))
    }

    /// Digest length in bytes
    pub const fn output_size(self) -> usize {
        match self {
            HashAlgorithm::Sha224 | HashAlgorithm::Sha512_224 => SHA224_OUTPUT_SIZE,
            HashAlgorithm::Sha256 | HashAlgorithm::Sha512_256 => SHA256_OUTPUT_SIZE,
            HashAlgorithm::Sha384 => SHA384_OUTPUT_SIZE,
            HashAlgorithm::Sha512 => SHA512_OUTPUT_SIZE,
        }
    }

    /// DER encoding of the DigestInfo up to (not including) the digest value
    pub const fn digest_info_prefix(self) -> &'static [u8] {
        match self {
            HashAlgorithm::Sha224 => &SHA224_DIGEST_INFO_PREFIX,
            HashAlgorithm::Sha256 => &SHA256_DIGEST_INFO_PREFIX,
            HashAlgorithm::Sha384 => &SHA384_DIGEST_INFO_PREFIX,
            HashAlgorithm::Sha512 => &SHA512_DIGEST_INFO_PREFIX,
            HashAlgorithm::Sha512_224 => &SHA512_224_DIGEST_INFO_PREFIX,
            HashAlgorithm::Sha512_256 => &SHA512_256_DIGEST_INFO_PREFIX,
        }
    }

    /// `len(T)`: DigestInfo prefix plus digest
    pub const fn digest_info_len(self) -> usize {
        self.digest_info_prefix().len() + self.output_size()
    }

    /// Input limit of the hash function in bits
    pub const fn max_input_bits(self) -> u128 {
        match self {
            HashAlgorithm::Sha224 | HashAlgorithm::Sha256 => SHA256_MAX_INPUT_BITS,
            _ => SHA512_MAX_INPUT_BITS,
        }
    }

    /// Reject messages longer than the hash function accepts
    ///
    /// Unreachable on current hardware, checked because RFC 8017 requires it.
    pub fn check_message_len(self, len: usize) -> Result<()> {
        let bits = (len as u128).saturating_mul(8);
        if bits > self.max_input_bits() {
            return Err(Error::MessageTooLong {
                limit_bits: self.max_input_bits(),
            });
        }
        Ok(())
    }

    /// Hash `message`
    pub fn digest(self, message: &[u8]) -> Result<HashOutput> {
        self.check_message_len(message.len())?;

        let mut out = HashOutput {
            bytes: [0u8; MAX_DIGEST_SIZE],
            len: self.output_size(),
        };
        match self {
            HashAlgorithm::Sha224 => out.fill(&Sha224::digest(message)),
            HashAlgorithm::Sha256 => out.fill(&Sha256::digest(message)),
            HashAlgorithm::Sha384 => out.fill(&Sha384::digest(message)),
            HashAlgorithm::Sha512 => out.fill(&Sha512::digest(message)),
            HashAlgorithm::Sha512_224 => out.fill(&Sha512_224::digest(message)),
            HashAlgorithm::Sha512_256 => out.fill(&Sha512_256::digest(message)),
        }
        Ok(out)
    }
}

impl core::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Digest value of one of the supported algorithms
#[derive(Clone, PartialEq, Eq)]
pub struct HashOutput {
    bytes: [u8; MAX_DIGEST_SIZE],
    len: usize,
}

impl HashOutput {
    fn fill(&mut self, digest: &[u8]) {
        self.bytes[..self.len].copy_from_slice(digest);
    }
}

impl AsRef<[u8]> for HashOutput {
    fn as_ref(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl core::fmt::Debug for HashOutput {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "HashOutput(")?;
        for b in self.as_ref() {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}

//! Key validation and expanded round keys.

use crate::block::Block;
use crate::error::CipherError;

/// Supported AES key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Classifies a key length in bytes, rejecting unsupported sizes.
    pub fn from_len(len: usize) -> Result<Self, CipherError> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            other => Err(CipherError::InvalidKeyLength(other)),
        }
    }

    /// Number of 32-bit words in the key (`Nk`).
    pub fn key_words(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of encryption rounds (`Nr = Nk + 6`).
    pub fn rounds(self) -> usize {
        self.key_words() + 6
    }
}

/// A validated AES key of 16, 24, or 32 bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct AesKey {
    bytes: Vec<u8>,
    size: KeySize,
}

impl AesKey {
    /// Wraps raw key material, rejecting unsupported lengths.
    pub fn new(bytes: &[u8]) -> Result<Self, CipherError> {
        let size = KeySize::from_len(bytes.len())?;
        Ok(Self {
            bytes: bytes.to_vec(),
            size,
        })
    }

    /// Size class of this key.
    pub fn size(&self) -> KeySize {
        self.size
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Expanded round keys: `Nr + 1` blocks of 16 bytes, immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundKeys(Vec<Block>);

impl RoundKeys {
    pub(crate) fn new(keys: Vec<Block>) -> Self {
        Self(keys)
    }

    /// Number of encryption rounds this schedule drives (`len() - 1`).
    #[inline]
    pub fn rounds(&self) -> usize {
        self.0.len() - 1
    }

    /// Number of round keys in the schedule (`Nr + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the schedule holds no round keys.
    ///
    /// Never the case for a schedule built by [`crate::expand_key`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the round key at the requested index (0..=Nr).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}

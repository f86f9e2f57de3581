//! Error types for the cipher entry points.
//!
//! Every variant is a caller-input validation failure raised synchronously
//! before or during a single call; nothing here is transient or retryable.

use thiserror::Error;

/// Errors returned by key construction and the padded-ECB driver.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    /// Key length is not one of the supported AES sizes.
    #[error("key is {0} bytes; AES keys must be 16, 24, or 32 bytes (128/192/256-bit)")]
    InvalidKeyLength(usize),
    /// Ciphertext length is not a positive multiple of the block size.
    #[error("ciphertext is {0} bytes; expected a positive multiple of 16")]
    InvalidCiphertextLength(usize),
    /// Recovered padding length is zero or larger than the plaintext.
    ///
    /// Decrypting with the wrong key usually produces garbage that still
    /// unpads "successfully"; this variant only fires when the recovered
    /// length would strip more bytes than exist.
    #[error("padding length {0} is outside the recovered plaintext")]
    InvalidPadding(u8),
}

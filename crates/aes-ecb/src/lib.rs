//! Textbook AES (128/192/256-bit keys) with length padding and per-block
//! independent (ECB) framing.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - Key schedule for all three key sizes.
//! - Single-block encryption and decryption on pre-expanded round keys.
//! - A padded multi-block driver: [`encrypt`] and [`decrypt`].
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened. Blocks are processed independently with no chaining, so
//! identical plaintext blocks yield identical ciphertext blocks under a
//! fixed key. Callers that need integrity must verify it separately.
//!
//! ```
//! use aes_ecb::{decrypt, encrypt};
//!
//! let key = b"1234567812345678";
//! let ciphertext = encrypt(b"Hello, world!", key).unwrap();
//! assert_eq!(decrypt(&ciphertext, key).unwrap(), b"Hello, world!");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod padding;
mod round;
mod sbox;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt, decrypt_block, encrypt, encrypt_block, expand_key, Aes};
pub use crate::error::CipherError;
pub use crate::key::{AesKey, KeySize, RoundKeys};

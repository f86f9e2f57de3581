//! Length padding for the block driver.
//!
//! Padding appends `pad_length` copies of the byte `pad_length`, where
//! `pad_length = 16 - len % 16`. The value is always 1..=16, so input
//! already aligned to a block boundary gains a full padding block and the
//! final byte of any padded buffer states how much to strip.

use crate::block::BLOCK_SIZE;
use crate::error::CipherError;

/// Extends `data` to the next block boundary.
pub(crate) fn pad(data: &mut Vec<u8>) {
    let pad_length = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    data.resize(data.len() + pad_length, pad_length as u8);
}

/// Strips the padding announced by the final byte.
///
/// The stripped bytes are not compared against the announced value, so a
/// wrong key typically yields garbage rather than an error. Only a length
/// that cannot be stripped (zero, or past the start of the buffer) is
/// rejected.
pub(crate) fn unpad(data: &mut Vec<u8>) -> Result<(), CipherError> {
    let pad_length = match data.last() {
        Some(&byte) => usize::from(byte),
        None => return Err(CipherError::InvalidPadding(0)),
    };
    if pad_length == 0 || pad_length > data.len() {
        return Err(CipherError::InvalidPadding(pad_length as u8));
    }
    data.truncate(data.len() - pad_length);
    Ok(())
}

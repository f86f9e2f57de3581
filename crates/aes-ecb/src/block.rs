//! Block representation helpers.
//!
//! A block is kept as a flat 16-byte array in column-major state order:
//! byte `i` sits at row `i % 4`, column `i / 4`, so bytes 0..4 form the
//! first state column. This matches the order bytes arrive on the wire,
//! so no transposition is needed when loading or storing blocks.

/// Size of one AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub(crate) fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Copies a 16-byte chunk into an owned block.
///
/// Callers must hand in exactly [`BLOCK_SIZE`] bytes; the driver only
/// calls this from `chunks_exact(BLOCK_SIZE)` iterators.
#[inline]
pub(crate) fn from_chunk(chunk: &[u8]) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(chunk);
    block
}

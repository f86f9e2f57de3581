//! AES round transformations and GF(2^8) arithmetic.
//!
//! All transforms operate in place on a flat column-major state (see
//! [`crate::block`]). The only field primitive is [`xtime`]; every
//! MixColumns coefficient is a chain of doublings combined with XOR.

use crate::block::{xor_in_place, Block};
use crate::sbox::{inv_sbox, sbox};

/// Doubles a byte under GF(2^8) with reduction polynomial 0x11B.
#[inline]
pub(crate) fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

/// Applies SubBytes to the state in place.
#[inline]
pub(crate) fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub(crate) fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` positions.
#[inline]
pub(crate) fn shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[row + 4 * col] = src[row + 4 * ((col + row) % 4)];
        }
    }
}

/// Performs the inverse of ShiftRows: row `r` rotates right by `r`.
#[inline]
pub(crate) fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[row + 4 * ((col + row) % 4)] = src[row + 4 * col];
        }
    }
}

// MixColumns multiplies each column by the circulant matrix
// [2 3 1 1; 1 2 3 1; 1 1 2 3; 3 1 1 2] over GF(2^8),
// with 2·x = xtime(x) and 3·x = xtime(x) ^ x.
fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
    col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
}

// Inverse matrix rows are rotations of [14, 11, 13, 9]. Each coefficient
// decomposes into doublings: 14 = 8^4^2, 11 = 8^2^1, 13 = 8^4^1, 9 = 8^1,
// so 2x/4x/8x of every column byte are computed once and combined.
fn inv_mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    let (b0, b1, b2, b3) = (xtime(a0), xtime(a1), xtime(a2), xtime(a3));
    let (c0, c1, c2, c3) = (xtime(b0), xtime(b1), xtime(b2), xtime(b3));
    let (d0, d1, d2, d3) = (xtime(c0), xtime(c1), xtime(c2), xtime(c3));
    col[0] = (d0 ^ c0 ^ b0) ^ (d1 ^ b1 ^ a1) ^ (d2 ^ c2 ^ a2) ^ (d3 ^ a3);
    col[1] = (d0 ^ a0) ^ (d1 ^ c1 ^ b1) ^ (d2 ^ b2 ^ a2) ^ (d3 ^ c3 ^ a3);
    col[2] = (d0 ^ c0 ^ a0) ^ (d1 ^ a1) ^ (d2 ^ c2 ^ b2) ^ (d3 ^ b3 ^ a3);
    col[3] = (d0 ^ b0 ^ a0) ^ (d1 ^ c1 ^ a1) ^ (d2 ^ a2) ^ (d3 ^ c3 ^ b3);
}

/// MixColumns over all four columns.
#[inline]
pub(crate) fn mix_columns(state: &mut Block) {
    for col in 0..4 {
        let idx = col * 4;
        let mut column = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        mix_single_column(&mut column);
        state[idx..idx + 4].copy_from_slice(&column);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub(crate) fn inv_mix_columns(state: &mut Block) {
    for col in 0..4 {
        let idx = col * 4;
        let mut column = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        inv_mix_single_column(&mut column);
        state[idx..idx + 4].copy_from_slice(&column);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub(crate) fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xtime_known_values() {
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0xae), 0x47);
        assert_eq!(xtime(0x47), 0x8e);
        assert_eq!(xtime(0x8e), 0x07);
    }

    #[test]
    fn shift_rows_moves_expected_bytes() {
        let mut state: Block = core::array::from_fn(|i| i as u8);
        shift_rows(&mut state);
        // Row 0 untouched, row 1 rotated left by one column, row 3 by three.
        assert_eq!(state[0], 0);
        assert_eq!(state[4], 4);
        assert_eq!(state[1], 5);
        assert_eq!(state[13], 1);
        assert_eq!(state[3], 15);
        assert_eq!(state[15], 11);
    }

    #[test]
    fn inv_shift_rows_undoes_shift_rows() {
        let mut state: Block = core::array::from_fn(|i| (i as u8).wrapping_mul(7));
        let original = state;
        shift_rows(&mut state);
        inv_shift_rows(&mut state);
        assert_eq!(state, original);
    }

    #[test]
    fn mix_columns_matches_fips_example() {
        // FIPS-197 §5.1.3 test column.
        let mut column = [0xdb, 0x13, 0x53, 0x45];
        mix_single_column(&mut column);
        assert_eq!(column, [0x8e, 0x4d, 0xa1, 0xbc]);
    }

    #[test]
    fn inv_mix_columns_undoes_mix_columns() {
        let mut state: Block = core::array::from_fn(|i| (i as u8).wrapping_mul(31).wrapping_add(3));
        let original = state;
        mix_columns(&mut state);
        assert_ne!(state, original);
        inv_mix_columns(&mut state);
        assert_eq!(state, original);
    }

    #[test]
    fn sub_bytes_round_trips() {
        let mut state: Block = *b"0123456789abcdef";
        let original = state;
        sub_bytes(&mut state);
        inv_sub_bytes(&mut state);
        assert_eq!(state, original);
    }
}

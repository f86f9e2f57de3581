//! Key schedule, single-block transforms, and the padded-ECB driver.

use core::convert::TryInto;

use crate::block::{from_chunk, Block, BLOCK_SIZE};
use crate::error::CipherError;
use crate::key::{AesKey, RoundKeys};
use crate::padding::{pad, unpad};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;

// Round constants consumed during key expansion. Ten entries cover every
// key size: even Nr = 14 with Nk = 8 only consumes seven.
const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    let b0 = sbox((word >> 24) as u8) as u32;
    let b1 = sbox((word >> 16) as u8) as u32;
    let b2 = sbox((word >> 8) as u8) as u32;
    let b3 = sbox(word as u8) as u32;
    (b0 << 24) | (b1 << 16) | (b2 << 8) | b3
}

/// Expands a validated key into `Nr + 1` round keys.
pub fn expand_key(key: &AesKey) -> RoundKeys {
    let nk = key.size().key_words();
    let nr = key.size().rounds();
    let total_words = 4 * (nr + 1);

    let mut w = vec![0u32; total_words];
    for (i, chunk) in key.bytes().chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        w[i] = u32::from_be_bytes(bytes);
    }

    // Rcon advances only on the RotWord branch, never on the others.
    let mut rcon_used = 0;
    for i in nk..total_words {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[rcon_used]) << 24);
            rcon_used += 1;
        } else if nk == 8 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    let mut round_keys = Vec::with_capacity(nr + 1);
    for words in w.chunks_exact(4) {
        let mut round_key = [0u8; BLOCK_SIZE];
        for (word_idx, word) in words.iter().enumerate() {
            round_key[word_idx * 4..word_idx * 4 + 4].copy_from_slice(&word.to_be_bytes());
        }
        round_keys.push(round_key);
    }

    RoundKeys::new(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let nr = round_keys.rounds();
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..nr {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(nr));

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let nr = round_keys.rounds();
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(nr));
    for round in (1..nr).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state
}

/// An AES cipher bound to one key, with padded per-block-independent framing.
///
/// The round-key schedule is built once at construction and never mutated,
/// so an instance can be shared freely across threads. Every block is
/// processed independently (ECB); identical plaintext blocks encrypt to
/// identical ciphertext blocks under the same instance.
pub struct Aes {
    round_keys: RoundKeys,
}

impl Aes {
    /// Builds a cipher from raw key material of 16, 24, or 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        let key = AesKey::new(key)?;
        Ok(Self {
            round_keys: expand_key(&key),
        })
    }

    /// The expanded schedule driving this instance.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Pads `data` to a whole number of blocks and encrypts each block.
    ///
    /// The result is always a non-empty multiple of 16 bytes: aligned
    /// input gains a full padding block.
    pub fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        let mut padded = data.to_vec();
        pad(&mut padded);

        let mut out = Vec::with_capacity(padded.len());
        for chunk in padded.chunks_exact(BLOCK_SIZE) {
            let block = from_chunk(chunk);
            out.extend_from_slice(&encrypt_block(&block, &self.round_keys));
        }
        out
    }

    /// Decrypts each block of `data` and strips the length padding.
    ///
    /// `data` must be a positive multiple of 16 bytes. Decrypting with the
    /// wrong key is not detected here: the output is garbage unless the
    /// recovered padding length happens to be unstrippable, in which case
    /// [`CipherError::InvalidPadding`] is returned.
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::InvalidCiphertextLength(data.len()));
        }

        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks_exact(BLOCK_SIZE) {
            let block = from_chunk(chunk);
            out.extend_from_slice(&decrypt_block(&block, &self.round_keys));
        }
        unpad(&mut out)?;
        Ok(out)
    }
}

/// Encrypts `data` under `key`, padding it to a whole number of blocks.
///
/// Convenience wrapper that builds an [`Aes`] instance per call; callers
/// encrypting many payloads under one key should construct the instance
/// once and reuse it.
pub fn encrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
    Ok(Aes::new(key)?.encrypt(data))
}

/// Decrypts `data` under `key` and strips the length padding.
pub fn decrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
    Aes::new(key)?.decrypt(data)
}

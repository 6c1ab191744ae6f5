//! FIPS-197 key expansion.

use core::convert::TryInto;

use crate::error::Result;
use crate::key::{KeySchedule, KeySize};
use crate::sbox::sbox;

/// Round constants injected every Nk words to break symmetry between
/// round keys. Ten entries cover every supported key size; the 256-bit
/// schedule consumes at most seven.
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

/// Expands a 16-, 24-, or 32-byte key into `Nr + 1` round keys.
///
/// Fails with `Error::InvalidKeyLength` for any other byte count; the
/// key is never truncated or padded.
pub fn expand_key(key: &[u8]) -> Result<KeySchedule> {
    let size = KeySize::from_byte_len(key.len())?;
    let nk = size.nk();
    let word_count = 4 * (size.nr() + 1);

    let mut w = vec![0u32; word_count];
    for (i, chunk) in key.chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        w[i] = u32::from_be_bytes(bytes);
    }

    for i in nk..word_count {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / nk - 1]) << 24);
        } else if nk > 6 && i % nk == 4 {
            // Extra SubWord step unique to the 256-bit schedule.
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    // Serialize words into 16-byte round keys: word w[4r + c] lands
    // big-endian in bytes [4c, 4c + 4), i.e. column c of round r.
    let mut round_keys = vec![[0u8; 16]; size.nr() + 1];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for word_idx in 0..4 {
            let bytes = w[round * 4 + word_idx].to_be_bytes();
            round_key[word_idx * 4..word_idx * 4 + 4].copy_from_slice(&bytes);
        }
    }

    Ok(KeySchedule::new(round_keys, size))
}

//! The four round transformations and their inverses.

use crate::block::{xor_in_place, Block};
use crate::gf::{MUL_11, MUL_13, MUL_14, MUL_2, MUL_3, MUL_9};
use crate::sbox::{inv_sbox, sbox};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` positions.
///
/// Writes through a scratch buffer; an in-place cyclic rotation would
/// overwrite bytes it still has to read.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let mut tmp = [0u8; 16];
    for row in 0..4 {
        for col in 0..4 {
            tmp[row + 4 * col] = state[row + 4 * ((col + row) % 4)];
        }
    }
    *state = tmp;
}

/// Performs the inverse of ShiftRows: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let mut tmp = [0u8; 16];
    for row in 0..4 {
        for col in 0..4 {
            tmp[row + 4 * col] = state[row + 4 * ((col + 4 - row) % 4)];
        }
    }
    *state = tmp;
}

fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = MUL_2[a0 as usize] ^ MUL_3[a1 as usize] ^ a2 ^ a3;
    col[1] = a0 ^ MUL_2[a1 as usize] ^ MUL_3[a2 as usize] ^ a3;
    col[2] = a0 ^ a1 ^ MUL_2[a2 as usize] ^ MUL_3[a3 as usize];
    col[3] = MUL_3[a0 as usize] ^ a1 ^ a2 ^ MUL_2[a3 as usize];
}

fn inv_mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = MUL_14[a0 as usize] ^ MUL_11[a1 as usize] ^ MUL_13[a2 as usize] ^ MUL_9[a3 as usize];
    col[1] = MUL_9[a0 as usize] ^ MUL_14[a1 as usize] ^ MUL_11[a2 as usize] ^ MUL_13[a3 as usize];
    col[2] = MUL_13[a0 as usize] ^ MUL_9[a1 as usize] ^ MUL_14[a2 as usize] ^ MUL_11[a3 as usize];
    col[3] = MUL_11[a0 as usize] ^ MUL_13[a1 as usize] ^ MUL_9[a2 as usize] ^ MUL_14[a3 as usize];
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for col in 0..4 {
        let idx = col * 4;
        let mut column = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        mix_single_column(&mut column);
        state[idx..idx + 4].copy_from_slice(&column);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for col in 0..4 {
        let idx = col * 4;
        let mut column = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        inv_mix_single_column(&mut column);
        state[idx..idx + 4].copy_from_slice(&column);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

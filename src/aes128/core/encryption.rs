use super::constants::{MIX_MATRIX, sub_byte};
use super::util::{State, add_round_key, mix_column};
use crate::aes128::key::{KeySchedule, NUM_ROUNDS};

/// Core AES-128 encryption function. Encrypts a 16 byte block using the expanded key schedule.
#[inline(always)]
pub fn encrypt_block(plaintext: &[u8; 16], schedule: &KeySchedule) -> [u8; 16] {
    let mut state: State = *plaintext;

    // add first round key to state
    add_round_key(&mut state, schedule.round_key(0));

    // perform all rounds except for the last
    for round in 1..NUM_ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, schedule.round_key(round));
    }

    // last round skips mixcolumns step
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, schedule.round_key(NUM_ROUNDS));

    state
}

/// SubBytes step. Each byte is substituted using the SBOX.
#[inline(always)]
pub(crate) fn sub_bytes(state: &mut State) {
    for byte in state {
        *byte = sub_byte(*byte);
    }
}

/// ShiftRows step. Row `r` is rotated left by `r` positions, wrapping around.
/// [
///     01 02 03 04   ---->   01 02 03 04
///     05 06 07 08   ---->   06 07 08 05
///     09 10 11 12   ---->   11 12 09 10
///     13 14 15 16   ---->   16 13 14 15
/// ]
#[inline(always)]
pub(crate) fn shift_rows(state: &mut State) {
    // state is stored as columns: [c0, c0, c0, c0, c1, ... c1, c2, ... c2, ...]
    // for row,col of updated state, old value is at ((col + row) & 3) * 4 + row
    let s = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[col * 4 + row] = s[((col + row) & 3) * 4 + row];
        }
    }
}

/// MixColumns step. Each column is multiplied by a constant matrix using Galois field multiplication.
/// [ d0 ]      [ 2  3  1  1 ]  [ b0 ]
/// | d1 |  =   | 1  2  3  1 |  | b1 |
/// | d2 |      | 1  1  2  3 |  | b2 |
/// [ d3 ]      [ 3  1  1  2 ]  [ b3 ]
#[inline(always)]
pub(crate) fn mix_columns(state: &mut State) {
    for col in state.chunks_exact_mut(4) {
        mix_column(col, &MIX_MATRIX);
    }
}

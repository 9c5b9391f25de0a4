use super::constants::{INV_MIX_MATRIX, sub_byte_inv};
use super::util::{State, add_round_key, mix_column};
use crate::aes128::key::{KeySchedule, NUM_ROUNDS};

/// Core AES-128 decryption function. Decrypts a 16 byte block using the expanded key schedule.
#[inline(always)]
pub fn decrypt_block(ciphertext: &[u8; 16], schedule: &KeySchedule) -> [u8; 16] {
    let mut state: State = *ciphertext;

    add_round_key(&mut state, schedule.round_key(NUM_ROUNDS));

    for round in (1..NUM_ROUNDS).rev() {
        shift_rows_inv(&mut state);
        sub_bytes_inv(&mut state);
        add_round_key(&mut state, schedule.round_key(round));
        mix_columns_inv(&mut state);
    }

    shift_rows_inv(&mut state);
    sub_bytes_inv(&mut state);
    add_round_key(&mut state, schedule.round_key(0));

    state
}

/// Inverse SubBytes step. Each byte is substituted using the inverse SBOX.
#[inline(always)]
pub(crate) fn sub_bytes_inv(state: &mut State) {
    for byte in state {
        *byte = sub_byte_inv(*byte);
    }
}

/// Inverse ShiftRows step. Row `r` is rotated right by `r` positions.
#[inline(always)]
pub(crate) fn shift_rows_inv(state: &mut State) {
    let s = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[col * 4 + row] = s[((col + 4 - row) & 3) * 4 + row];
        }
    }
}

/// Inverse MixColumns step.
/// [ b0 ]      [ 14  11  13  09 ]  [ d0 ]
/// | b1 |  =   | 09  14  11  13 |  | d1 |
/// | b2 |      | 13  09  14  11 |  | d2 |
/// [ b3 ]      [ 11  13  09  14 ]  [ d3 ]
#[inline(always)]
pub(crate) fn mix_columns_inv(state: &mut State) {
    for col in state.chunks_exact_mut(4) {
        mix_column(col, &INV_MIX_MATRIX);
    }
}

use super::galois::gf_mul;

/// 16-byte working value of one block. Byte `i` sits at row `i % 4`, column `i / 4`.
pub(crate) type State = [u8; 16];

// used for both encryption and decryption, XORs each state column with the matching round key word
#[inline(always)]
pub(crate) fn add_round_key(state: &mut State, round_key: &[u8; 16]) {
    for (col, word) in state.chunks_exact_mut(4).zip(round_key.chunks_exact(4)) {
        for (s, k) in col.iter_mut().zip(word) {
            *s ^= k;
        }
    }
}

// multiplies one state column by a circulant coefficient matrix
#[inline(always)]
pub(crate) fn mix_column(col: &mut [u8], matrix: &[[u8; 4]; 4]) {
    let c = [col[0], col[1], col[2], col[3]];
    for (row, coeffs) in matrix.iter().enumerate() {
        col[row] = gf_mul(coeffs[0], c[0])
            ^ gf_mul(coeffs[1], c[1])
            ^ gf_mul(coeffs[2], c[2])
            ^ gf_mul(coeffs[3], c[3]);
    }
}

use crate::aes128::error::{Error, Result};

/// Block size in bytes.
pub const BLOCK_LEN: usize = 16;

#[inline(always)]
pub(crate) fn xor_words(a: &[u8; 4], b: &[u8; 4]) -> [u8; 4] {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

/// PKCS#7 padding to a 16-byte boundary.
///
/// Always pads: input that is already block aligned gains a full block of `0x10`, so the
/// output length is always a positive multiple of 16.
///
/// ## Examples
/// ```
/// use aes128::pad;
///
/// assert_eq!(pad(&[]), vec![0x10; 16]);
/// assert_eq!(pad(&[0xaa; 15]).last(), Some(&0x01));
/// assert_eq!(pad(&[0xaa; 16]).len(), 32);
/// ```
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_LEN - data.len() % BLOCK_LEN;

    let total_len = data
        .len()
        .checked_add(pad_len)
        .expect("data too large to pad");

    let mut out = vec![0u8; total_len];
    out[..data.len()].copy_from_slice(data);
    out[data.len()..].fill(pad_len as u8);
    out
}

/// Remove and validate PKCS#7 padding. Returns a PaddingCorruption error, leaving `input`
/// untouched, if the trailing bytes do not describe a consistent padding length.
pub fn unpad(input: &mut Vec<u8>) -> Result<()> {
    let Some(&last) = input.last() else {
        return Err(Error::InvalidCiphertext {
            len: 0,
            context: "unpad: attempted to unpad empty input",
        });
    };

    let pad = last as usize;
    if pad == 0 || pad > BLOCK_LEN || pad > input.len() {
        return Err(Error::PaddingCorruption { pad: last });
    }

    let start = input.len() - pad;
    if !input[start..].iter().all(|&b| b == last) {
        return Err(Error::PaddingCorruption { pad: last });
    }

    input.truncate(start);
    Ok(())
}

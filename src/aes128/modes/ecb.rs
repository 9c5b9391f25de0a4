use rayon::prelude::*;

use crate::aes128::core::{decrypt_block, encrypt_block};
use crate::aes128::error::*;
use crate::aes128::key::KeySchedule;
use crate::aes128::modes::util::PARALLEL_THRESHOLD;
use crate::aes128::util::BLOCK_LEN;

/// Encrypts every 16-byte block of `buf` in place. Blocks are independent, so inputs over
/// [PARALLEL_THRESHOLD] are spread over the rayon pool; block `i` of the output is always
/// the encryption of block `i` of the input.
pub fn ecb_encrypt_in_place(buf: &mut [u8], schedule: &KeySchedule) -> Result<()> {
    if buf.len() > PARALLEL_THRESHOLD {
        ecb_core_parallel(buf, schedule, encrypt_block)
    } else {
        ecb_core_serial(buf, schedule, encrypt_block)
    }
}

/// Decrypts every 16-byte block of `buf` in place. Padding is left for the caller to remove.
pub fn ecb_decrypt_in_place(buf: &mut [u8], schedule: &KeySchedule) -> Result<()> {
    if buf.len() > PARALLEL_THRESHOLD {
        ecb_core_parallel(buf, schedule, decrypt_block)
    } else {
        ecb_core_serial(buf, schedule, decrypt_block)
    }
}

/// Core ECB algorithm, one block after another on the calling thread.
pub fn ecb_core_serial(
    buf: &mut [u8],
    schedule: &KeySchedule,
    block_fn: fn(&[u8; 16], &KeySchedule) -> [u8; 16],
) -> Result<()> {
    check_aligned(buf)?;

    for chunk in buf.chunks_exact_mut(BLOCK_LEN) {
        let block: &mut [u8; 16] = chunk.try_into().unwrap(); // safe unwrap, loop guarantees exact chunks 16
        *block = block_fn(block, schedule);
    }

    Ok(())
}

/// Core ECB algorithm, blocks fanned out over the rayon pool. Returns once every block is done.
pub fn ecb_core_parallel(
    buf: &mut [u8],
    schedule: &KeySchedule,
    block_fn: fn(&[u8; 16], &KeySchedule) -> [u8; 16],
) -> Result<()> {
    check_aligned(buf)?;

    buf.par_chunks_exact_mut(BLOCK_LEN).for_each(|chunk| {
        let block: &mut [u8; 16] = chunk.try_into().unwrap(); // safe unwrap, exact chunks of 16
        *block = block_fn(block, schedule);
    });

    Ok(())
}

// a partial block reaching the cipher is a chunking bug in the caller
fn check_aligned(buf: &[u8]) -> Result<()> {
    match buf.len() % BLOCK_LEN {
        0 => Ok(()),
        rem => Err(Error::InvalidBlockLength { len: rem }),
    }
}

//! AES-128 from first principles: key schedule, round transforms and GF(2^8) arithmetic,
//! plus always-pad PKCS#7 and a buffered, parallel ECB pipeline for whole files.
//!
//! Only the 128-bit key variant is provided. Blocks are processed independently (electronic
//! codebook), with no authentication and no side-channel hardening.

mod aes128;

pub use aes128::{
    BLOCK_LEN, Cipher, DEFAULT_BUFFER_SIZE, Error, KEY_LEN, Key, KeySchedule, NUM_ROUNDS,
    NUM_WORDS, Result, decrypt_block, decrypt_stream, encrypt_block, encrypt_stream, expand_key,
    gf_mul, pad, unpad,
};

//! Core AES-128 implementation for encryption and decryption of a 16 byte block. Exports
//! encrypt_block, decrypt_block and the GF(2^8) multiply used by MixColumns.

pub(crate) mod constants;
mod decryption;
mod encryption;
mod galois;
mod util;

pub use decryption::decrypt_block;
pub use encryption::encrypt_block;
pub use galois::gf_mul;

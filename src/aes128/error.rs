use thiserror::Error;
use rand::rand_core;

/// AES-128 Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// AES-128 Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to instantiate an AES-128 key from anything other than 16 bytes.
    #[error("invalid key length: {len} bytes (expected 16)")]
    InvalidKeyLength { len: usize },

    /// An entry of a comma-separated key list was not a decimal byte value (0-255).
    #[error("invalid key byte {entry:?} (expected a decimal value from 0 to 255)")]
    InvalidKeyFormat { entry: String },

    /// A block handed to the cipher was not exactly 16 bytes. Indicates a chunking bug in the caller.
    #[error("invalid block length: {len} bytes (expected 16)")]
    InvalidBlockLength { len: usize },

    /// Provided ciphertext that did not match the expected format.
    #[error("invalid ciphertext length: {len} bytes ({context})")]
    InvalidCiphertext { len: usize, context: &'static str },

    /// Trailing padding bytes of a decrypted message were not consistent with the padding length.
    #[error("padding corrupted (trailing byte {pad:#04x} does not describe valid padding)")]
    PaddingCorruption { pad: u8 },

    /// Stream buffer size must be a non-zero multiple of the block size.
    #[error("invalid buffer size: {size} bytes (expected a non-zero multiple of 16)")]
    InvalidBufferSize { size: usize },

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),

    /// Reading or writing a stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

mod cipher;
mod core;
mod error;
mod key;
mod modes;
mod stream;
mod util;

pub use cipher::Cipher;
pub use self::core::{decrypt_block, encrypt_block, gf_mul};
pub use error::{Error, Result};
pub use key::{KEY_LEN, Key, KeySchedule, NUM_ROUNDS, NUM_WORDS, expand_key};
pub use stream::{DEFAULT_BUFFER_SIZE, decrypt_stream, encrypt_stream};
pub use util::{BLOCK_LEN, pad, unpad};

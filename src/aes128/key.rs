//! Defines the [`Key`] struct, which holds a valid 128-bit AES key, and the [`KeySchedule`]
//! expanded from it. Keys can be randomly generated, constructed from an existing byte slice,
//! or parsed from a comma-separated list of decimal byte values.

use std::fmt;
use std::str::FromStr;

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::aes128::core::constants::{RCON, sub_byte};
use crate::aes128::error::{Error, Result};
use crate::aes128::util::xor_words;

/// Key size in bytes.
pub const KEY_LEN: usize = 16;
/// Number of rounds performed by AES-128.
pub const NUM_ROUNDS: usize = 10;
/// Number of 4-byte words produced by the key schedule.
pub const NUM_WORDS: usize = 4 * (NUM_ROUNDS + 1);

const NK: usize = KEY_LEN / 4;

/// Contains a valid AES-128 key. Can be instantiated with a random key, built from a slice
/// of exactly 16 bytes, or parsed from a comma-separated list of 16 decimal byte values.
/// A `Key` is required to instantiate a [Cipher](crate::Cipher).
///
/// ## Examples
/// ```
/// # fn main() -> aes128::Result<()> {
/// use aes128::Key;
///
/// let random = Key::rand_key()?;
/// assert_eq!(random.as_bytes().len(), 16);
///
/// let key_bytes: [u8; 16] = [0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
///                            0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c];
/// let key = Key::try_from_slice(&key_bytes)?;
/// assert_eq!(key.as_bytes(), &key_bytes);
///
/// let parsed: Key = "43,126,21,22,40,174,210,166,171,247,21,136,9,207,79,60".parse()?;
/// assert_eq!(parsed, key);
///
/// // anything other than 16 bytes is rejected
/// assert!(Key::try_from_slice(&key_bytes[..15]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: [u8; KEY_LEN],
}

impl Key {
    /// Generate a random 128-bit key. Returns Error if OsRng fails.
    pub fn rand_key() -> Result<Self> {
        let mut bytes = [0u8; KEY_LEN];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self { bytes })
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_LEN] = bytes
            .try_into()
            .map_err(|_| Error::InvalidKeyLength { len: bytes.len() })?;
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key as an array of bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }

    /// Formats the key as comma-separated decimal byte values, the format accepted by [`FromStr`].
    pub fn to_decimal_list(&self) -> String {
        self.bytes
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = s
            .split(',')
            .map(|entry| {
                let entry = entry.trim();
                entry.parse::<u8>().map_err(|_| Error::InvalidKeyFormat {
                    entry: entry.to_string(),
                })
            })
            .collect::<Result<Vec<u8>>>()?;
        Self::try_from_slice(&bytes)
    }
}

/// Expanded AES-128 key: 44 four-byte words, read as 11 round keys of 16 bytes.
/// Round key `r` is made of words `4r..4r + 3`.
#[derive(Clone, PartialEq, Eq)]
pub struct KeySchedule {
    round_keys: [[u8; 16]; NUM_ROUNDS + 1],
}

impl KeySchedule {
    /// Round key `round` (0..=10) as 16 bytes, in the same column-major order as the state.
    ///
    /// # Panics
    /// Panics if `round > 10`.
    #[inline(always)]
    pub fn round_key(&self, round: usize) -> &[u8; 16] {
        &self.round_keys[round]
    }

    /// Schedule word `i` (0..44).
    ///
    /// # Panics
    /// Panics if `i >= 44`.
    pub fn word(&self, i: usize) -> [u8; 4] {
        let rk = &self.round_keys[i / 4];
        let base = (i % 4) * 4;
        [rk[base], rk[base + 1], rk[base + 2], rk[base + 3]]
    }

    /// The full schedule as 44 words.
    pub fn words(&self) -> [[u8; 4]; NUM_WORDS] {
        std::array::from_fn(|i| self.word(i))
    }
}

// round keys are key material, keep them out of debug output
impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySchedule").finish_non_exhaustive()
    }
}

/// AES-128 key schedule. Returns an InvalidKeyLength error if `key` is not exactly 16 bytes.
pub fn expand_key(key: &[u8]) -> Result<KeySchedule> {
    let key: &[u8; KEY_LEN] = key
        .try_into()
        .map_err(|_| Error::InvalidKeyLength { len: key.len() })?;
    Ok(expand(key))
}

pub(crate) fn expand(key: &[u8; KEY_LEN]) -> KeySchedule {
    // Variable names match FIPS-197, NIST specification: https://doi.org/10.6028/NIST.FIPS.197-upd1
    // w    The result of the key schedule, an array of words that form round keys
    let mut w = [[0u8; 4]; NUM_WORDS];

    // first 4 words of w are filled with the initial key, one column each
    for (i, byte) in key.iter().enumerate() {
        w[i / 4][i % 4] = *byte;
    }

    for i in NK..NUM_WORDS {
        let mut temp = w[i - 1];
        if i % NK == 0 {
            // rot_word, sub_word, then rcon on the first byte
            temp = [
                sub_byte(temp[1]) ^ RCON[i / NK - 1],
                sub_byte(temp[2]),
                sub_byte(temp[3]),
                sub_byte(temp[0]),
            ];
        }

        // w[i] = temp ⊕ w[i − Nk]
        w[i] = xor_words(&temp, &w[i - NK]);
    }

    // convert words into indexable round keys
    let mut round_keys = [[0u8; 16]; NUM_ROUNDS + 1];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(4)) {
        for (col, word) in words.iter().enumerate() {
            round_key[col * 4..col * 4 + 4].copy_from_slice(word);
        }
    }

    KeySchedule { round_keys }
}

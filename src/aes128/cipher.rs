use crate::aes128::core::{decrypt_block, encrypt_block};
use crate::aes128::error::{Error, Result};
use crate::aes128::key::{Key, KeySchedule, expand};
use crate::aes128::modes::{ecb_decrypt_in_place, ecb_encrypt_in_place};
use crate::aes128::util::{BLOCK_LEN, pad, unpad};

/// Provides AES-128 encryption and decryption of [single blocks](crate::Cipher::encrypt_block)
/// and of whole messages in [ECB](crate::Cipher::encrypt_ecb) mode.
/// Instantiated with a [Key], which is expanded into the key schedule and stored in the instance.
///
/// The cipher holds no mutable state, so one instance can be shared by any number of threads.
///
/// ## Examples
/// ```
/// # fn main() -> aes128::Result<()> {
/// use aes128::{Cipher, Key};
///
/// let key = Key::rand_key()?;
/// let cipher = Cipher::new(&key);
///
/// let plaintext = "Hello, World!".as_bytes();
/// let ciphertext = cipher.encrypt_ecb(plaintext)?;
/// assert_eq!(ciphertext.len(), 16);
///
/// let decrypted = cipher.decrypt_ecb(&ciphertext)?;
/// assert_eq!(decrypted, plaintext);
/// # Ok(())
/// # }
/// ```
pub struct Cipher {
    schedule: KeySchedule,
}

impl Cipher {
    /// Expands the provided key and stores the schedule in the returned instance.
    pub fn new(key: &Key) -> Self {
        Self {
            schedule: expand(key.as_bytes()),
        }
    }

    /// Getter for the internal key schedule.
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    /// Encrypts exactly one 16-byte block. Returns an InvalidBlockLength error for any other length.
    pub fn encrypt_block(&self, block: &[u8]) -> Result<[u8; 16]> {
        Ok(encrypt_block(as_block(block)?, &self.schedule))
    }

    /// Decrypts exactly one 16-byte block. Returns an InvalidBlockLength error for any other length.
    pub fn decrypt_block(&self, block: &[u8]) -> Result<[u8; 16]> {
        Ok(decrypt_block(as_block(block)?, &self.schedule))
    }

    /// **Electronic codebook** encryption.
    ///
    /// Pads the plaintext (always adding between 1 and 16 bytes, see [pad](crate::pad)), then
    /// encrypts each 16-byte block entirely independently and chains them together.
    /// **Vulnerable to pattern emergence in the ciphertext.**
    pub fn encrypt_ecb(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut buf = pad(plaintext);
        ecb_encrypt_in_place(&mut buf, &self.schedule)?;
        Ok(buf)
    }

    /// **Electronic codebook** decryption.
    ///
    /// Returns:
    /// - the plaintext with its padding removed.
    /// - [InvalidCiphertext](crate::Error::InvalidCiphertext) error if the input is empty or not a multiple of 16 bytes.
    /// - [PaddingCorruption](crate::Error::PaddingCorruption) error if the decrypted padding is inconsistent.
    pub fn decrypt_ecb(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
            return Err(Error::InvalidCiphertext {
                len: ciphertext.len(),
                context: "ECB ciphertext must be a non-zero multiple of 16 bytes",
            });
        }

        let mut buf = ciphertext.to_vec();
        ecb_decrypt_in_place(&mut buf, &self.schedule)?;
        unpad(&mut buf)?;
        Ok(buf)
    }
}

fn as_block(block: &[u8]) -> Result<&[u8; 16]> {
    block
        .try_into()
        .map_err(|_| Error::InvalidBlockLength { len: block.len() })
}

//! Buffered encryption and decryption between a reader and a writer.
//!
//! Input is processed in fixed-size buffers. One buffer of look-ahead tells the pipeline which
//! chunk is final: only that chunk is padded (or unpadded). Each buffer is encrypted with the
//! parallel ECB path and written out in full before the next one is touched, so output order
//! always matches input order.

use std::io::{self, Read, Write};

use crate::aes128::cipher::Cipher;
use crate::aes128::error::{Error, Result};
use crate::aes128::modes::{ecb_decrypt_in_place, ecb_encrypt_in_place};
use crate::aes128::util::{BLOCK_LEN, pad, unpad};

/// Default stream buffer size (64 KiB).
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Encrypts everything read from `reader` and writes the ciphertext to `writer`.
/// Returns the number of ciphertext bytes written.
///
/// `buffer_size` must be a non-zero multiple of 16.
///
/// ## Examples
/// ```
/// # fn main() -> aes128::Result<()> {
/// use aes128::{Cipher, Key, DEFAULT_BUFFER_SIZE, encrypt_stream};
///
/// let cipher = Cipher::new(&Key::rand_key()?);
/// let plaintext = vec![7u8; 100];
///
/// let mut ciphertext = Vec::new();
/// let written = encrypt_stream(&plaintext[..], &mut ciphertext, &cipher, DEFAULT_BUFFER_SIZE)?;
///
/// assert_eq!(written, 112);
/// assert_eq!(ciphertext, cipher.encrypt_ecb(&plaintext)?);
/// # Ok(())
/// # }
/// ```
pub fn encrypt_stream<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    cipher: &Cipher,
    buffer_size: usize,
) -> Result<u64> {
    check_buffer_size(buffer_size)?;

    let mut written = 0u64;
    let mut current = read_chunk(&mut reader, buffer_size)?;

    loop {
        let next = read_chunk(&mut reader, buffer_size)?;

        if next.is_empty() {
            // final chunk (possibly empty) is the only one padded
            let mut last = pad(&current);
            ecb_encrypt_in_place(&mut last, cipher.schedule())?;
            writer.write_all(&last)?;
            written += last.len() as u64;
            break;
        }

        // a full buffer is always block aligned
        ecb_encrypt_in_place(&mut current, cipher.schedule())?;
        writer.write_all(&current)?;
        written += current.len() as u64;
        current = next;
    }

    writer.flush()?;
    Ok(written)
}

/// Decrypts everything read from `reader`, strips the padding from the final block and writes
/// the plaintext to `writer`. Returns the number of plaintext bytes written.
///
/// Returns an InvalidCiphertext error if the input is empty or not a multiple of 16 bytes, and a
/// PaddingCorruption error if the final block does not carry valid padding. Buffers before the
/// final one have already been written when either is detected.
pub fn decrypt_stream<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    cipher: &Cipher,
    buffer_size: usize,
) -> Result<u64> {
    check_buffer_size(buffer_size)?;

    let mut written = 0u64;
    let mut total = 0u64;
    let mut current = read_chunk(&mut reader, buffer_size)?;

    loop {
        total += current.len() as u64;
        let next = read_chunk(&mut reader, buffer_size)?;

        if next.is_empty() {
            if current.is_empty() || current.len() % BLOCK_LEN != 0 {
                return Err(Error::InvalidCiphertext {
                    len: total as usize,
                    context: "ciphertext stream must be a non-zero multiple of 16 bytes",
                });
            }

            ecb_decrypt_in_place(&mut current, cipher.schedule())?;
            unpad(&mut current)?;
            writer.write_all(&current)?;
            written += current.len() as u64;
            break;
        }

        ecb_decrypt_in_place(&mut current, cipher.schedule())?;
        writer.write_all(&current)?;
        written += current.len() as u64;
        current = next;
    }

    writer.flush()?;
    Ok(written)
}

fn check_buffer_size(size: usize) -> Result<()> {
    if size == 0 || size % BLOCK_LEN != 0 {
        return Err(Error::InvalidBufferSize { size });
    }
    Ok(())
}

// fills a buffer of up to `size` bytes, only returning short at end of input
fn read_chunk<R: Read>(reader: &mut R, size: usize) -> io::Result<Vec<u8>> {
    let mut buf = vec![0u8; size];
    let mut filled = 0;

    while filled < size {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    buf.truncate(filled);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aes128::key::Key;

    // hands out at most `step` bytes per read, to exercise short reads
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn read_chunk_fills_across_short_reads() -> Result<()> {
        let data: Vec<u8> = (0..100).collect();
        let mut reader = Trickle { data: &data, step: 7 };

        assert_eq!(read_chunk(&mut reader, 64)?, data[..64]);
        assert_eq!(read_chunk(&mut reader, 64)?, data[64..]);
        assert!(read_chunk(&mut reader, 64)?.is_empty());
        Ok(())
    }

    #[test]
    fn stream_matches_in_memory() -> Result<()> {
        let cipher = Cipher::new(&Key::rand_key()?);

        for len in [0, 15, 16, 17, 32, 63, 64, 65, 128, 1000] {
            let plaintext: Vec<u8> = (0..len).map(|i| (i % 256) as u8).collect();
            let expected = cipher.encrypt_ecb(&plaintext)?;

            let mut ciphertext = Vec::new();
            let reader = Trickle { data: &plaintext, step: 5 };
            let written = encrypt_stream(reader, &mut ciphertext, &cipher, 64)?;

            assert_eq!(written as usize, expected.len());
            assert_eq!(ciphertext, expected, "stream output differs for {len} bytes");

            let mut decrypted = Vec::new();
            let written = decrypt_stream(&ciphertext[..], &mut decrypted, &cipher, 32)?;
            assert_eq!(written as usize, len);
            assert_eq!(decrypted, plaintext);
        }
        Ok(())
    }

    #[test]
    fn rejects_bad_buffer_size() -> Result<()> {
        let cipher = Cipher::new(&Key::rand_key()?);
        for size in [0, 1, 15, 17, 100] {
            assert!(matches!(
                encrypt_stream(&[0u8; 0][..], Vec::new(), &cipher, size),
                Err(Error::InvalidBufferSize { size: s }) if s == size
            ));
        }
        Ok(())
    }

    #[test]
    fn decrypt_rejects_unaligned_or_empty() -> Result<()> {
        let cipher = Cipher::new(&Key::rand_key()?);

        assert!(matches!(
            decrypt_stream(&[0u8; 0][..], Vec::new(), &cipher, 32),
            Err(Error::InvalidCiphertext { len: 0, .. })
        ));
        assert!(matches!(
            decrypt_stream(&[0u8; 40][..], Vec::new(), &cipher, 32),
            Err(Error::InvalidCiphertext { len: 40, .. })
        ));
        Ok(())
    }
}

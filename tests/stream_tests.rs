use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use aes128::{Cipher, DEFAULT_BUFFER_SIZE, Error, Key, Result, decrypt_stream, encrypt_stream};
use rand::RngCore;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("aes128-{}-{name}", std::process::id()))
}

#[test]
fn file_round_trip_across_buffer_sizes() -> Result<()> {
    let cipher = Cipher::new(&Key::rand_key()?);

    // spans several buffers and the parallel threshold, ends mid-block
    let mut plaintext = vec![0u8; 3 * DEFAULT_BUFFER_SIZE + 1234];
    rand::rng().fill_bytes(&mut plaintext);

    let source = scratch_path("source.bin");
    let encrypted = scratch_path("encrypted.bin");
    let decrypted = scratch_path("decrypted.bin");
    fs::write(&source, &plaintext)?;

    for buffer_size in [16, 4096, DEFAULT_BUFFER_SIZE] {
        let reader = BufReader::new(File::open(&source)?);
        let writer = BufWriter::new(File::create(&encrypted)?);
        let written = encrypt_stream(reader, writer, &cipher, buffer_size)?;

        let ciphertext = fs::read(&encrypted)?;
        assert_eq!(written as usize, ciphertext.len());
        assert_eq!(ciphertext.len() % 16, 0);
        assert_eq!(
            ciphertext,
            cipher.encrypt_ecb(&plaintext)?,
            "buffer size {buffer_size} changed the ciphertext"
        );

        let reader = BufReader::new(File::open(&encrypted)?);
        let writer = BufWriter::new(File::create(&decrypted)?);
        decrypt_stream(reader, writer, &cipher, buffer_size)?;
        assert_eq!(fs::read(&decrypted)?, plaintext);
    }

    for path in [source, encrypted, decrypted] {
        fs::remove_file(path)?;
    }
    Ok(())
}

#[test]
fn block_aligned_input_gains_a_padding_block() -> Result<()> {
    let cipher = Cipher::new(&Key::rand_key()?);

    for len in [0usize, 16, 4096, DEFAULT_BUFFER_SIZE] {
        let plaintext = vec![0x5a; len];
        let mut ciphertext = Vec::new();
        let written = encrypt_stream(&plaintext[..], &mut ciphertext, &cipher, 4096)?;
        assert_eq!(written as usize, len + 16);

        // last block is a full block of padding
        let last: &[u8] = &ciphertext[len..];
        assert_eq!(cipher.decrypt_block(last)?, [0x10; 16]);
    }
    Ok(())
}

#[test]
fn tampered_padding_is_reported() -> Result<()> {
    let cipher = Cipher::new(&Key::rand_key()?);
    let mut ciphertext = cipher.encrypt_ecb(b"attack at dawn")?;

    // swap the padded block for the encryption of an all-zero block
    let zero = cipher.encrypt_block(&[0u8; 16])?;
    let len = ciphertext.len();
    ciphertext[len - 16..].copy_from_slice(&zero);

    let result = decrypt_stream(&ciphertext[..], Vec::new(), &cipher, 32);
    assert!(matches!(result, Err(Error::PaddingCorruption { pad: 0 })));
    Ok(())
}

#[test]
fn wrong_key_does_not_decrypt() -> Result<()> {
    let key = Key::rand_key()?;
    let cipher = Cipher::new(&key);
    let ciphertext = cipher.encrypt_ecb(&[0x33; 64])?;

    let mut other_bytes = *key.as_bytes();
    other_bytes[0] ^= 0x80;
    let other = Cipher::new(&Key::try_from_slice(&other_bytes)?);

    // padding checks usually catch a wrong key, otherwise the plaintext differs
    match other.decrypt_ecb(&ciphertext) {
        Ok(plaintext) => assert_ne!(plaintext, vec![0x33; 64]),
        Err(e) => assert!(matches!(e, Error::PaddingCorruption { .. })),
    }
    Ok(())
}

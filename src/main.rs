mod args;

use args::{Cli, Commands, CommonArgs};
use clap::Parser;

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Instant;

use aes128::{Cipher, Key};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("source file {0:?} does not exist")]
    MissingSource(PathBuf),

    #[error("could not build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Aes(#[from] aes128::Error),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn main() {
    if let Err(e) = aes_cli() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn aes_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    match args.command {
        Commands::Encrypt(enc) => {
            // read or generate key
            let key = match enc.key {
                Some(key) => key,
                None => {
                    let key = Key::rand_key()?;
                    println!("Generated key: {}", key.to_decimal_list());
                    key
                }
            };
            run(&enc.common, &key, Direction::Encrypt)
        }
        Commands::Decrypt(dec) => run(&dec.common, &dec.key, Direction::Decrypt),
    }
}

fn run(common: &CommonArgs, key: &Key, direction: Direction) -> Result<(), CliError> {
    if !common.source.is_file() {
        return Err(CliError::MissingSource(common.source.clone()));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = common.threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;

    // key expansion happens once, before any block work
    let cipher = Cipher::new(key);
    let tmp = tmp_path(&common.dest);

    let start = Instant::now();

    let reader = BufReader::new(File::open(&common.source)?);
    let writer = BufWriter::new(File::create(&tmp)?);
    let result = pool.install(|| match direction {
        Direction::Encrypt => aes128::encrypt_stream(reader, writer, &cipher, common.buffer_size),
        Direction::Decrypt => aes128::decrypt_stream(reader, writer, &cipher, common.buffer_size),
    });

    let written = match result {
        Ok(written) => written,
        Err(e) => {
            // the stream error is the one reported
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
    };
    fs::rename(&tmp, &common.dest)?;

    let duration = start.elapsed();

    let verb = match direction {
        Direction::Encrypt => "Encrypted",
        Direction::Decrypt => "Decrypted",
    };
    println!(
        "{verb} {} -> {} ({written} bytes) in {} ms",
        common.source.display(),
        common.dest.display(),
        duration.as_millis()
    );

    if common.hex {
        print_hex(&fs::read(&common.dest)?);
    }

    Ok(())
}

fn tmp_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn print_hex(bytes: &[u8]) {
    for b in bytes {
        print!("0x{:02x} ", b);
    }
    println!();
}

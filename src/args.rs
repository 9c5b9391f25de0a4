use aes128::{DEFAULT_BUFFER_SIZE, Key};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt source to dest
    Encrypt(EncryptArgs),

    /// Decrypt source to dest
    Decrypt(DecryptArgs),
}

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Source file path.
    #[arg(short = 's', long = "source")]
    pub source: PathBuf,

    /// Destination file path. Written to `<dest>.tmp` first and renamed on success.
    #[arg(short = 'd', long = "dest")]
    pub dest: PathBuf,

    /// Bytes read per buffer. Must be a non-zero multiple of 16.
    #[arg(long = "buffer-size", value_name = "BYTES", default_value_t = DEFAULT_BUFFER_SIZE)]
    pub buffer_size: usize,

    /// Worker threads used per buffer (defaults to one per CPU).
    #[arg(long = "threads", value_name = "N")]
    pub threads: Option<usize>,

    /// Print the output bytes as hex once done.
    #[arg(long = "hex")]
    pub hex: bool,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Key as 16 comma-separated decimal bytes, e.g. 0,1,2,...,15
    #[arg(
        short = 'k',
        long = "key",
        value_name = "BYTES",
        required_unless_present = "gen_key",
        conflicts_with = "gen_key"
    )]
    pub key: Option<Key>,

    /// Generate a random key (printed in the --key format)
    #[arg(long = "gen-key")]
    pub gen_key: bool,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct DecryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Key as 16 comma-separated decimal bytes, e.g. 0,1,2,...,15
    #[arg(short = 'k', long = "key", value_name = "BYTES")]
    pub key: Key,
}

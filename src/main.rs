//! Command-line front end: encrypt or decrypt a text file with a
//! columnar transposition key.
//!
//! ```text
//! transposition -e 3120 plain.txt cipher.txt
//! transposition -d 3120 cipher.txt plain.txt
//! ```

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use log::{debug, LevelFilter};

use transposition::text_io::{read_text, write_text};
use transposition::{Key, Mode, TranspositionCodec};

/// Exit status for a rejected key or a failed file operation.
const EXIT_FAILURE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "transposition", version, about = "Columnar transposition cipher for text files")]
#[command(group(ArgGroup::new("mode").required(true).args(["encrypt", "decrypt"])))]
struct Cli {
    /// Encrypt INPUT into OUTPUT
    #[arg(short, long)]
    encrypt: bool,

    /// Decrypt INPUT into OUTPUT
    #[arg(short, long)]
    decrypt: bool,

    /// Permutation key: each digit 0..len-1 exactly once, fewer than 10 digits
    key: String,

    /// File to read; lines are joined with single spaces
    input: PathBuf,

    /// File to write the result to
    output: PathBuf,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.encrypt {
            Mode::Encrypt
        } else {
            Mode::Decrypt
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(EXIT_FAILURE);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let key = Key::validate(&cli.key).context("Error with cipher key value")?;
    println!("Key is OK.");
    debug!("key {} -> {} columns", key, key.num_columns());

    let input = read_text(&cli.input)
        .with_context(|| format!("failed to read input file {}", cli.input.display()))?;

    let mode = cli.mode();
    let codec = TranspositionCodec::new(key);
    let output = codec.apply(mode, &input);

    write_text(&cli.output, &output)
        .with_context(|| format!("failed to write output file {}", cli.output.display()))?;

    let verb = match mode {
        Mode::Encrypt => "encrypted",
        Mode::Decrypt => "decrypted",
    };
    println!(
        "Text has been {} and written to {}",
        verb,
        cli.output.display()
    );
    Ok(())
}

mod commands;
mod defaults;
mod printing;
mod utils;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use helix_codec::CodecError;

use commands::{analyze, decode, encode};

/// Helix - DNA storage encoder/decoder
#[derive(Parser, Debug)]
#[command(name = "helix")]
#[command(author, version, about = "DNA storage encoding and decoding", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Input source, output sink, and constraint parameters common to all
/// subcommands.
#[derive(Args, Debug)]
struct CommonArgs {
    /// Input string
    #[arg(short, long, conflicts_with = "file")]
    input: Option<String>,

    /// Read input from file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum homopolymer run length
    #[arg(long, default_value_t = defaults::ELL)]
    ell: usize,

    /// GC-content tolerance around 0.5
    #[arg(long, default_value_t = defaults::EPSILON)]
    epsilon: f64,

    /// Disable the error-detection suffix
    #[arg(long)]
    no_ec: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a binary string into DNA
    Encode {
        #[command(flatten)]
        common: CommonArgs,

        /// Print a sequence analysis of the encoded DNA
        #[arg(short, long)]
        analyze: bool,
    },

    /// Decode a DNA sequence back into a binary string
    Decode {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Encode UTF-8 text into DNA (8 bits per byte)
    TextEncode {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Decode a DNA sequence back into text
    TextDecode {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Analyze a DNA sequence against the codeword constraints
    Analyze {
        #[command(flatten)]
        common: CommonArgs,

        /// Output format (pretty, json)
        #[arg(long, default_value = "pretty")]
        format: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Encode { common, analyze } => encode::run(&common, analyze, false),
        Commands::TextEncode { common } => encode::run(&common, false, true),
        Commands::Decode { common } => decode::run(&common, false),
        Commands::TextDecode { common } => decode::run(&common, true),
        Commands::Analyze { common, format } => analyze::run(&common, &format),
    }
}

/// Map error kinds to the documented exit codes: 1 for bad input, 2 for a
/// constraint or framing violation on decode, 3 for a detected edit.
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CodecError>() {
        Some(CodecError::ErrorDetected { .. }) => 3,
        Some(CodecError::BadRll(_) | CodecError::BadSuffix(_) | CodecError::TooShort { .. }) => 2,
        _ => 1,
    }
}

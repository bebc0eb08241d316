//! termsound CLI - renders the notification sound catalog to WAV files
//!
//! Run without arguments to write the built-in sounds to `./sounds`.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use termsound_backend_audio::DEFAULT_SAMPLE_RATE;
use termsound_cli::commands::generate_all::{self, GenerateOptions, DEFAULT_OUT_DIR};

/// termsound - procedural terminal notification sounds
#[derive(Parser)]
#[command(name = "termsound")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output directory for the generated WAV files
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    out_dir: String,

    /// JSON catalog to render instead of the built-in sounds
    #[arg(short, long)]
    catalog: Option<String>,

    /// Seed for noise segments (default: different noise on every run)
    #[arg(long)]
    seed: Option<u32>,

    /// Output sample rate in Hz
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,

    /// Keep rendering after a sound fails and list failures at the end
    #[arg(long)]
    keep_going: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let options = GenerateOptions {
        out_dir: PathBuf::from(&cli.out_dir),
        seed: cli.seed,
        sample_rate: cli.sample_rate,
        keep_going: cli.keep_going,
    };

    match generate_all::run(cli.catalog.as_deref(), &options) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

//! Generate-all command implementation
//!
//! Renders every sound of a catalog to `<out_dir>/<name>.wav` and prints one
//! `Generated:` line per sound on stdout. Diagnostics go to stderr.
//!
//! By default the first failure aborts the run; sounds rendered before it stay
//! on disk. With `keep_going` every sound is attempted and failures are
//! listed at the end.

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use rand::RngCore;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use termsound_backend_audio::rng::create_sound_rng;
use termsound_backend_audio::{generate_entry, DEFAULT_SAMPLE_RATE};
use termsound_spec::{BackendError, Catalog, CatalogEntry, SpecError, ValidationError};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "sounds";

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory the WAV files are written to.
    pub out_dir: PathBuf,
    /// Base seed for noise segments; `None` draws fresh entropy.
    pub seed: Option<u32>,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Continue after a failed sound instead of aborting.
    pub keep_going: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            seed: None,
            sample_rate: DEFAULT_SAMPLE_RATE,
            keep_going: false,
        }
    }
}

/// Result of rendering a single sound
#[derive(Debug, Clone, PartialEq)]
pub struct SoundResult {
    /// Sound name
    pub name: String,
    /// Number of samples written
    pub num_samples: usize,
    /// Rendered duration, rounded to whole milliseconds
    pub duration_ms: u64,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
    /// Samples clamped during quantization
    pub clipped_samples: usize,
}

impl SoundResult {
    /// Returns the stdout report line for this sound.
    pub fn report_line(&self) -> String {
        format!(
            "Generated: {}.wav ({} samples, {}ms)",
            self.name, self.num_samples, self.duration_ms
        )
    }
}

/// A sound that failed while `keep_going` was set
#[derive(Debug, Clone, PartialEq)]
pub struct SoundFailure {
    /// Sound name
    pub name: String,
    /// Error message
    pub error: String,
}

/// Summary of a batch run
#[derive(Debug, Clone, Default)]
pub struct GenerationSummary {
    /// Sounds written, in catalog order
    pub generated: Vec<SoundResult>,
    /// Sounds that failed (only populated with `keep_going`)
    pub failed: Vec<SoundFailure>,
}

impl GenerationSummary {
    /// Returns true if every sound was written.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run the generate-all command
///
/// # Arguments
/// * `catalog_path` - JSON catalog to render (default: the built-in sounds)
/// * `options` - Output directory, seed, sample rate and failure policy
///
/// # Returns
/// Exit code: 0 success, 1 if any sound failed under `keep_going`
pub fn run(catalog_path: Option<&str>, options: &GenerateOptions) -> Result<ExitCode> {
    let catalog = match catalog_path {
        Some(path) => load_catalog(Path::new(path))?,
        None => Catalog::builtin(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = generate_catalog(&catalog, options, &mut out)?;

    if summary.is_success() {
        eprintln!(
            "{} {} sounds written to {}",
            "INFO".cyan().bold(),
            summary.generated.len(),
            options.out_dir.display()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!(
            "{} {} of {} sounds failed: {}",
            "FAILED".red().bold(),
            summary.failed.len(),
            catalog.len(),
            summary
                .failed
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(ExitCode::from(1))
    }
}

/// Loads and validates a JSON catalog, listing validation errors on stderr.
fn load_catalog(path: &Path) -> Result<Catalog> {
    Catalog::load(path)
        .map_err(|e| {
            if let SpecError::ValidationFailed(errors) = &e {
                print_validation_errors(errors);
            }
            e
        })
        .with_context(|| format!("Failed to load catalog: {}", path.display()))
}

fn print_validation_errors(errors: &[ValidationError]) {
    eprintln!("{}", "Validation Errors:".red().bold());
    for error in errors {
        let path_info = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        eprintln!(
            "  {} [{}]{}: {}",
            "x".red(),
            error.code.to_string().red(),
            path_info.dimmed(),
            error.message
        );
    }
}

/// Renders every catalog entry, writing report lines to `out`.
///
/// Entries are processed sequentially in catalog order. Each WAV is fully
/// encoded in memory before its single write.
pub fn generate_catalog<W: Write>(
    catalog: &Catalog,
    options: &GenerateOptions,
    out: &mut W,
) -> Result<GenerationSummary> {
    fs::create_dir_all(&options.out_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            options.out_dir.display()
        )
    })?;

    let mut summary = GenerationSummary::default();

    for entry in &catalog.sounds {
        match generate_sound(entry, options) {
            Ok(result) => {
                writeln!(out, "{}", result.report_line())?;
                if result.clipped_samples > 0 {
                    eprintln!(
                        "{} {}: {} samples clipped to 16-bit range",
                        "WARN".yellow().bold(),
                        result.name,
                        result.clipped_samples
                    );
                }
                summary.generated.push(result);
            }
            Err(e) if options.keep_going => {
                eprintln!("{} {}: {:#}", "FAILED".red().bold(), entry.name, e);
                summary.failed.push(SoundFailure {
                    name: entry.name.clone(),
                    error: format!("{:#}", e),
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(summary)
}

/// Renders one sound and writes it to `<out_dir>/<name>.wav`.
pub fn generate_sound(entry: &CatalogEntry, options: &GenerateOptions) -> Result<SoundResult> {
    let mut rng: Box<dyn RngCore> = match options.seed {
        Some(seed) => Box::new(create_sound_rng(seed, &entry.name)),
        None => Box::new(rand::thread_rng()),
    };

    let result = generate_entry(entry, options.sample_rate, &mut *rng)
        .map_err(|e| anyhow!("[{}] {}", e.code(), e))
        .with_context(|| format!("Failed to generate sound: {}", entry.name))?;

    let path = options.out_dir.join(entry.file_name());
    fs::write(&path, &result.wav.wav_data)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(SoundResult {
        name: entry.name.clone(),
        num_samples: result.wav.num_samples,
        duration_ms: result.wav.duration_ms().round() as u64,
        pcm_hash: result.wav.pcm_hash,
        clipped_samples: result.clipped_samples,
    })
}

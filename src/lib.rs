//! Pngspeak launcher crate
//!
//! This crate provides the launcher for the `pngspeak` CLI. The heavy lifting
//! (packing an arbitrary byte stream into a PNG) is done by a separate encoder
//! executable installed as `.pngspeak` next to this binary; the launcher's job
//! is to validate arguments, locate that encoder, and run it with the input
//! file on its stdin and the output file on its stdout. It is organized into
//! small modules: `locate` (encoder resolution) and `encoder` (parameter
//! rendering and process invocation). The binary `src/main.rs` calls
//! `pngspeak_lib::run()` and exits with its return value.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary; returns the process exit code.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod encoder;
pub mod locate;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

use crate::encoder::{EncodeParams, encode};
use crate::locate::encoder_path;

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file whose bytes are fed to the encoder's stdin
    input: PathBuf,

    /// Output file that receives the encoder's stdout
    output: PathBuf,

    /// Pixel width passed to the encoder as -W
    #[arg(short = 'W', long = "pixel-width", default_value_t = 16u32)]
    pixel_width: u32,

    /// Tile width passed to the encoder as -uw
    #[arg(long = "tile-width", default_value_t = 128u32)]
    tile_width: u32,

    /// Tile height passed to the encoder as -uh
    #[arg(long = "tile-height", default_value_t = 4096u32)]
    tile_height: u32,

    /// Path to the encoder executable (default: `.pngspeak` next to this binary)
    #[arg(long = "encoder")]
    encoder: Option<PathBuf>,
}

/// Run the pngspeak launcher.
///
/// This function is the high-level entrypoint used by the `pngspeak` binary.
/// It parses CLI arguments, resolves the encoder executable, and invokes it
/// with the input file redirected to its stdin and the output file to its
/// stdout. Errors are printed to stderr and yield exit code 1.
///
/// Behavior summary:
/// - missing positional arguments — usage message on stderr, exit code 1.
/// - launcher-side failures (unresolvable encoder path, unopenable files,
///   spawn failure) — `error: …` on stderr, exit code 1.
/// - otherwise — the encoder's exit code is returned unchanged; the launcher
///   never inspects or interprets the encoder's output.
///
/// Example:
///
/// ```no_run
/// std::process::exit(pngspeak_lib::run()); // called from src/main.rs
/// ```
pub fn run() -> i32 {
    run_from(std::env::args_os())
}

/// Argument-driven body of [`run`], split out so tests can drive the launcher
/// without spawning the binary.
fn run_from<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            // --help/--version land here too; they exit 0 on stdout.
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = e.print();
                return 0;
            }
            eprintln!("{}", e);
            return 1;
        }
    };

    let encoder = match encoder_path(cli.encoder.as_deref()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {}", e);
            return 1;
        }
    };

    let params = EncodeParams {
        pixel_width: cli.pixel_width,
        tile_width: cli.tile_width,
        tile_height: cli.tile_height,
    };

    match encode(&encoder, &params, &cli.input, &cli.output) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            1
        }
    }
}

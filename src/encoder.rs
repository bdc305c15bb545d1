//! Encoder invocation.
//!
//! This module renders the encoding parameters into the encoder's flag vector
//! and runs the encoder as a child process with the input file redirected to
//! its stdin and the output file to its stdout. The launcher never buffers or
//! inspects the byte stream itself — opening the two files and handing them to
//! the child is the whole job, the same way a shell handles `<` and `>`.

use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

/// Encoding parameters forwarded to the encoder.
///
/// The defaults reproduce the canonical invocation: `-W 16 -uw 128 -uh 4096`.
/// Semantics of the tile dimensions belong to the encoder; the launcher treats
/// them as opaque numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeParams {
    /// Pixel width (`-W`)
    pub pixel_width: u32,
    /// Tile width (`-uw`)
    pub tile_width: u32,
    /// Tile height (`-uh`)
    pub tile_height: u32,
}

impl Default for EncodeParams {
    fn default() -> Self {
        EncodeParams {
            pixel_width: 16,
            tile_width: 128,
            tile_height: 4096,
        }
    }
}

impl EncodeParams {
    /// Render the parameters as the encoder's argument vector, in the order
    /// the encoder expects: `-W <w> -uw <uw> -uh <uh>`.
    pub fn to_args(&self) -> Vec<String> {
        vec![
            "-W".into(),
            self.pixel_width.to_string(),
            "-uw".into(),
            self.tile_width.to_string(),
            "-uh".into(),
            self.tile_height.to_string(),
        ]
    }
}

/// Run `encoder` over `input`, writing its stdout to `output`.
///
/// Opens `input` for reading and creates (or truncates) `output`, then spawns
/// the encoder with [`EncodeParams::to_args`] and the two files wired to its
/// stdin and stdout. The encoder's stderr is inherited so its diagnostics
/// reach the user directly.
///
/// Returns
/// - `Ok(code)` with the child's exit code once it terminates. A child that
///   exits without a code (killed by a signal on unix) maps to 1.
/// - `Err(String)` when a file cannot be opened or the encoder cannot be
///   spawned (missing executable, bad permissions).
pub fn encode(
    encoder: &Path,
    params: &EncodeParams,
    input: &Path,
    output: &Path,
) -> Result<i32, String> {
    let stdin = File::open(input)
        .map_err(|e| format!("failed to open input {}: {}", input.display(), e))?;
    let stdout = File::create(output)
        .map_err(|e| format!("failed to create output {}: {}", output.display(), e))?;

    let status = Command::new(encoder)
        .args(params.to_args())
        .stdin(Stdio::from(stdin))
        .stdout(Stdio::from(stdout))
        .status()
        .map_err(|e| format!("failed to run encoder {}: {}", encoder.display(), e))?;

    Ok(status.code().unwrap_or(1))
}

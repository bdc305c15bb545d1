//! Encoder resolution.
//!
//! The encoder ships as a hidden executable `.pngspeak` installed in the same
//! directory as the launcher binary. Resolution only builds the path; a
//! missing or non-executable encoder surfaces later as a spawn failure, which
//! keeps this module free of TOCTOU checks.

use std::env;
use std::path::{Path, PathBuf};

/// File name of the sibling encoder executable.
pub const ENCODER_NAME: &str = ".pngspeak";

/// Resolve the encoder executable path.
///
/// An explicit path (from `--encoder`) is returned unchanged. Otherwise the
/// encoder is expected next to the running executable: the parent directory of
/// `std::env::current_exe()` joined with [`ENCODER_NAME`].
///
/// Returns `Err(String)` when the executable path cannot be resolved or has no
/// parent directory.
pub fn encoder_path(explicit: Option<&Path>) -> Result<PathBuf, String> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    let exe = env::current_exe().map_err(|e| format!("failed to resolve launcher path: {}", e))?;
    let dir = exe
        .parent()
        .ok_or_else(|| format!("launcher path {} has no parent directory", exe.display()))?;
    Ok(dir.join(ENCODER_NAME))
}

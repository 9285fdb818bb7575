//! Thin wrapper around the `git` executable.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::error::{Result, ShipitError};

/// Locates the `git` executable on `PATH`.
pub fn find_git() -> Result<PathBuf> {
    which::which("git").map_err(|e| {
        tracing::debug!("git lookup failed: {}", e);
        ShipitError::GitNotFound
    })
}

/// Runs `git <args>` in `workdir` and captures its output.
pub fn run(git: &Path, workdir: Option<&Path>, args: &[&str]) -> Result<Output> {
    tracing::debug!("Running git {}", args.join(" "));

    let mut cmd = Command::new(git);
    cmd.args(args);
    if let Some(dir) = workdir {
        cmd.current_dir(dir);
    }
    let output = cmd.output()?;

    tracing::debug!("git {} exited with {}", args.join(" "), output.status);
    Ok(output)
}

/// Human-readable failure detail for a finished git process.
///
/// Some git errors are printed to stdout instead of stderr.
pub fn failure_detail(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if stderr.trim().is_empty() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stdout = stdout.trim();
        if stdout.is_empty() {
            format!("git exited with {}", output.status)
        } else {
            stdout.to_string()
        }
    } else {
        stderr.trim().to_string()
    }
}

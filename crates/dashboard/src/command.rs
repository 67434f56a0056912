// crates/dashboard/src/command.rs
//! Bounded-time execution of cluster CLIs.

use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tokio::time::timeout;

use crate::error::SourceError;

/// Run `program args...` and return its trimmed stdout.
///
/// The child is killed if it outlives `limit`. A non-zero exit is an error
/// even when stdout is non-empty.
pub async fn run_command(
    program: &str,
    args: &[&str],
    limit: Duration,
) -> Result<String, SourceError> {
    let t0 = Instant::now();
    let mut cmd = Command::new(program);
    cmd.args(args)
        // Null stdin so the child never blocks waiting for input
        .stdin(Stdio::null())
        .kill_on_drop(true);

    let output = timeout(limit, cmd.output())
        .await
        .map_err(|_| SourceError::Timeout {
            program: program.to_string(),
            timeout: limit,
        })?
        .map_err(|source| SourceError::Spawn {
            program: program.to_string(),
            source,
        })?;

    tracing::trace!(
        program,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        exit_code = ?output.status.code(),
        "command finished"
    );

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SourceError::ExitStatus {
            program: program.to_string(),
            code: output.status.code(),
            stderr: stderr.chars().take(500).collect::<String>().trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

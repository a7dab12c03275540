use std::process::{ExitStatus, Stdio};

use tracing::{debug, warn};

use crate::errors::LaunchError;
use crate::launch::LaunchPlan;

/// Starts Blender with inherited environment and standard streams and blocks
/// until it exits.
pub fn spawn_and_wait(plan: &LaunchPlan) -> Result<ExitStatus, LaunchError> {
    let mut cmd = plan.command();
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    debug!(argv = ?plan.argv(), "spawning blender");
    let mut child = cmd.spawn().map_err(|source| LaunchError::Spawn {
        program: plan.program.clone(),
        source,
    })?;
    debug!(pid = child.id(), "blender started");

    let status = child.wait().map_err(|source| LaunchError::Wait {
        program: plan.program.clone(),
        source,
    })?;
    if !status.success() {
        warn!(%status, "blender exited unsuccessfully");
    }
    Ok(status)
}

/// Maps a child's exit status onto a launcher exit code. Signal deaths follow
/// the shell's `128 + signal` convention; anything unrepresentable is 1.
pub fn exit_code_of(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code).unwrap_or(1);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from(128 + signal).unwrap_or(1);
        }
    }

    1
}

//! Execution of vendor `doinstall` scripts

use crate::error::{ManagerError, Result};
use crate::tool::{InstallerCommand, ToolKind};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

/// Run the vendor installer and wait for it to finish.
///
/// Installer output goes straight to the terminal.
pub async fn run_installer(kind: ToolKind, installer: &InstallerCommand) -> Result<()> {
    info!(
        "Running {} installer {} in {}",
        kind,
        installer.program.display(),
        installer.current_dir.display()
    );

    let mut cmd = Command::new(&installer.program);
    cmd.args(&installer.args)
        .current_dir(&installer.current_dir)
        .stdin(if installer.stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let mut child = cmd.spawn().map_err(|e| {
        ManagerError::io(
            format!("Failed to start {}", installer.program.display()),
            e,
        )
    })?;

    if let (Some(answers), Some(mut stdin)) = (&installer.stdin, child.stdin.take()) {
        debug!("Feeding {} bytes to installer stdin", answers.len());
        match stdin.write_all(answers.as_bytes()).await {
            Ok(()) => {}
            // installer exited without consuming every answer
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                debug!("Installer closed stdin early");
            }
            Err(e) => return Err(ManagerError::io("Failed to write installer input", e)),
        }
        // closing stdin signals end of answers
        drop(stdin);
    }

    let status = child
        .wait()
        .await
        .map_err(|e| ManagerError::io("Failed to wait for installer", e))?;

    if !status.success() {
        return Err(ManagerError::InstallerFailed {
            tool: kind.to_string(),
            status,
        });
    }

    Ok(())
}

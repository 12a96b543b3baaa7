/*!
 * Best-effort system clipboard support
 *
 * Pipes text into whichever clipboard command the platform offers.
 * Callers treat every failure here as informational; a missing clipboard
 * must never fail a dump.
 */

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// No usable clipboard command was found on this system
    #[error("no clipboard command available")]
    NoProvider,

    /// The clipboard command failed to run or exited nonzero
    #[error("{command}: {reason}")]
    CommandFailed { command: String, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Copy `text` to the system clipboard.
///
/// Tries tmux first when inside a session, then the platform's native
/// command (wl-copy/xsel/xclip on Linux, pbcopy on macOS, clip.exe on
/// Windows/WSL, termux-clipboard-set on Android).
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    for (cmd, args) in candidates() {
        if command_exists(cmd) {
            return pipe_into(cmd, args, text);
        }
    }
    Err(ClipboardError::NoProvider)
}

/// Clipboard commands to try, in preference order for this platform.
fn candidates() -> Vec<(&'static str, &'static [&'static str])> {
    let mut list: Vec<(&'static str, &'static [&'static str])> = Vec::new();

    if env::var("TMUX").is_ok() {
        list.push(("tmux", &["load-buffer", "-w", "-"]));
    }

    if cfg!(target_os = "macos") {
        list.push(("pbcopy", &[]));
    } else if cfg!(target_os = "windows") || env::var("WSL_DISTRO_NAME").is_ok() {
        list.push(("clip.exe", &[]));
    } else if cfg!(target_os = "android") {
        list.push(("termux-clipboard-set", &[]));
    } else {
        list.push(("wl-copy", &[]));
        list.push(("xsel", &["-b", "-i"]));
        list.push(("xclip", &["-selection", "clipboard", "-in"]));
    }

    list
}

/// Check whether `command` resolves on the PATH.
pub fn command_exists(command: &str) -> bool {
    match env::var_os("PATH") {
        Some(paths) => env::split_paths(&paths).any(|dir| Path::new(&dir).join(command).exists()),
        None => false,
    }
}

/// Spawn `cmd` and write `text` to its stdin.
fn pipe_into(cmd: &str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
    let failed = |reason: String| ClipboardError::CommandFailed {
        command: cmd.to_string(),
        reason,
    };

    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| failed(format!("failed to spawn: {}", e)))?;

    child
        .stdin
        .as_mut()
        .ok_or_else(|| failed("failed to open stdin".to_string()))?
        .write_all(text.as_bytes())
        .map_err(|e| failed(format!("failed to write: {}", e)))?;

    let status = child
        .wait()
        .map_err(|e| failed(format!("failed to wait: {}", e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(failed(format!("exited with status {}", status)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_exists() {
        assert!(command_exists("ls"));
        assert!(!command_exists("nonexistentcommandxyz"));
    }

    #[test]
    fn test_candidates_nonempty() {
        assert!(!candidates().is_empty());
    }
}

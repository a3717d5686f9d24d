//! Fire-and-forget launching of configuration tools.
//!
//! Descriptor `Exec` lines may carry `%`-placeholders the dashboard never
//! fills in; everything from the first `%` on is dropped before the line is
//! split into shell words and spawned. The child is detached into its own
//! session and never waited on.

// This module owns the Unix process-detachment boundary.
#![allow(unsafe_code)]

use std::process::{Command, Stdio};

use tracing::info;

use crate::error::{Result, XfdashError};
use crate::model::SettingsEntry;

#[cfg(unix)]
use std::os::unix::process::CommandExt;

/// Split a raw `Exec` line into an argument vector.
///
/// Strips the `%`-placeholder suffix, then applies shell-word splitting.
/// Empty and unparsable command lines are errors.
pub fn parse_command(exec: &str) -> Result<Vec<String>> {
    let base = exec.split('%').next().unwrap_or_default().trim();
    if base.is_empty() {
        return Err(XfdashError::Launch {
            command: exec.to_string(),
            message: "empty command line".to_string(),
        });
    }
    let argv = shlex::split(base).ok_or_else(|| XfdashError::Launch {
        command: exec.to_string(),
        message: "unbalanced quoting in command line".to_string(),
    })?;
    if argv.is_empty() {
        return Err(XfdashError::Launch {
            command: exec.to_string(),
            message: "empty command line".to_string(),
        });
    }
    Ok(argv)
}

/// Launch an entry's command as a detached child process.
///
/// Returns the child pid. The caller never waits on the child; spawn
/// failures come back as [`XfdashError::Launch`] for the frontend to log
/// while staying responsive.
pub fn spawn(entry: &SettingsEntry) -> Result<u32> {
    let argv = parse_command(&entry.command)?;

    let mut cmd = Command::new(&argv[0]);
    cmd.args(&argv[1..]);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::null());

    // Detach the child so it outlives the dashboard and init reaps it,
    // instead of accumulating zombies under a parent that never waits.
    #[cfg(unix)]
    {
        // SAFETY: setsid() is async-signal-safe and only makes the child a
        // session leader; no memory is shared with the parent after fork.
        unsafe {
            cmd.pre_exec(|| {
                if libc::setsid() == -1 {
                    return Err(std::io::Error::last_os_error());
                }
                Ok(())
            });
        }
    }

    match cmd.spawn() {
        Ok(child) => {
            let pid = child.id();
            info!("Launched {} (pid {})", entry.id, pid);
            Ok(pid)
        }
        Err(e) => Err(XfdashError::Launch {
            command: entry.command.clone(),
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with_command(command: &str) -> SettingsEntry {
        SettingsEntry {
            id: "test".to_string(),
            name: "Test".to_string(),
            comment: String::new(),
            icon: String::new(),
            command: command.to_string(),
        }
    }

    #[test]
    fn test_parse_strips_placeholder_suffix() {
        let argv = parse_command("xfce4-display-settings --minimal %f").unwrap();
        assert_eq!(argv, ["xfce4-display-settings", "--minimal"]);
    }

    #[test]
    fn test_parse_plain_command() {
        let argv = parse_command("big-store --page updates").unwrap();
        assert_eq!(argv, ["big-store", "--page", "updates"]);
    }

    #[test]
    fn test_parse_quoted_arguments() {
        let argv = parse_command("sh -c 'env FOO=1 tool'").unwrap();
        assert_eq!(argv, ["sh", "-c", "env FOO=1 tool"]);
    }

    #[test]
    fn test_parse_stops_at_first_percent() {
        // Everything from the first % on is placeholder territory.
        let argv = parse_command("tool --zoom=50% --extra").unwrap();
        assert_eq!(argv, ["tool", "--zoom=50"]);
    }

    #[test]
    fn test_parse_empty_command_is_error() {
        assert!(parse_command("").is_err());
        assert!(parse_command("   ").is_err());
        assert!(parse_command("%U").is_err());
    }

    #[test]
    fn test_parse_unbalanced_quote_is_error() {
        let err = parse_command("tool 'unterminated").unwrap_err();
        assert!(err.to_string().contains("quoting"));
    }

    #[test]
    fn test_spawn_missing_binary_is_launch_error() {
        let entry = entry_with_command("/nonexistent/xfdash-test-binary");
        let err = spawn(&entry).unwrap_err();
        match err {
            XfdashError::Launch { command, .. } => {
                assert_eq!(command, "/nonexistent/xfdash-test-binary");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_spawn_detached_returns_pid() {
        let entry = entry_with_command("true");
        let pid = spawn(&entry).unwrap();
        assert!(pid > 0);
    }
}

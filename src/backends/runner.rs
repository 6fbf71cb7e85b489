//! Command runner for external process execution

use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::BackendError;

/// Captured output of a finished tool invocation
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

/// Spawns external tools and maps their failures onto [`BackendError`]
#[derive(Debug, Default)]
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run a tool to completion, capturing stdout and stderr
    ///
    /// A non-zero exit status is not an error here; callers that need one
    /// use [`run_checked`](Self::run_checked).
    pub fn run(&self, tool: &str, args: &[String]) -> Result<CommandOutput, BackendError> {
        debug!("Executing: {} {}", tool, args.join(" "));

        let output = Command::new(tool)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| BackendError::Invocation {
                tool: tool.to_string(),
                detail: e.to_string(),
            })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        })
    }

    /// Run a tool and require a zero exit status
    pub fn run_checked(&self, tool: &str, args: &[String]) -> Result<CommandOutput, BackendError> {
        let output = self.run(tool, args)?;
        if !output.success {
            return Err(BackendError::Invocation {
                tool: tool.to_string(),
                detail: failure_detail(&output.stderr),
            });
        }
        Ok(output)
    }

    /// Run a tool with inherited stdio, blocking until it exits
    ///
    /// Used for playback, where the tool owns the terminal and any display
    /// window until the user closes it.
    pub fn run_interactive(&self, tool: &str, args: &[String]) -> Result<(), BackendError> {
        debug!("Executing: {} {}", tool, args.join(" "));

        let status = Command::new(tool)
            .args(args)
            .status()
            .map_err(|e| BackendError::Invocation {
                tool: tool.to_string(),
                detail: e.to_string(),
            })?;

        if !status.success() {
            return Err(BackendError::Invocation {
                tool: tool.to_string(),
                detail: format!("exited with {status}"),
            });
        }
        Ok(())
    }
}

/// Last non-empty stderr line, the part of tool output worth repeating
fn failure_detail(stderr: &str) -> String {
    stderr
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("no error output")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_detail_takes_last_line() {
        let stderr = "frame=  100\nframe=  200\nout.mp4: Permission denied\n\n";
        assert_eq!(failure_detail(stderr), "out.mp4: Permission denied");
        assert_eq!(failure_detail(""), "no error output");
    }

    #[cfg(unix)]
    #[test]
    fn run_captures_output_and_status() {
        let runner = CommandRunner::new();

        let ok = runner
            .run("sh", &["-c".to_string(), "echo hello".to_string()])
            .unwrap();
        assert!(ok.success);
        assert_eq!(ok.stdout.trim(), "hello");

        let failed = runner
            .run("sh", &["-c".to_string(), "echo oops >&2; exit 3".to_string()])
            .unwrap();
        assert!(!failed.success);
        assert_eq!(failed.stderr.trim(), "oops");
    }

    #[cfg(unix)]
    #[test]
    fn run_checked_reports_stderr_detail() {
        let runner = CommandRunner::new();

        let err = runner
            .run_checked("sh", &["-c".to_string(), "echo oops >&2; exit 1".to_string()])
            .unwrap_err();
        match err {
            BackendError::Invocation { tool, detail } => {
                assert_eq!(tool, "sh");
                assert_eq!(detail, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_tool_is_an_invocation_error() {
        let runner = CommandRunner::new();
        let err = runner.run("reelcut-no-such-tool", &[]).unwrap_err();
        assert!(matches!(err, BackendError::Invocation { .. }));
    }
}

use crate::probe::ProbeError;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

// Exit status a POSIX shell uses when the command exists but cannot be run.
const SHELL_CANNOT_EXECUTE: i32 = 126;

/// Runs a command line and hands back whatever it printed.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command_line: &str) -> Result<String, ProbeError>;
}

/// Runs command lines through the host shell.
///
/// A nonzero exit is not an error: plenty of tools print their version to
/// stderr and exit 1. Only a failure to start, a shell "cannot execute" or
/// the timeout are reported.
pub struct ShellRunner {
    timeout: Duration,
}

impl ShellRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn shell_command(command_line: &str) -> Command {
        #[cfg(windows)]
        let mut command = {
            let mut command = Command::new("cmd");
            command.arg("/C").arg(command_line);
            command
        };

        #[cfg(not(windows))]
        let mut command = {
            let mut command = Command::new("sh");
            command.arg("-c").arg(command_line);
            command
        };

        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command_line: &str) -> Result<String, ProbeError> {
        let child = Self::shell_command(command_line)
            .spawn()
            .map_err(|source| ProbeError::Execution {
                command: command_line.to_string(),
                source,
            })?;

        let output = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(source)) => {
                return Err(ProbeError::Execution {
                    command: command_line.to_string(),
                    source,
                })
            }
            Err(_) => {
                return Err(ProbeError::Timeout {
                    command: command_line.to_string(),
                    timeout: self.timeout,
                })
            }
        };

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        debug!(
            command = %command_line,
            exit_code = ?output.status.code(),
            bytes = text.len(),
            "Command finished"
        );

        if output.status.code() == Some(SHELL_CANNOT_EXECUTE) {
            return Err(ProbeError::NotExecutable {
                command: command_line.to_string(),
                output: text.trim_end().to_string(),
            });
        }

        Ok(text)
    }
}

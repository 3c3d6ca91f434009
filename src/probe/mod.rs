pub mod error;
pub mod locator;
pub mod parser;
pub mod runner;

#[cfg(test)]
pub mod mocks;

pub use error::ProbeError;
pub use locator::{ExecutableLocator, PathLocator};
pub use parser::parse_version;
pub use runner::{CommandRunner, ShellRunner};

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Absence {
    NotInstalled,
    UnparsableOutput,
    TimedOut,
}

impl std::fmt::Display for Absence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Absence::NotInstalled => write!(f, "not installed"),
            Absence::UnparsableOutput => write!(f, "no version in output"),
            Absence::TimedOut => write!(f, "timed out"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    Present(String),
    Absent(Absence),
}

impl ProbeResult {
    pub fn into_version(self) -> Option<String> {
        match self {
            ProbeResult::Present(version) => Some(version),
            ProbeResult::Absent(_) => None,
        }
    }
}

/// Detects a binary on the host and reads its version from `--version`.
///
/// Stateless: every call locates, runs and parses afresh.
pub struct VersionProbe {
    binary: String,
    locator: Arc<dyn ExecutableLocator>,
    runner: Arc<dyn CommandRunner>,
}

impl VersionProbe {
    pub fn new(
        binary: impl Into<String>,
        locator: Arc<dyn ExecutableLocator>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            binary: binary.into(),
            locator,
            runner,
        }
    }

    /// Probe backed by `PATH` lookup and the host shell.
    pub fn system(binary: impl Into<String>, timeout: Duration) -> Self {
        Self::new(
            binary,
            Arc::new(PathLocator),
            Arc::new(ShellRunner::new(timeout)),
        )
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// `<binary> --version 2>&1`, with the binary quoted for the shell when needed.
    pub fn command_line(&self) -> Result<String, ProbeError> {
        let binary = quote_for_shell(&self.binary)?;
        Ok(format!("{} --version 2>&1", binary))
    }

    pub async fn probe(&self) -> Result<ProbeResult, ProbeError> {
        if !self.locator.locate(&self.binary) {
            debug!(binary = %self.binary, "Executable not found on PATH");
            return Ok(ProbeResult::Absent(Absence::NotInstalled));
        }

        let command_line = self.command_line()?;
        let output = match self.runner.run(&command_line).await {
            Ok(output) => output,
            Err(ProbeError::Timeout { timeout, .. }) => {
                warn!(binary = %self.binary, ?timeout, "Version command timed out");
                return Ok(ProbeResult::Absent(Absence::TimedOut));
            }
            // Exit 126 only counts as a failure when nothing usable was printed.
            Err(ProbeError::NotExecutable { command, output }) => match parse_version(&output) {
                Some(version) => {
                    debug!(binary = %self.binary, %version, "Version detected despite exit status 126");
                    return Ok(ProbeResult::Present(version));
                }
                None => return Err(ProbeError::NotExecutable { command, output }),
            },
            Err(e) => return Err(e),
        };

        match parse_version(&output) {
            Some(version) => {
                debug!(binary = %self.binary, %version, "Version detected");
                Ok(ProbeResult::Present(version))
            }
            None => {
                debug!(binary = %self.binary, output = %output.trim_end(), "No version token in output");
                Ok(ProbeResult::Absent(Absence::UnparsableOutput))
            }
        }
    }

    pub async fn resolve_version(&self) -> Result<Option<String>, ProbeError> {
        let result = self.probe().await?;
        if let ProbeResult::Absent(reason) = &result {
            info!(binary = %self.binary, %reason, "Version undefined");
        }
        Ok(result.into_version())
    }
}

#[cfg(not(windows))]
fn quote_for_shell(binary: &str) -> Result<Cow<'_, str>, ProbeError> {
    shlex::try_quote(binary).map_err(|_| ProbeError::InvalidBinary {
        binary: binary.to_string(),
    })
}

#[cfg(windows)]
fn quote_for_shell(binary: &str) -> Result<Cow<'_, str>, ProbeError> {
    if binary.contains('"') || binary.contains('\0') {
        return Err(ProbeError::InvalidBinary {
            binary: binary.to_string(),
        });
    }
    if binary.contains(char::is_whitespace) {
        Ok(Cow::Owned(format!("\"{}\"", binary)))
    } else {
        Ok(Cow::Borrowed(binary))
    }
}

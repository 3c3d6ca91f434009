use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to start `{command}`: {source}")]
    Execution {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("shell could not execute `{command}`: {output}")]
    NotExecutable { command: String, output: String },

    #[error("binary name {binary:?} cannot be passed to a shell")]
    InvalidBinary { binary: String },

    #[error("`{command}` did not finish within {timeout:?}")]
    Timeout { command: String, timeout: Duration },
}

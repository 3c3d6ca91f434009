use super::{CommandRunner, ExecutableLocator, ProbeError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub struct FakeLocator {
    present: bool,
}

impl FakeLocator {
    pub fn present() -> Self {
        Self { present: true }
    }

    pub fn absent() -> Self {
        Self { present: false }
    }
}

impl ExecutableLocator for FakeLocator {
    fn locate(&self, _name: &str) -> bool {
        self.present
    }
}

enum Reply {
    Output(String),
    Timeout,
    SpawnFailure,
    CannotExecute(String),
}

/// Runner double that replays a canned reply and records every call.
pub struct FakeRunner {
    reply: Reply,
    calls: AtomicUsize,
    last_command: Mutex<Option<String>>,
}

impl FakeRunner {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_command: Mutex::new(None),
        }
    }

    pub fn output(text: &str) -> Self {
        Self::with_reply(Reply::Output(text.to_string()))
    }

    pub fn timeout() -> Self {
        Self::with_reply(Reply::Timeout)
    }

    pub fn spawn_failure() -> Self {
        Self::with_reply(Reply::SpawnFailure)
    }

    /// Shell exited with 126 after printing `text`.
    pub fn cannot_execute(text: &str) -> Self {
        Self::with_reply(Reply::CannotExecute(text.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_command(&self) -> Option<String> {
        self.last_command.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, command_line: &str) -> Result<String, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_command.lock().unwrap() = Some(command_line.to_string());

        match &self.reply {
            Reply::Output(text) => Ok(text.clone()),
            Reply::Timeout => Err(ProbeError::Timeout {
                command: command_line.to_string(),
                timeout: Duration::from_secs(5),
            }),
            Reply::SpawnFailure => Err(ProbeError::Execution {
                command: command_line.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
            }),
            Reply::CannotExecute(text) => Err(ProbeError::NotExecutable {
                command: command_line.to_string(),
                output: text.clone(),
            }),
        }
    }
}

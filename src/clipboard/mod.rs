use std::io::{self, Write};
use std::process::{Command, Stdio};

use thiserror::Error;

pub const WL_COPY_COMMAND: &str = "wl-copy";
const MIME_TEXT_PLAIN_UTF8: &str = "text/plain;charset=utf-8";

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to run clipboard command: {command}")]
    CommandIo {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write stylesheet to {command} stdin")]
    WriteStdin {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("{command} exited with non-zero status: {status}")]
    CommandFailed { command: String, status: String },
}

pub type ClipboardResult<T> = std::result::Result<T, ClipboardError>;

pub trait ClipboardBackend {
    fn copy_text(&self, text: &str) -> ClipboardResult<()>;
}

/// Copies text by piping it into `wl-copy` (or a compatible command).
#[derive(Debug, Clone)]
pub struct WlCopyBackend {
    command: String,
}

impl Default for WlCopyBackend {
    fn default() -> Self {
        Self::new(WL_COPY_COMMAND)
    }
}

impl WlCopyBackend {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    fn io_error(&self, source: io::Error) -> ClipboardError {
        ClipboardError::CommandIo {
            command: self.command.clone(),
            source,
        }
    }
}

impl ClipboardBackend for WlCopyBackend {
    fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        let mut child = Command::new(&self.command)
            .arg("--type")
            .arg(MIME_TEXT_PLAIN_UTF8)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| self.io_error(err))?;

        // stdin is dropped before waiting so the child sees EOF.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child.wait().map_err(|err| self.io_error(err))?;
        if let Err(source) = written {
            return Err(ClipboardError::WriteStdin {
                command: self.command.clone(),
                source,
            });
        }
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed {
                command: self.command.clone(),
                status: status.to_string(),
            })
        }
    }
}

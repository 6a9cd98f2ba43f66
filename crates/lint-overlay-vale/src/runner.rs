//! External checker process runner.
//!
//! Runs a Vale-compatible checker over a document snapshot: spawn with
//! piped stdio, write the text to stdin, decode the JSON on stdout. The
//! runner never touches an overlay; hosts pair it with
//! [`EditorSurface::begin_check`](lint_overlay::EditorSurface::begin_check)
//! and deliver the result under that ticket.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use lint_overlay::Alert;
use thiserror::Error;

use crate::wire;

/// Errors from running the external checker.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The checker process could not be spawned.
    #[error("failed to spawn checker process: {source}")]
    Spawn {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The document could not be written to the checker's stdin.
    #[error("failed to write document to checker stdin: {source}")]
    Stdin {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The checker printed something that is not valid JSON.
    #[error("checker produced invalid JSON output: {source}")]
    InvalidOutput {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The checker failed without producing a result.
    #[error("checker exited with {status} and no output: {stderr}")]
    Checker {
        /// Exit status of the checker process.
        status: ExitStatus,
        /// Captured stderr, for diagnostics.
        stderr: String,
    },
}

/// Configuration for one external checker.
#[derive(Debug, Clone)]
pub struct CheckRunner {
    /// Checker executable (name resolved via `PATH`, or an absolute path).
    pub program: PathBuf,
    /// Explicit checker configuration file, if any (`--config`).
    pub config: Option<PathBuf>,
    /// File extension governing how stdin is scoped (`--ext`), e.g. `".md"`.
    pub stdin_ext: String,
}

impl Default for CheckRunner {
    fn default() -> Self {
        Self {
            program: PathBuf::from("vale"),
            config: None,
            stdin_ext: ".md".to_string(),
        }
    }
}

impl CheckRunner {
    /// A runner for the given executable with default options.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    /// Use an explicit configuration file.
    pub fn with_config(mut self, config: impl Into<PathBuf>) -> Self {
        self.config = Some(config.into());
        self
    }

    /// Scope stdin input as the given file extension.
    pub fn with_stdin_ext(mut self, ext: &str) -> Self {
        self.stdin_ext = ext.to_string();
        self
    }

    /// Check one document snapshot, returning its alerts in wire order.
    ///
    /// The checker exiting non-zero is not by itself an error: Vale exits 1
    /// whenever alerts exist. Only a failed exit with no output at all is
    /// reported as [`CheckError::Checker`].
    pub fn check_text(&self, text: &str) -> Result<Vec<Alert>, CheckError> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--output=JSON")
            .arg(format!("--ext={}", self.stdin_ext));
        if let Some(config) = &self.config {
            cmd.arg("--config").arg(config);
        }
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(|source| CheckError::Spawn { source })?;

        // Scope: stdin is taken exactly once from a freshly spawned child.
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| CheckError::Spawn {
                source: std::io::Error::other("failed to open checker stdin"),
            })?;
        if let Err(source) = stdin.write_all(text.as_bytes()) {
            // A checker that exits before draining stdin closes the pipe;
            // its status and output below tell the real story.
            if source.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(CheckError::Stdin { source });
            }
        }
        drop(stdin);

        let output = child
            .wait_with_output()
            .map_err(|source| CheckError::Spawn { source })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.trim().is_empty() && !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            tracing::warn!(status = %output.status, "checker failed without output");
            return Err(CheckError::Checker {
                status: output.status,
                stderr,
            });
        }

        wire::parse_check_output(&stdout)
    }
}

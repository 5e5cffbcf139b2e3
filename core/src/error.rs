use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Alias for fallible library operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// No explicit editor, nothing in the environment, and no platform
    /// default to fall back on.
    #[error("unable to determine what text editor to use; set the EDITOR environment variable")]
    NoEditor,
    /// The editor process could not be started at all.
    #[error("failed to launch editor `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
    /// The editor ran but exited with a non-zero status.
    #[error("editor `{program}` exited with {status}")]
    Exit {
        program: String,
        status: ExitStatus,
    },
    /// The user abandoned the edit; callers should exit quietly.
    #[error("cancelled")]
    Cancelled,
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// True when the user explicitly abandoned the edit, in which case no
    /// message should be printed.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    /// The process exit code a CLI should surface for this failure.
    ///
    /// A non-zero editor exit passes through unchanged (1 when the editor
    /// was killed by a signal); everything else maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Exit { status, .. } => status.code().unwrap_or(1),
            _ => 1,
        }
    }
}

//! Temporary-file edit sessions: seed content into a scratch file, run the
//! editor on it, and harvest the final lines.

use crate::command::edit_file;
use crate::error::Result;
use log::debug;
use std::fs;
use std::io::Write;
use std::process::Stdio;

/// Builder for one temporary-file edit session.
///
/// The temporary file is uniquely named, lives in the system temp directory,
/// and is removed on every exit path, including when the editor fails.
#[derive(Debug, Default)]
pub struct TemporaryEdit {
    content: Option<Vec<String>>,
    prefix: Option<String>,
    line_number: Option<u32>,
    editor: Option<String>,
    stdin: Option<Stdio>,
}

impl TemporaryEdit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the file with these lines, each followed by a newline.
    pub fn content<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    /// File-name prefix for the temporary file.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Place the cursor at this line, for editors that support it.
    pub fn line_number(mut self, line_number: u32) -> Self {
        self.line_number = Some(line_number);
        self
    }

    /// Editor configuration string overriding the environment.
    pub fn editor(mut self, editor: impl Into<String>) -> Self {
        self.editor = Some(editor.into());
        self
    }

    /// Standard input handed to the editor process.
    pub fn stdin(mut self, stdin: Stdio) -> Self {
        self.stdin = Some(stdin);
        self
    }

    /// Run the session and return the file's final contents as lines.
    ///
    /// A trailing newline at end-of-file does not produce a spurious empty
    /// trailing line.
    pub fn edit(self) -> Result<Vec<String>> {
        let TemporaryEdit {
            content,
            prefix,
            line_number,
            editor,
            stdin,
        } = self;

        let mut builder = tempfile::Builder::new();
        if let Some(prefix) = &prefix {
            builder.prefix(prefix);
        }
        let mut file = builder.tempfile()?;
        if let Some(lines) = &content {
            for line in lines {
                writeln!(file, "{line}")?;
            }
            file.flush()?;
        }

        // Close the write handle before the editor opens the file; the
        // remaining TempPath removes the file when it drops, on every exit
        // path.
        let path = file.into_temp_path();
        debug!("editing temporary file {}", path.display());
        edit_file(&path, line_number, editor.as_deref(), stdin)?;

        let text = fs::read_to_string(&path)?;
        Ok(text.lines().map(str::to_owned).collect())
    }
}

//! Command synthesis: render the final argument vector for a resolved
//! editor and run it.

use crate::error::{Error, Result};
use crate::platform::{Environment, Platform};
use crate::resolve::{EditorSpec, resolve};
use log::trace;
use std::path::Path;
use std::process::{Command, Stdio};
use std::str::FromStr;
use strum_macros::EnumString;

/// Per-editor convention for encoding a target line number.
///
/// Keyed by normalized program name (directory and extension stripped,
/// lowercased). The `strum` serializations are the lookup table, so adding
/// an editor is a data change rather than a control-flow change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
enum LineSyntax {
    /// `+N` option ahead of the path.
    #[strum(
        serialize = "vi",
        serialize = "vim",
        serialize = "emacs",
        serialize = "xemacs",
        serialize = "nano",
        serialize = "pico",
        serialize = "gedit"
    )]
    PlusOption,
    /// `path:N` combined into the target itself.
    #[strum(serialize = "sublime_text", serialize = "subl", serialize = "atom")]
    PathSuffix,
    /// `--goto` option followed by a `path:N` target.
    #[strum(serialize = "code")]
    GotoPathSuffix,
    /// `-nN` option ahead of the path.
    #[strum(serialize = "notepad++")]
    NumberFlag,
}

impl LineSyntax {
    /// Look up the rule for a program, ignoring directory and extension.
    fn for_program(program: &str) -> Option<Self> {
        let stem = Path::new(program)
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_lowercase())?;
        Self::from_str(&stem).ok()
    }
}

/// A fully rendered editor invocation: program, option tokens, then the
/// target path last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    program: String,
    args: Vec<String>,
}

impl EditCommand {
    /// Render the argument vector for `spec` against a target path and an
    /// optional line number.
    ///
    /// Baked-in options come first, then any line-number option, then the
    /// target. Editors with no known line syntax get a plain path.
    pub fn build(
        spec: &EditorSpec,
        file_path: &Path,
        line_number: Option<u32>,
        platform: Platform,
    ) -> Self {
        let mut args = spec.args().to_vec();
        let mut target = file_path.display().to_string();

        let line_number = line_number.filter(|line| *line != 0 && spec.line_numbers());
        if let Some(line) = line_number {
            match LineSyntax::for_program(spec.program()) {
                Some(LineSyntax::PlusOption) => args.push(format!("+{line}")),
                Some(LineSyntax::PathSuffix) => target = format!("{target}:{line}"),
                Some(LineSyntax::GotoPathSuffix) => {
                    args.push("--goto".to_owned());
                    target = format!("{target}:{line}");
                }
                Some(LineSyntax::NumberFlag) => args.push(format!("-n{line}")),
                None => {}
            }
        }

        // A target starting with `-` would parse as an option; anchor it to
        // the current directory.
        if platform == Platform::Posix && target.starts_with('-') {
            target = format!("./{target}");
        }

        args.push(target);
        Self {
            program: spec.program().to_owned(),
            args,
        }
    }

    /// The executable to spawn.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Options and target, in final order (target last).
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Run the editor and wait for it to exit.
    ///
    /// Stdout and stderr are inherited so terminal editors can draw their
    /// UI; stdin is replaced only when `stdin` is given.
    pub fn status(&self, stdin: Option<Stdio>) -> Result<()> {
        trace!("spawning editor: {} {:?}", self.program, self.args);
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(stdin) = stdin {
            command.stdin(stdin);
        }
        let status = command.status().map_err(|source| Error::Launch {
            program: self.program.clone(),
            source,
        })?;
        if !status.success() {
            return Err(Error::Exit {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }
}

/// Open `file_path` in the user's preferred editor, optionally at a line.
///
/// Resolution consults the live process environment; `editor` overrides it.
/// Blocks until the editor exits.
pub fn edit_file(
    file_path: &Path,
    line_number: Option<u32>,
    editor: Option<&str>,
    stdin: Option<Stdio>,
) -> Result<()> {
    let platform = Platform::current();
    let spec = resolve(editor, &Environment::from_process(), platform)?;
    EditCommand::build(&spec, file_path, line_number, platform).status(stdin)
}

#[cfg(test)]
mod test {
    use super::*;

    fn spec(program: &str) -> EditorSpec {
        EditorSpec {
            program: program.to_owned(),
            args: Vec::new(),
            line_numbers: true,
        }
    }

    fn argv(spec: &EditorSpec, path: &str, line: Option<u32>, platform: Platform) -> Vec<String> {
        let command = EditCommand::build(spec, Path::new(path), line, platform);
        let mut argv = vec![command.program().to_owned()];
        argv.extend(command.args().iter().cloned());
        argv
    }

    #[test]
    fn plain_path_without_line() {
        assert_eq!(
            argv(&spec("vi"), "some_file.txt", None, Platform::Posix),
            ["vi", "some_file.txt"]
        );
    }

    #[test]
    fn vi_family_uses_plus_option() {
        assert_eq!(
            argv(&spec("vi"), "some_file.txt", Some(42), Platform::Posix),
            ["vi", "+42", "some_file.txt"]
        );
        assert_eq!(
            argv(&spec("/usr/bin/emacs"), "some_file.txt", Some(7), Platform::Posix),
            ["/usr/bin/emacs", "+7", "some_file.txt"]
        );
    }

    #[test]
    fn code_uses_goto_and_combined_target() {
        assert_eq!(
            argv(&spec("code"), "some_file.txt", Some(42), Platform::Posix),
            ["code", "--goto", "some_file.txt:42"]
        );
    }

    #[test]
    fn sublime_family_combines_the_target() {
        assert_eq!(
            argv(&spec("subl"), "some_file.txt", Some(42), Platform::Posix),
            ["subl", "some_file.txt:42"]
        );
        assert_eq!(
            argv(&spec("sublime_text"), "some_file.txt", Some(42), Platform::Posix),
            ["sublime_text", "some_file.txt:42"]
        );
    }

    #[test]
    fn notepad_plus_plus_uses_number_flag() {
        assert_eq!(
            argv(&spec("notepad++"), "some_file.txt", Some(42), Platform::Windows),
            ["notepad++", "-n42", "some_file.txt"]
        );
    }

    #[test]
    fn unrecognized_editor_drops_the_line() {
        assert_eq!(
            argv(
                &spec("some_unrecognized_editor"),
                "some_file.txt",
                Some(42),
                Platform::Posix
            ),
            ["some_unrecognized_editor", "some_file.txt"]
        );
    }

    #[test]
    fn zero_line_is_ignored() {
        assert_eq!(
            argv(&spec("vi"), "some_file.txt", Some(0), Platform::Posix),
            ["vi", "some_file.txt"]
        );
    }

    #[test]
    fn directory_and_extension_are_ignored_for_identification() {
        let spec = EditorSpec {
            program: "C:/Program Files/Sublime Text/subl.exe".to_owned(),
            args: vec!["--wait".to_owned()],
            line_numbers: true,
        };
        assert_eq!(
            argv(&spec, "some_file.txt", Some(42), Platform::Windows),
            [
                "C:/Program Files/Sublime Text/subl.exe",
                "--wait",
                "some_file.txt:42"
            ]
        );
    }

    #[test]
    fn baked_in_options_precede_line_options() {
        let spec = EditorSpec {
            program: "vim".to_owned(),
            args: vec!["-u".to_owned(), "NONE".to_owned()],
            line_numbers: true,
        };
        assert_eq!(
            argv(&spec, "some_file.txt", Some(3), Platform::Posix),
            ["vim", "-u", "NONE", "+3", "some_file.txt"]
        );
    }

    #[test]
    fn hyphen_target_is_anchored_on_posix() {
        assert_eq!(
            argv(&spec("vi"), "-some_file.txt", None, Platform::Posix),
            ["vi", "./-some_file.txt"]
        );
        assert_eq!(
            argv(&spec("vi"), "-some_file.txt", Some(42), Platform::Posix),
            ["vi", "+42", "./-some_file.txt"]
        );
        // A combined target still starts with the hyphen and is anchored too.
        assert_eq!(
            argv(&spec("subl"), "-some_file.txt", Some(42), Platform::Posix),
            ["subl", "./-some_file.txt:42"]
        );
    }

    #[test]
    fn hyphen_target_is_left_alone_off_posix() {
        assert_eq!(
            argv(&spec("notepad.exe"), "-some_file.txt", None, Platform::Windows),
            ["notepad.exe", "-some_file.txt"]
        );
    }

    #[test]
    fn line_capability_gate_suppresses_synthesis() {
        // The notepad fallback carries the gate even for names that would
        // otherwise match the table.
        let spec = EditorSpec {
            program: "vim".to_owned(),
            args: Vec::new(),
            line_numbers: false,
        };
        assert_eq!(
            argv(&spec, "some_file.txt", Some(42), Platform::Windows),
            ["vim", "some_file.txt"]
        );
    }
}

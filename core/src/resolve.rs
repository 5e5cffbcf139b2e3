//! Editor resolution: decide which executable to run and which option
//! tokens are baked into its configuration string.

use crate::error::{Error, Result};
use crate::platform::{Environment, Platform};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Path conventionally symlinked to the system-wide default editor on
/// Debian-style systems.
const POSIX_EDITOR_ALIAS: &str = "/usr/bin/editor";

/// A resolved editor invocation: the program to run plus any option tokens
/// baked into the configuration string ahead of the target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSpec {
    pub(crate) program: String,
    pub(crate) args: Vec<String>,
    pub(crate) line_numbers: bool,
}

impl EditorSpec {
    /// The executable to spawn. Non-empty by construction.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Option tokens embedded in the configuration string, in order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether line-number arguments may be synthesized for this editor.
    ///
    /// False only for the bare `notepad.exe` fallback, which has no
    /// line-number syntax at all.
    pub fn line_numbers(&self) -> bool {
        self.line_numbers
    }
}

/// Determine which editor to launch.
///
/// Precedence: the explicit `editor` argument, then `VISUAL` (on POSIX only
/// when a display-indicating variable is set), then `EDITOR`, then a
/// per-platform default. Fails only when the platform has no known default.
pub fn resolve(editor: Option<&str>, env: &Environment, platform: Platform) -> Result<EditorSpec> {
    let candidates = [
        editor.map(str::to_owned),
        visual(env, platform),
        env.var("EDITOR").map(str::to_owned),
    ];
    for candidate in candidates.into_iter().flatten() {
        match from_config(&candidate, platform) {
            Some(spec) => {
                debug!("using configured editor: {}", spec.program);
                return Ok(spec);
            }
            // Whitespace-only configuration falls through to the next
            // precedence step.
            None => warn!("editor configuration {candidate:?} contains no tokens; ignoring"),
        }
    }
    default_editor(platform, |alias| alias.exists())
}

/// `VISUAL` is meant for full-screen editors; honor it on POSIX only when a
/// display-indicating variable suggests one can actually appear.
fn visual(env: &Environment, platform: Platform) -> Option<String> {
    if platform == Platform::Posix && !display_present(env) {
        return None;
    }
    env.var("VISUAL").map(str::to_owned)
}

fn display_present(env: &Environment) -> bool {
    env.var("DISPLAY").is_some() || env.var("WAYLAND_DISPLAY").is_some()
}

/// Tokenize a configuration string into a spec, or `None` when it contains
/// no usable tokens.
fn from_config(config: &str, platform: Platform) -> Option<EditorSpec> {
    let mut tokens = tokenize(config, platform);
    if tokens.is_empty() || tokens[0].is_empty() {
        return None;
    }
    let program = tokens.remove(0);
    Some(EditorSpec {
        program,
        args: tokens,
        line_numbers: true,
    })
}

/// Split a configuration string under the platform's quoting rules.
///
/// POSIX honors quotes and backslash escapes via `shlex`; a string shlex
/// rejects (unbalanced quoting) is taken whole so the failure surfaces at
/// spawn time. Windows groups with double quotes only, backslashes being
/// ordinary path characters there.
fn tokenize(config: &str, platform: Platform) -> Vec<String> {
    match platform {
        Platform::Windows => split_windows(config),
        Platform::Posix | Platform::Unknown => {
            shlex::split(config).unwrap_or_else(|| vec![config.to_owned()])
        }
    }
}

fn split_windows(config: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut in_token = false;
    for c in config.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        tokens.push(current);
    }
    tokens
}

/// The per-platform fallback when nothing is configured.
///
/// `alias_exists` is injected so tests do not depend on the host's
/// `/usr/bin/editor` state.
fn default_editor(platform: Platform, alias_exists: impl Fn(&Path) -> bool) -> Result<EditorSpec> {
    match platform {
        Platform::Posix => {
            let alias = Path::new(POSIX_EDITOR_ALIAS);
            let program = if alias_exists(alias) {
                // The alias is conventionally a symlink; point at its target.
                fs::canonicalize(alias)
                    .map(|target| target.display().to_string())
                    .unwrap_or_else(|_| POSIX_EDITOR_ALIAS.to_owned())
            } else {
                "vi".to_owned()
            };
            Ok(EditorSpec {
                program,
                args: Vec::new(),
                line_numbers: true,
            })
        }
        Platform::Windows => Ok(EditorSpec {
            program: "notepad.exe".to_owned(),
            args: Vec::new(),
            line_numbers: false,
        }),
        Platform::Unknown => Err(Error::NoEditor),
    }
}

use std::collections::HashMap;
use std::env;

/// Broad platform family the spawner is running on.
///
/// Carried as a value rather than probed with `cfg!` at each decision point,
/// so every branch is reachable from tests on any host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Unix-like targets (Linux, macOS, the BSDs).
    Posix,
    Windows,
    /// Anything else; no default editor is known here.
    Unknown,
}

impl Platform {
    /// The platform family of the running process.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(unix) {
            Platform::Posix
        } else {
            Platform::Unknown
        }
    }
}

/// Owned snapshot of the environment variables consulted during editor
/// resolution.
///
/// Lookups treat variables set to the empty string as unset.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Snapshot the live process environment.
    pub fn from_process() -> Self {
        Self {
            vars: env::vars().collect(),
        }
    }

    /// Look up a variable, treating empty values as unset.
    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

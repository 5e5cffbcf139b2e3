//! Resolve and launch the user's preferred text editor.
//!
//! Tools that need "open this in `$EDITOR` and get the result back"
//! semantics share three concerns: picking the right editor (explicit
//! override, `VISUAL`, `EDITOR`, platform default), rendering its argument
//! vector (baked-in options, per-editor line-number syntax, path-safety
//! escaping), and round-tripping transient content through a temporary
//! file. This crate implements all three.
//!
//! Open an existing file:
//!
//! ```no_run
//! edspawn_core::edit_file(std::path::Path::new("notes.txt"), Some(42), None, None)?;
//! # Ok::<(), edspawn_core::Error>(())
//! ```
//!
//! Edit scratch content and harvest the result:
//!
//! ```no_run
//! let lines = edspawn_core::TemporaryEdit::new()
//!     .content(["Do some stuff below the line.", "---"])
//!     .line_number(3)
//!     .edit()?;
//! # Ok::<(), edspawn_core::Error>(())
//! ```

pub mod command;
pub mod error;
pub mod platform;
pub mod resolve;
pub mod session;

pub use command::{EditCommand, edit_file};
pub use error::{Error, Result};
pub use platform::{Environment, Platform};
pub use resolve::{EditorSpec, resolve};
pub use session::TemporaryEdit;

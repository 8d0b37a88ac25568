//! Data-driven option tables for Rust applications. Declare your options
//! once, resolve them from config files and the command line, read a plain
//! struct afterwards.
//!
//! An application keeps one record struct with all its settings and one
//! table of [`ConfOption`] descriptors. Each descriptor names a field of the
//! record, its short and long flag, its type and its default. The same table
//! drives every source: `--seat seat1` on the command line and `seat = seat1`
//! in a config file go through the same descriptor into the same field.
//!
//! ```ignore
//! let mut options = vec![
//!     ConfOption::bool(Some('d'), "debug", |c: &mut AppConfig| &mut c.debug, false),
//!     ConfOption::string(None, "seat", |c: &mut AppConfig| &mut c.seat, Some("seat0")),
//! ];
//!
//! let config: AppConfig = Confbind::builder()
//!     .app_name("myapp")
//!     .args(std::env::args())
//!     .load(&mut options)?;
//! ```
//!
//! That call reads `myapp.conf` from the platform config directory, parses
//! the command line, fills in defaults for everything nobody set, runs the
//! afterchecks and hands you the record by value. There is no global: pass
//! the record to whatever needs it. It is written once, at startup.
//!
//! # Types
//!
//! The set of value types is closed ([`ConfType`]):
//!
//! - **Bool**: `--debug` / `--no-debug` / `-d`. Takes no argument on the
//!   command line, though `--debug=off` and `debug = no` are understood.
//! - **String**: `--seat=seat1`, `--seat seat1`, `-t xterm`. The argument is
//!   required. The record owns the parsed `String`; re-parsing drops the old
//!   value before storing the new one.
//!
//! # Sources and locking
//!
//! Every option carries two runtime flags. *Done* means some source set the
//! value; *locked* means the value is authoritative and later parses are
//! silently ignored.
//!
//! - **Config files** lock every value they set. The first file that mentions
//!   a key wins over later files and over the command line.
//! - **The command line** marks values done, not locked. Repeating an option
//!   keeps the last value.
//! - **Defaults** are written only for options that are not done once all
//!   sources are exhausted.
//!
//! With the default [`Precedence::FilesFirst`], a file that says `seat=foo`
//! beats `--seat bar`. Products that want the command line to win select
//! [`Precedence::ArgsFirst`]: argv is scanned first and everything it set is
//! locked before files are read.
//!
//! # Command line
//!
//! ```text
//! -d                  short flag (single character, never negated)
//! --debug             long flag
//! --no-debug          negated long flag
//! --seat=seat1        inline argument
//! --seat seat1        argument in the next token
//! --                  end of options; the rest is positional
//! ```
//!
//! Parsing is strict: an unmatched token is [`ConfError::UnknownOption`].
//! Options matched before the bad token keep their values. After the scan,
//! each option's [`Aftercheck`] runs with the full argv and the index where
//! the positional run begins. That is where cross-field validation and
//! positional capture (`--login -- /bin/login -p`) belong.
//!
//! # Config files
//!
//! ```text
//! # /etc/myapp.conf
//! debug
//! seat = seat1
//! xkb-layout = "de"
//! ```
//!
//! Keys are long names. Blank lines and `#` comments are skipped; values may
//! be quoted. A bad line (unknown key, missing or invalid value) is logged
//! with its file and line number and skipped, the rest of the file still
//! applies.
//!
//! [`search_paths()`](ConfbindBuilder::search_paths) lists candidate
//! directories ([`SearchPath`]) checked for the config file in order;
//! missing files are skipped. [`config_file()`](ConfbindBuilder::config_file)
//! reads exactly one file and fails if it is missing.
//!
//! # Lower-level passes
//!
//! The builder only composes public passes, usable on their own:
//! [`parse_file`], [`parse_all_files`], [`parse_argv`],
//! [`fill_defaults`] and [`free_all`].
//!
//! # Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events: skipped
//! config lines at `warn`, applied values and missing candidate files at
//! `debug`. Install any subscriber to see them.
//!
//! # Error handling
//!
//! All fallible operations return [`ConfError`]. Argv and explicit-file errors
//! are fatal and meant to be printed as a single line, followed by exit with
//! [`ConfError::exit_code()`]. With the `rich-errors` feature the error also
//! implements `miette::Diagnostic`.

pub mod error;
pub mod types;

mod argv;
mod binding;
mod builder;
mod file;
mod lifecycle;
mod option;

#[cfg(test)]
mod fixtures;

pub use argv::{parse_argv, run_afterchecks, scan_argv};
pub use binding::{Binding, BoolField, StringField};
pub use builder::{Confbind, ConfbindBuilder};
pub use error::ConfError;
pub use file::{candidate_files, parse_all_files, parse_content, parse_file, resolve_search_path};
pub use lifecycle::{fill_defaults, free_all};
pub use option::{Aftercheck, ConfOption, lock_done};
pub use types::{ConfType, OptionFlags, Precedence, SearchPath, TypeFlags};

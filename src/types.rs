use std::path::PathBuf;

/// The closed set of value types an option can carry.
///
/// Each type has one behaviour per operation (`parse`, `free`,
/// `set_default`); the dispatch lives on [`Binding`](crate::Binding), which
/// pairs the type with the storage it writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfType {
    /// A switch: `--name` / `--no-name`, or `name` / `name = yes` in a file.
    Bool,
    /// A text value that must be supplied as an argument.
    String,
}

impl ConfType {
    pub fn flags(self) -> TypeFlags {
        match self {
            ConfType::Bool => TypeFlags { has_arg: false },
            ConfType::String => TypeFlags { has_arg: true },
        }
    }

    /// Whether the long form takes an argument (inline `=value` or the next token).
    pub fn has_arg(self) -> bool {
        self.flags().has_arg
    }
}

/// Static per-type flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeFlags {
    pub has_arg: bool,
}

/// Runtime state of a single option.
///
/// - `done`: a source explicitly set the value.
/// - `locked`: an authoritative source set the value; later parses are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionFlags {
    pub done: bool,
    pub locked: bool,
}

/// Where to search for config files.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPath {
    /// Platform config directory (XDG on Linux, ~/Library/Application Support on macOS).
    Platform,
    /// A subdirectory under the user's home directory, e.g. `Home(".myapp")`.
    /// `Home("")` is the home directory itself.
    Home(&'static str),
    /// Current working directory.
    Cwd,
    /// An explicit directory.
    Path(PathBuf),
}

/// Which source gets to lock values first.
///
/// Values are first-writer-locks: whichever source sets an option first makes
/// it authoritative, and later sources leave it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precedence {
    /// Config files are applied first and lock what they set; the command
    /// line only fills options no file mentioned.
    #[default]
    FilesFirst,
    /// The command line is applied first and every option it set is locked
    /// before config files fill the rest.
    ArgsFirst,
}

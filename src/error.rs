use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum ConfError {
    #[error("Unknown option '{token}'")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(confbind::unknown_option),
            help("use `--` to pass arguments that start with '-' as positionals")
        )
    )]
    UnknownOption { token: String },

    #[error("Option '{option}' requires an argument")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(confbind::missing_argument),
            help("pass it as --{option}=VALUE or --{option} VALUE")
        )
    )]
    MissingArgument { option: String },

    #[error("Invalid argument '{value}' for option '{option}'")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(code(confbind::invalid_argument))
    )]
    InvalidArgument { option: String, value: String },

    #[error("Config file not found: {path}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(confbind::file_not_found)))]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(confbind::io)))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Check for option '{option}' failed: {message}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(code(confbind::aftercheck_failed))
    )]
    AftercheckFailed { option: String, message: String },

    #[error("App name is required to discover config files; call .app_name() on the loader")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(confbind::app_name_required),
            help("or call .no_files() to skip discovery")
        )
    )]
    AppNameRequired,
}

impl ConfError {
    /// Process exit status a binary should use after reporting this error.
    ///
    /// Every resolution failure is fatal for the process, so this is always
    /// non-zero; usage errors (bad argv) are told apart from I/O and check
    /// failures the way `sysexits.h` does.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfError::UnknownOption { .. }
            | ConfError::MissingArgument { .. }
            | ConfError::InvalidArgument { .. } => 64,
            ConfError::FileNotFound { .. } => 66,
            ConfError::Io { .. } => 74,
            ConfError::AftercheckFailed { .. } | ConfError::AppNameRequired => 78,
        }
    }
}

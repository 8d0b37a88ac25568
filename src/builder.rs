use std::marker::PhantomData;
use std::path::PathBuf;

use crate::argv;
use crate::error::ConfError;
use crate::file;
use crate::lifecycle;
use crate::option::{self, ConfOption};
use crate::types::{Precedence, SearchPath};

/// Entry point for building a confbind loader.
pub struct Confbind;

impl Confbind {
    pub fn builder<C>() -> ConfbindBuilder<C> {
        ConfbindBuilder::new()
    }
}

/// Builder for the startup pass that resolves an option table into a record.
///
/// Controls three things:
///
/// - **Files**: [`search_paths()`](Self::search_paths) for discovery, or a
///   single [`config_file()`](Self::config_file).
/// - **Command line**: [`args()`](Self::args).
/// - **Precedence**: [`precedence()`](Self::precedence): which source locks first.
pub struct ConfbindBuilder<C> {
    app_name: Option<String>,
    file_name: Option<String>,
    search_paths: Option<Vec<SearchPath>>,
    config_file: Option<PathBuf>,
    files_enabled: bool,
    args: Vec<String>,
    precedence: Precedence,
    _phantom: PhantomData<C>,
}

impl<C> ConfbindBuilder<C> {
    fn new() -> Self {
        Self {
            app_name: None,
            file_name: None,
            search_paths: None,
            config_file: None,
            files_enabled: true,
            args: Vec::new(),
            precedence: Precedence::default(),
            _phantom: PhantomData,
        }
    }

    /// Set the application name. This derives sensible defaults:
    /// - `file_name` → `"{app_name}.conf"`
    /// - `search_paths` → `[SearchPath::Platform]`
    pub fn app_name(mut self, name: &str) -> Self {
        self.app_name = Some(name.to_string());
        self
    }

    /// Override the config file name (default: `"{app_name}.conf"`).
    pub fn file_name(mut self, name: &str) -> Self {
        self.file_name = Some(name.to_string());
        self
    }

    /// Replace the default search paths entirely.
    ///
    /// Paths are applied in list order. Since files lock what they set, the
    /// **first** file that mentions a key wins.
    pub fn search_paths(mut self, paths: Vec<SearchPath>) -> Self {
        self.search_paths = Some(paths);
        self
    }

    /// Append a search path without replacing the defaults.
    /// If no paths have been set yet, starts from the default `[Platform]`.
    pub fn add_search_path(mut self, path: SearchPath) -> Self {
        self.search_paths
            .get_or_insert_with(|| vec![SearchPath::Platform])
            .push(path);
        self
    }

    /// Read exactly this file instead of searching. A missing file is an error.
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Skip config files entirely.
    pub fn no_files(mut self) -> Self {
        self.files_enabled = false;
        self
    }

    /// Command-line arguments, program name first (e.g. `std::env::args()`).
    ///
    /// Without this call no command line is parsed.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set which source locks first (default: [`Precedence::FilesFirst`]).
    pub fn precedence(mut self, precedence: Precedence) -> Self {
        self.precedence = precedence;
        self
    }

    /// Resolve the effective app name, or error if not set.
    fn effective_app_name(&self) -> Result<&str, ConfError> {
        self.app_name.as_deref().ok_or(ConfError::AppNameRequired)
    }

    /// Resolve the effective file name.
    fn effective_file_name(&self) -> Result<String, ConfError> {
        if let Some(name) = &self.file_name {
            return Ok(name.clone());
        }
        let app = self.effective_app_name()?;
        Ok(format!("{app}.conf"))
    }

    /// Resolve the effective search paths.
    fn effective_search_paths(&self) -> Vec<SearchPath> {
        if let Some(paths) = &self.search_paths {
            return paths.clone();
        }
        vec![SearchPath::Platform]
    }

    /// Apply config files according to the builder state.
    fn apply_files(&self, options: &mut [ConfOption<C>], config: &mut C) -> Result<(), ConfError> {
        if !self.files_enabled {
            return Ok(());
        }
        if let Some(path) = &self.config_file {
            return file::parse_file(options, config, path);
        }

        let app_name = self.effective_app_name()?;
        let file_name = self.effective_file_name()?;
        let candidates =
            file::candidate_files(&self.effective_search_paths(), &file_name, app_name);
        let applied = file::parse_all_files(options, config, &candidates)?;
        tracing::debug!(count = applied.len(), "config files applied");
        Ok(())
    }

    /// Resolve `options` into `config`.
    ///
    /// 1. Files and command line, in [`Precedence`] order
    /// 2. Defaults for every option no source set
    /// 3. Afterchecks, which therefore see the complete record
    pub fn load_into(&self, options: &mut [ConfOption<C>], config: &mut C) -> Result<(), ConfError> {
        let idx = match self.precedence {
            Precedence::FilesFirst => {
                self.apply_files(options, config)?;
                argv::scan_argv(options, config, &self.args)?
            }
            Precedence::ArgsFirst => {
                let idx = argv::scan_argv(options, config, &self.args)?;
                option::lock_done(options);
                self.apply_files(options, config)?;
                idx
            }
        };

        lifecycle::fill_defaults(options, config);
        argv::run_afterchecks(options, config, &self.args, idx)
    }

    /// Resolve `options` into a fresh `C::default()` and return it.
    pub fn load(self, options: &mut [ConfOption<C>]) -> Result<C, ConfError>
    where
        C: Default,
    {
        let mut config = C::default();
        self.load_into(options, &mut config)?;
        Ok(config)
    }
}

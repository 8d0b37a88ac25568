use std::fmt;

use crate::binding::{Binding, BoolField, StringField};
use crate::error::ConfError;
use crate::types::{ConfType, OptionFlags};

/// Post-parse check for one option.
///
/// Runs once after every argv token has been consumed. Receives the option,
/// the record, the full argv and the index where the positional run after
/// `--` begins (`argv.len()` when there is none). An `Err` aborts resolution
/// with [`ConfError::AftercheckFailed`] carrying the message.
pub type Aftercheck<C> =
    fn(opt: &ConfOption<C>, config: &mut C, argv: &[String], idx: usize) -> Result<(), String>;

/// Descriptor binding a command-line/config-file name to a field of `C`.
///
/// ```ignore
/// let mut options = vec![
///     ConfOption::bool(Some('d'), "debug", |c: &mut Conf| &mut c.debug, false),
///     ConfOption::string(None, "seat", |c: &mut Conf| &mut c.seat, Some("seat0")),
/// ];
/// ```
pub struct ConfOption<C> {
    flags: OptionFlags,
    short_name: Option<char>,
    long_name: &'static str,
    binding: Binding<C>,
    aftercheck: Option<Aftercheck<C>>,
}

impl<C> ConfOption<C> {
    pub fn new(short_name: Option<char>, long_name: &'static str, binding: Binding<C>) -> Self {
        Self {
            flags: OptionFlags::default(),
            short_name,
            long_name,
            binding,
            aftercheck: None,
        }
    }

    /// A boolean option: `--name` / `--no-name`.
    pub fn bool(
        short_name: Option<char>,
        long_name: &'static str,
        field: BoolField<C>,
        default: bool,
    ) -> Self {
        Self::new(short_name, long_name, Binding::Bool { field, default })
    }

    /// A string option: `--name=value` / `--name value`.
    pub fn string(
        short_name: Option<char>,
        long_name: &'static str,
        field: StringField<C>,
        default: Option<&'static str>,
    ) -> Self {
        Self::new(short_name, long_name, Binding::String { field, default })
    }

    pub fn with_aftercheck(mut self, check: Aftercheck<C>) -> Self {
        self.aftercheck = Some(check);
        self
    }

    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    pub fn long_name(&self) -> &'static str {
        self.long_name
    }

    pub fn conf_type(&self) -> ConfType {
        self.binding.conf_type()
    }

    pub fn binding(&self) -> &Binding<C> {
        &self.binding
    }

    pub fn aftercheck(&self) -> Option<Aftercheck<C>> {
        self.aftercheck
    }

    pub fn flags(&self) -> OptionFlags {
        self.flags
    }

    pub fn is_done(&self) -> bool {
        self.flags.done
    }

    pub fn is_locked(&self) -> bool {
        self.flags.locked
    }

    /// Mark the current value authoritative. Later parses become no-ops.
    pub fn lock(&mut self) {
        self.flags.locked = true;
    }

    /// Parse `arg` into the bound field.
    ///
    /// A locked option returns `Ok` without touching storage. On success the
    /// option is marked done. Type errors are returned unchanged.
    pub fn parse(&mut self, config: &mut C, on: bool, arg: Option<&str>) -> Result<(), ConfError> {
        if self.flags.locked {
            return Ok(());
        }
        self.binding.parse(self.long_name, config, on, arg)?;
        self.flags.done = true;
        Ok(())
    }

    pub fn set_default(&self, config: &mut C) {
        self.binding.set_default(config);
    }

    pub fn free(&self, config: &mut C) {
        self.binding.free(config);
    }
}

impl<C> fmt::Debug for ConfOption<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfOption")
            .field("flags", &self.flags)
            .field("short_name", &self.short_name)
            .field("long_name", &self.long_name)
            .field("binding", &self.binding)
            .field("aftercheck", &self.aftercheck.is_some())
            .finish()
    }
}

/// Lock every option some source has already set.
pub fn lock_done<C>(options: &mut [ConfOption<C>]) {
    for opt in options.iter_mut().filter(|o| o.is_done()) {
        opt.lock();
    }
}

/// Find an option by its exact long name.
pub(crate) fn find_long<'a, C>(
    options: &'a mut [ConfOption<C>],
    name: &str,
) -> Option<&'a mut ConfOption<C>> {
    options.iter_mut().find(|o| o.long_name == name)
}

//! Type dispatch: how each [`ConfType`] parses into, defaults and releases the
//! field it is bound to.
//!
//! A [`Binding`] is the pair *(type, storage)*. Storage is an accessor into the
//! application's record rather than an address, so a descriptor never owns or
//! outlives the record it writes to. The record owns every value written into
//! it, including parsed strings.

use std::fmt;

use crate::error::ConfError;
use crate::types::ConfType;

/// Accessor for a `bool` field of the record.
pub type BoolField<C> = fn(&mut C) -> &mut bool;

/// Accessor for an optional string field of the record.
pub type StringField<C> = fn(&mut C) -> &mut Option<String>;

/// A typed storage binding with its default value.
pub enum Binding<C> {
    Bool {
        field: BoolField<C>,
        default: bool,
    },
    String {
        field: StringField<C>,
        default: Option<&'static str>,
    },
}

impl<C> Clone for Binding<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Binding<C> {}

impl<C> fmt::Debug for Binding<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Bool { default, .. } => f
                .debug_struct("Bool")
                .field("default", default)
                .finish_non_exhaustive(),
            Binding::String { default, .. } => f
                .debug_struct("String")
                .field("default", default)
                .finish_non_exhaustive(),
        }
    }
}

impl<C> Binding<C> {
    pub fn conf_type(&self) -> ConfType {
        match self {
            Binding::Bool { .. } => ConfType::Bool,
            Binding::String { .. } => ConfType::String,
        }
    }

    /// Parse `arg` into the bound field.
    ///
    /// `name` is only used for error messages. `on` is the polarity: `false`
    /// for the negated `--no-` form.
    pub(crate) fn parse(
        &self,
        name: &str,
        config: &mut C,
        on: bool,
        arg: Option<&str>,
    ) -> Result<(), ConfError> {
        match *self {
            Binding::Bool { field, .. } => {
                *field(config) = parse_bool(name, on, arg)?;
            }
            Binding::String { field, .. } => {
                let Some(text) = arg else {
                    return Err(ConfError::MissingArgument {
                        option: name.to_string(),
                    });
                };
                // Assignment drops the previous value.
                *field(config) = Some(text.to_string());
            }
        }
        Ok(())
    }

    pub(crate) fn set_default(&self, config: &mut C) {
        match *self {
            Binding::Bool { field, default } => *field(config) = default,
            Binding::String { field, default } => *field(config) = default.map(str::to_string),
        }
    }

    /// Release any owned value. Safe to call more than once.
    pub(crate) fn free(&self, config: &mut C) {
        match *self {
            Binding::Bool { .. } => {}
            Binding::String { field, .. } => *field(config) = None,
        }
    }
}

/// Booleans take no argument on the command line, but an explicit value is
/// accepted so that files can say `debug = no` and argv can say `--debug=off`.
fn parse_bool(name: &str, on: bool, arg: Option<&str>) -> Result<bool, ConfError> {
    let Some(text) = arg else {
        return Ok(on);
    };
    let value = match text.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            return Err(ConfError::InvalidArgument {
                option: name.to_string(),
                value: text.to_string(),
            });
        }
    };
    Ok(value == on)
}

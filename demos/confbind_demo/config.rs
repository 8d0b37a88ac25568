//! Configuration record and option table for the confbind demo application.
//!
//! The record is a terminal-emulator style settings block: logging switches,
//! keyboard layout, seat, and an optional login program whose argv is taken
//! from everything after `--`.
//!
//! | Flag                    | File key        | Default          |
//! |-------------------------|-----------------|------------------|
//! | `-h`, `--help`          | `help`          | off              |
//! | `--exit`                | `exit`          | off              |
//! | `-d`, `--debug`         | `debug`         | off              |
//! | `-v`, `--verbose`       | `verbose`       | off              |
//! | `--silent`              | `silent`        | off              |
//! | `-s`, `--switchvt`      | `switchvt`      | off              |
//! | `--fbdev`               | `fbdev`         | off              |
//! | `--xkb-layout`          | `xkb-layout`    | `us`             |
//! | `--xkb-variant`         | `xkb-variant`   | unset            |
//! | `--xkb-options`         | `xkb-options`   | unset            |
//! | `-t`, `--term`          | `term`          | `vt220`          |
//! | `-l`, `--login`         | `login`         | off              |
//! | `--seat`                | `seat`          | `seat0`          |
//! | `--font-engine`         | `font-engine`   | `pango`          |

use confbind::ConfOption;

/// Login program used when `--login` is given without `-- PROGRAM ARGS...`.
const DEFAULT_LOGIN: [&str; 2] = ["/bin/login", "-p"];

#[derive(Debug, Default)]
pub struct DemoConfig {
    /// Show help/usage information.
    pub help: bool,
    /// Exit after parsing options.
    pub exit: bool,
    /// Enable debug messages.
    pub debug: bool,
    /// Enable verbose info messages.
    pub verbose: bool,
    /// Disable notices and warnings.
    pub silent: bool,
    /// Enter the new VT directly.
    pub switchvt: bool,
    /// Use framebuffers instead of DRM.
    pub use_fbdev: bool,

    pub xkb_layout: Option<String>,
    pub xkb_variant: Option<String>,
    pub xkb_options: Option<String>,

    /// `TERM` value for the child.
    pub term: Option<String>,
    /// Run a custom login process.
    pub login: bool,
    /// argv of the login process; filled by the `login` aftercheck.
    pub argv: Vec<String>,

    pub seat: Option<String>,
    pub font_engine: Option<String>,
}

/// `--help` implies `--exit`.
fn aftercheck_help(
    _opt: &ConfOption<DemoConfig>,
    config: &mut DemoConfig,
    _argv: &[String],
    _idx: usize,
) -> Result<(), String> {
    if config.help {
        config.exit = true;
    }
    Ok(())
}

fn aftercheck_silent(
    _opt: &ConfOption<DemoConfig>,
    config: &mut DemoConfig,
    _argv: &[String],
    _idx: usize,
) -> Result<(), String> {
    if config.silent && (config.debug || config.verbose) {
        return Err("cannot be combined with --debug or --verbose".into());
    }
    Ok(())
}

/// Captures `-- PROGRAM ARGS...` as the login argv.
fn aftercheck_login(
    _opt: &ConfOption<DemoConfig>,
    config: &mut DemoConfig,
    argv: &[String],
    idx: usize,
) -> Result<(), String> {
    let rest = argv.get(idx..).unwrap_or_default();
    if !config.login {
        if !rest.is_empty() {
            return Err("positional arguments are only accepted with --login".into());
        }
        return Ok(());
    }
    config.argv = if rest.is_empty() {
        DEFAULT_LOGIN.iter().map(|s| s.to_string()).collect()
    } else {
        rest.to_vec()
    };
    Ok(())
}

pub fn options() -> Vec<ConfOption<DemoConfig>> {
    vec![
        ConfOption::bool(Some('h'), "help", |c: &mut DemoConfig| &mut c.help, false)
            .with_aftercheck(aftercheck_help),
        ConfOption::bool(None, "exit", |c: &mut DemoConfig| &mut c.exit, false),
        ConfOption::bool(Some('d'), "debug", |c: &mut DemoConfig| &mut c.debug, false),
        ConfOption::bool(Some('v'), "verbose", |c: &mut DemoConfig| &mut c.verbose, false),
        ConfOption::bool(None, "silent", |c: &mut DemoConfig| &mut c.silent, false)
            .with_aftercheck(aftercheck_silent),
        ConfOption::bool(Some('s'), "switchvt", |c: &mut DemoConfig| &mut c.switchvt, false),
        ConfOption::bool(None, "fbdev", |c: &mut DemoConfig| &mut c.use_fbdev, false),
        ConfOption::string(None, "xkb-layout", |c: &mut DemoConfig| &mut c.xkb_layout, Some("us")),
        ConfOption::string(None, "xkb-variant", |c: &mut DemoConfig| &mut c.xkb_variant, None),
        ConfOption::string(None, "xkb-options", |c: &mut DemoConfig| &mut c.xkb_options, None),
        ConfOption::string(Some('t'), "term", |c: &mut DemoConfig| &mut c.term, Some("vt220")),
        ConfOption::bool(Some('l'), "login", |c: &mut DemoConfig| &mut c.login, false)
            .with_aftercheck(aftercheck_login),
        ConfOption::string(None, "seat", |c: &mut DemoConfig| &mut c.seat, Some("seat0")),
        ConfOption::string(
            None,
            "font-engine",
            |c: &mut DemoConfig| &mut c.font_engine,
            Some("pango"),
        ),
    ]
}

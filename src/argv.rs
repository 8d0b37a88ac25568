//! Command-line resolution.
//!
//! Tokens are matched strictly against the option table:
//!
//! - `--name`, `--name=value`, `--name value` (argument-taking types only)
//! - `--no-name` for the negated form
//! - `-c` (a single character) matched by short name, never negated
//! - `--` ends option scanning; everything after it is positional
//!
//! Anything else is an [`UnknownOption`](ConfError::UnknownOption) error.
//! There is no permutation: a bare word before `--` is rejected too.

use crate::error::ConfError;
use crate::option::{ConfOption, find_long};

/// Parse `argv` into `config`, then run every aftercheck.
///
/// `argv[0]` is the program name and is skipped. Returns the index where the
/// positional run begins (`argv.len()` when there is no `--`).
///
/// Scanning stops at the first bad token. Options matched before it keep
/// their values; the bad token itself changes nothing.
pub fn parse_argv<C>(
    options: &mut [ConfOption<C>],
    config: &mut C,
    argv: &[String],
) -> Result<usize, ConfError> {
    let idx = scan_argv(options, config, argv)?;
    run_afterchecks(options, config, argv, idx)?;
    Ok(idx)
}

/// The scanning half of [`parse_argv`], without afterchecks.
pub fn scan_argv<C>(
    options: &mut [ConfOption<C>],
    config: &mut C,
    argv: &[String],
) -> Result<usize, ConfError> {
    let mut i = 1;
    while let Some(token) = argv.get(i) {
        let token = token.as_str();
        i += 1;

        if token == "--" {
            return Ok(i);
        }

        let (opt, on, inline) = if let Some(long) = token.strip_prefix("--") {
            let (name, inline) = match long.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (long, None),
            };
            let (opt, on) = match_long(options, name).ok_or_else(|| unknown(token))?;
            (opt, on, inline)
        } else if let Some(c) = short_flag(token) {
            let opt = options
                .iter_mut()
                .find(|o| o.short_name() == Some(c))
                .ok_or_else(|| unknown(token))?;
            (opt, true, None)
        } else {
            return Err(unknown(token));
        };

        // `--flag=` reads like `--flag` for types that take no argument.
        let inline = inline.filter(|v| !v.is_empty() || opt.conf_type().has_arg());
        let arg = match inline {
            Some(value) => Some(value),
            None if opt.conf_type().has_arg() => {
                let next = argv.get(i).ok_or_else(|| ConfError::MissingArgument {
                    option: opt.long_name().to_string(),
                })?;
                i += 1;
                Some(next.as_str())
            }
            None => None,
        };

        opt.parse(config, on, arg)?;
        tracing::debug!(option = opt.long_name(), on, "set from command line");
    }
    Ok(argv.len())
}

/// Run each option's aftercheck in table order.
pub fn run_afterchecks<C>(
    options: &[ConfOption<C>],
    config: &mut C,
    argv: &[String],
    idx: usize,
) -> Result<(), ConfError> {
    for opt in options {
        let Some(check) = opt.aftercheck() else {
            continue;
        };
        check(opt, config, argv, idx).map_err(|message| ConfError::AftercheckFailed {
            option: opt.long_name().to_string(),
            message,
        })?;
    }
    Ok(())
}

/// Resolve a long name to an option and its polarity.
///
/// An exact match wins over the negated reading, so an option literally
/// named `no-foo` stays reachable.
fn match_long<'a, C>(
    options: &'a mut [ConfOption<C>],
    name: &str,
) -> Option<(&'a mut ConfOption<C>, bool)> {
    if name.is_empty() {
        return None;
    }
    if options.iter().any(|o| o.long_name() == name) {
        return find_long(options, name).map(|opt| (opt, true));
    }
    let bare = name.strip_prefix("no-")?;
    find_long(options, bare).map(|opt| (opt, false))
}

/// `-c` → `Some('c')`. Longer clusters and a lone `-` are not short flags.
fn short_flag(token: &str) -> Option<char> {
    let mut chars = token.strip_prefix('-')?.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

fn unknown(token: &str) -> ConfError {
    ConfError::UnknownOption {
        token: token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{TestConfig, argv, options};

    fn parse(args: &[&str]) -> Result<(TestConfig, usize), ConfError> {
        let mut opts = options();
        let mut config = TestConfig::default();
        let idx = parse_argv(&mut opts, &mut config, &argv(args))?;
        Ok((config, idx))
    }

    #[test]
    fn long_bool_sets_true() {
        let (config, _) = parse(&["--debug"]).unwrap();
        assert!(config.debug);
    }

    #[test]
    fn negated_bool_sets_false() {
        let mut opts = options();
        let mut config = TestConfig {
            switchvt: true,
            ..TestConfig::default()
        };
        parse_argv(&mut opts, &mut config, &argv(&["--no-switchvt"])).unwrap();
        assert!(!config.switchvt);
    }

    #[test]
    fn locked_bool_untouched_by_either_form() {
        let mut opts = options();
        let mut config = TestConfig::default();
        opts[0].lock(); // debug
        parse_argv(&mut opts, &mut config, &argv(&["--debug"])).unwrap();
        assert!(!config.debug);

        config.debug = true;
        parse_argv(&mut opts, &mut config, &argv(&["--no-debug"])).unwrap();
        assert!(config.debug);
    }

    #[test]
    fn short_bool() {
        let (config, _) = parse(&["-d", "-v"]).unwrap();
        assert!(config.debug);
        assert!(config.verbose);
    }

    #[test]
    fn long_string_inline_value() {
        let (config, _) = parse(&["--seat=seat1"]).unwrap();
        assert_eq!(config.seat.as_deref(), Some("seat1"));
    }

    #[test]
    fn long_string_next_token() {
        let (config, _) = parse(&["--seat", "seat1"]).unwrap();
        assert_eq!(config.seat.as_deref(), Some("seat1"));
    }

    #[test]
    fn inline_value_may_contain_equals() {
        let (config, _) = parse(&["--xkb-layout=a=b"]).unwrap();
        assert_eq!(config.xkb_layout.as_deref(), Some("a=b"));
    }

    #[test]
    fn inline_empty_value_is_empty_string() {
        let (config, _) = parse(&["--term="]).unwrap();
        assert_eq!(config.term.as_deref(), Some(""));
    }

    #[test]
    fn inline_empty_value_on_bool_reads_as_bare_flag() {
        let (config, _) = parse(&["--debug=", "--verbose", "--no-verbose="]).unwrap();
        assert!(config.debug);
        assert!(!config.verbose);
    }

    #[test]
    fn inline_empty_bool_matches_file_reading() {
        let mut opts = options();
        let mut from_file = TestConfig::default();
        crate::file::parse_content(
            &mut opts,
            &mut from_file,
            "debug =\n",
            std::path::Path::new("/test/app.conf"),
        );
        let (from_argv, _) = parse(&["--debug="]).unwrap();
        assert_eq!(from_argv.debug, from_file.debug);
    }

    #[test]
    fn short_string_consumes_next_token() {
        let (config, _) = parse(&["-t", "xterm"]).unwrap();
        assert_eq!(config.term.as_deref(), Some("xterm"));
    }

    #[test]
    fn next_token_is_taken_even_if_it_looks_like_an_option() {
        let (config, _) = parse(&["--seat", "--debug"]).unwrap();
        assert_eq!(config.seat.as_deref(), Some("--debug"));
        assert!(!config.debug);
    }

    #[test]
    fn string_reparse_keeps_last() {
        let (config, _) = parse(&["--seat=a", "--seat=b"]).unwrap();
        assert_eq!(config.seat.as_deref(), Some("b"));
    }

    #[test]
    fn missing_argument_at_end() {
        let err = parse(&["--seat"]).unwrap_err();
        assert!(matches!(err, ConfError::MissingArgument { ref option } if option == "seat"));
    }

    #[test]
    fn short_missing_argument_names_long_option() {
        let err = parse(&["-t"]).unwrap_err();
        assert!(matches!(err, ConfError::MissingArgument { ref option } if option == "term"));
    }

    #[test]
    fn bool_with_inline_word() {
        let (config, _) = parse(&["--debug=yes", "--verbose=off"]).unwrap();
        assert!(config.debug);
        assert!(!config.verbose);
    }

    #[test]
    fn bool_with_bad_inline_value() {
        let err = parse(&["--debug=maybe"]).unwrap_err();
        assert!(matches!(err, ConfError::InvalidArgument { .. }));
    }

    #[test]
    fn bool_does_not_consume_next_token() {
        let err = parse(&["--debug", "yes"]).unwrap_err();
        assert!(matches!(err, ConfError::UnknownOption { ref token } if token == "yes"));
    }

    #[test]
    fn unknown_long_option() {
        let err = parse(&["--bogus"]).unwrap_err();
        assert!(matches!(err, ConfError::UnknownOption { ref token } if token == "--bogus"));
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn unknown_option_keeps_earlier_values() {
        let mut opts = options();
        let mut config = TestConfig::default();
        let result = parse_argv(
            &mut opts,
            &mut config,
            &argv(&["--debug", "--seat=seat1", "--bogus", "--verbose"]),
        );
        assert!(result.is_err());
        assert!(config.debug);
        assert_eq!(config.seat.as_deref(), Some("seat1"));
        assert!(!config.verbose);
    }

    #[test]
    fn unknown_short_and_clusters_rejected() {
        for bad in ["-x", "-dv", "-", "---", "--no-", "--=x"] {
            let err = parse(&[bad]).unwrap_err();
            assert!(
                matches!(err, ConfError::UnknownOption { ref token } if token == bad),
                "{bad}"
            );
        }
    }

    #[test]
    fn bare_word_rejected() {
        let err = parse(&["seat0"]).unwrap_err();
        assert!(matches!(err, ConfError::UnknownOption { .. }));
    }

    #[test]
    fn double_dash_stops_scanning() {
        let (config, idx) = parse(&["--debug", "--", "--seat", "foo"]).unwrap();
        assert!(config.debug);
        assert_eq!(config.seat, None);
        assert_eq!(idx, 3);
    }

    #[test]
    fn no_double_dash_positional_index_is_len() {
        let args = argv(&["--debug"]);
        let mut opts = options();
        let mut config = TestConfig::default();
        let idx = parse_argv(&mut opts, &mut config, &args).unwrap();
        assert_eq!(idx, args.len());
    }

    #[test]
    fn empty_argv_is_fine() {
        let mut opts = options();
        let mut config = TestConfig::default();
        assert_eq!(parse_argv(&mut opts, &mut config, &[]).unwrap(), 0);
        assert_eq!(config, TestConfig::default());
    }

    #[test]
    fn aftercheck_sees_positional_run() {
        let (config, _) = parse(&["--login", "--", "/bin/login", "-p"]).unwrap();
        assert!(config.login);
        assert_eq!(config.argv, vec!["/bin/login".to_string(), "-p".to_string()]);
    }

    #[test]
    fn aftercheck_failure_aborts() {
        let err = parse(&["--login"]).unwrap_err();
        match err {
            ConfError::AftercheckFailed { option, message } => {
                assert_eq!(option, "login");
                assert!(message.contains("--login"));
            }
            other => panic!("Expected AftercheckFailed, got: {other:?}"),
        }
    }

    fn record_name(
        opt: &ConfOption<TestConfig>,
        config: &mut TestConfig,
        _argv: &[String],
        _idx: usize,
    ) -> Result<(), String> {
        config.argv.push(opt.long_name().to_string());
        Ok(())
    }

    fn record_name_then_fail(
        opt: &ConfOption<TestConfig>,
        config: &mut TestConfig,
        _argv: &[String],
        _idx: usize,
    ) -> Result<(), String> {
        config.argv.push(opt.long_name().to_string());
        Err("rejected".into())
    }

    #[test]
    fn afterchecks_run_in_table_order() {
        let opts = vec![
            ConfOption::bool(None, "silent", |c: &mut TestConfig| &mut c.silent, false)
                .with_aftercheck(record_name),
            ConfOption::bool(None, "debug", |c: &mut TestConfig| &mut c.debug, false),
            ConfOption::bool(None, "verbose", |c: &mut TestConfig| &mut c.verbose, false)
                .with_aftercheck(record_name),
            ConfOption::bool(None, "login", |c: &mut TestConfig| &mut c.login, false)
                .with_aftercheck(record_name),
        ];
        let mut config = TestConfig::default();
        run_afterchecks(&opts, &mut config, &argv(&[]), 1).unwrap();
        assert_eq!(config.argv, vec!["silent", "verbose", "login"]);
    }

    #[test]
    fn afterchecks_stop_at_first_failure() {
        let opts = vec![
            ConfOption::bool(None, "debug", |c: &mut TestConfig| &mut c.debug, false)
                .with_aftercheck(record_name),
            ConfOption::bool(None, "verbose", |c: &mut TestConfig| &mut c.verbose, false)
                .with_aftercheck(record_name_then_fail),
            ConfOption::bool(None, "silent", |c: &mut TestConfig| &mut c.silent, false)
                .with_aftercheck(record_name),
        ];
        let mut config = TestConfig::default();
        let err = run_afterchecks(&opts, &mut config, &argv(&[]), 1).unwrap_err();
        assert!(matches!(err, ConfError::AftercheckFailed { ref option, .. } if option == "verbose"));
        assert_eq!(config.argv, vec!["debug", "verbose"]);
    }

    #[test]
    fn exact_long_name_beats_negated_reading() {
        let mut opts = vec![
            ConfOption::bool(None, "wait", |c: &mut TestConfig| &mut c.debug, true),
            ConfOption::bool(None, "no-wait", |c: &mut TestConfig| &mut c.verbose, false),
        ];
        let mut config = TestConfig {
            debug: true,
            ..TestConfig::default()
        };
        parse_argv(&mut opts, &mut config, &argv(&["--no-wait"])).unwrap();
        assert!(config.verbose);
        assert!(config.debug);
        assert!(opts[1].is_done());
        assert!(!opts[0].is_done());
    }

    #[test]
    fn negated_string_option_takes_value_like_positive_form() {
        let (config, _) = parse(&["--no-seat", "seat1", "--no-term=xterm"]).unwrap();
        assert_eq!(config.seat.as_deref(), Some("seat1"));
        assert_eq!(config.term.as_deref(), Some("xterm"));
    }

    #[test]
    fn scan_alone_skips_afterchecks() {
        let mut opts = options();
        let mut config = TestConfig::default();
        scan_argv(&mut opts, &mut config, &argv(&["--login"])).unwrap();
        assert!(config.login);
        assert!(config.argv.is_empty());
    }

    #[test]
    fn parse_marks_options_done() {
        let mut opts = options();
        let mut config = TestConfig::default();
        parse_argv(&mut opts, &mut config, &argv(&["-d"])).unwrap();
        assert!(opts[0].is_done());
        assert!(!opts[0].is_locked());
        assert!(!opts[1].is_done());
    }
}

#[cfg(test)]
pub mod test {
    use crate::option::ConfOption;

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct TestConfig {
        pub debug: bool,
        pub verbose: bool,
        pub silent: bool,
        pub switchvt: bool,
        pub login: bool,
        pub seat: Option<String>,
        pub term: Option<String>,
        pub xkb_layout: Option<String>,
        /// Filled by the `login` aftercheck from the positional run.
        pub argv: Vec<String>,
    }

    /// Copies everything after `--` into `argv` when `--login` is given.
    fn aftercheck_login(
        opt: &ConfOption<TestConfig>,
        config: &mut TestConfig,
        argv: &[String],
        idx: usize,
    ) -> Result<(), String> {
        if !config.login {
            return Ok(());
        }
        let rest = argv.get(idx..).unwrap_or_default();
        if rest.is_empty() {
            return Err(format!("--{} needs a program after `--`", opt.long_name()));
        }
        config.argv = rest.to_vec();
        Ok(())
    }

    pub fn options() -> Vec<ConfOption<TestConfig>> {
        vec![
            ConfOption::bool(Some('d'), "debug", |c: &mut TestConfig| &mut c.debug, false),
            ConfOption::bool(Some('v'), "verbose", |c: &mut TestConfig| &mut c.verbose, false),
            ConfOption::bool(None, "silent", |c: &mut TestConfig| &mut c.silent, false),
            ConfOption::bool(Some('s'), "switchvt", |c: &mut TestConfig| &mut c.switchvt, true),
            ConfOption::bool(Some('l'), "login", |c: &mut TestConfig| &mut c.login, false)
                .with_aftercheck(aftercheck_login),
            ConfOption::string(None, "seat", |c: &mut TestConfig| &mut c.seat, Some("seat0")),
            ConfOption::string(Some('t'), "term", |c: &mut TestConfig| &mut c.term, Some("vt220")),
            ConfOption::string(None, "xkb-layout", |c: &mut TestConfig| &mut c.xkb_layout, None),
        ]
    }

    /// Build an argv vector, program name first.
    pub fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("test")
            .chain(args.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn options_have_unique_names() {
        let opts = options();
        for (i, a) in opts.iter().enumerate() {
            for b in &opts[i + 1..] {
                assert_ne!(a.long_name(), b.long_name());
                if a.short_name().is_some() {
                    assert_ne!(a.short_name(), b.short_name());
                }
            }
        }
    }
}

//! # confbind demo application
//!
//! A sample startup routine that showcases how an application wires an
//! option table through [confbind](https://docs.rs/confbind). This is **not**
//! a real app; it exists to demonstrate and manually verify confbind's
//! behavior.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example confbind_demo -- --debug --seat seat1
//! RUST_LOG=confbind=debug cargo run --example confbind_demo
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature                  | How to exercise it                                                   |
//! |--------------------------|----------------------------------------------------------------------|
//! | Defaults                 | `cargo run --example confbind_demo`                                  |
//! | Config file (cwd)        | Create `confbind-demo.conf` in cwd with `seat = seat1`               |
//! | Config file (home)       | Place the file under `~/.confbind-demo/`                             |
//! | File locks the value     | File says `seat = seat1`, then pass `--seat seat2`: stays `seat1`    |
//! | Command line wins        | Add `--args-first` as the first argument                             |
//! | Negation                 | `cargo run --example confbind_demo -- --no-switchvt`                 |
//! | Positional capture       | `cargo run --example confbind_demo -- --login -- /bin/sh -l`         |
//! | Aftercheck failure       | `cargo run --example confbind_demo -- --silent --debug`              |
//! | Unknown option           | `cargo run --example confbind_demo -- --bogus` (exit status 64)      |
//! | Help                     | `cargo run --example confbind_demo -- --help`                        |
//! | Skipped config lines     | Put `bogus = 1` in the file and run with `RUST_LOG=confbind=warn`    |

mod config;

use confbind::{ConfOption, ConfType, Confbind, Precedence, SearchPath, free_all};
use tracing_subscriber::EnvFilter;

use config::DemoConfig;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("confbind=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // `--args-first` is a demo-only switch, peeled off before the real table sees argv.
    let mut args: Vec<String> = std::env::args().collect();
    let precedence = if args.get(1).map(String::as_str) == Some("--args-first") {
        args.remove(1);
        Precedence::ArgsFirst
    } else {
        Precedence::FilesFirst
    };

    let mut options = config::options();
    let result = Confbind::builder::<DemoConfig>()
        .app_name("confbind-demo")
        .search_paths(vec![
            SearchPath::Platform,
            SearchPath::Home(".confbind-demo"),
            SearchPath::Cwd,
        ])
        .precedence(precedence)
        .args(args)
        .load(&mut options);

    let mut conf = match result {
        Ok(conf) => conf,
        Err(e) => {
            eprintln!("confbind-demo: {e}");
            std::process::exit(e.exit_code());
        }
    };

    if conf.help {
        print_usage(&options);
    }
    if !conf.exit {
        print_config(&conf);
    }

    free_all(&options, &mut conf);
}

fn print_usage(options: &[ConfOption<DemoConfig>]) {
    println!("Usage: confbind-demo [OPTIONS] [-- LOGIN-PROGRAM ARGS...]");
    println!();
    for opt in options {
        let short = opt
            .short_name()
            .map(|c| format!("-{c}, "))
            .unwrap_or_else(|| "    ".to_string());
        let long = match opt.conf_type() {
            ConfType::Bool => format!("--[no-]{}", opt.long_name()),
            ConfType::String => format!("--{} <VALUE>", opt.long_name()),
        };
        println!("  {short}{long}");
    }
}

fn print_config(conf: &DemoConfig) {
    let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "<unset>".to_string());
    let entries = [
        ("debug", conf.debug.to_string()),
        ("verbose", conf.verbose.to_string()),
        ("silent", conf.silent.to_string()),
        ("switchvt", conf.switchvt.to_string()),
        ("fbdev", conf.use_fbdev.to_string()),
        ("xkb-layout", show(&conf.xkb_layout)),
        ("xkb-variant", show(&conf.xkb_variant)),
        ("xkb-options", show(&conf.xkb_options)),
        ("term", show(&conf.term)),
        ("login", conf.login.to_string()),
        ("argv", conf.argv.join(" ")),
        ("seat", show(&conf.seat)),
        ("font-engine", show(&conf.font_engine)),
    ];

    let max_key_len = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in &entries {
        println!("{key:<max_key_len$}  {value}");
    }
}

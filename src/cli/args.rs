use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::ffi::OsString;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for gotouch.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Go files to create; parent directories are created as needed.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Skip creating `_test.go` files.
    #[arg(
        long = "skip-testing",
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub skip_testing: bool,

    /// Report what would be created without touching the filesystem.
    #[arg(short = 'n', long = "dry-run", visible_alias = "noop")]
    pub dry_run: bool,

    /// Report each directory and file (`-v`); more for debug output (`-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Long flags that are also accepted with a single dash, as Go's `flag` package does.
const SINGLE_DASH_LONG_FLAGS: &[&str] = &["skip-testing"];

/// Rewrites `-skip-testing` and `-skip-testing=<bool>` to their double-dash form.
///
/// Arguments after a bare `--` are left untouched.
pub fn expand_single_dash_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut positional_only = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if positional_only {
                return arg;
            }
            if arg == "--" {
                positional_only = true;
                return arg;
            }

            let Some(text) = arg.to_str() else { return arg };
            let Some(rest) = text.strip_prefix('-') else { return arg };
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if SINGLE_DASH_LONG_FLAGS.contains(&name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse_from(expand_single_dash_flags(std::env::args_os())).unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

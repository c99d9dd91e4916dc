//! CLI argument parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{error::ErrorKind, CommandFactory, Parser};

use crate::{MinimizerError, MinimizerResult};

/// Extracts the custom configuration of a Keycloak realm export.
///
/// Built-in clients and roles are dropped, client redirect URIs, web origins
/// and post-logout redirects are opened to `*`, and the realm is enabled with
/// `sslRequired = NONE`.
#[derive(Debug, Parser)]
#[command(name = "kc-realm-minimizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Full realm export (from `kc.sh export`).
    pub input: PathBuf,

    /// File to write the minimized realm to.
    pub output: PathBuf,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Log filter (overrides config and --verbose).
    #[arg(long, env = "KC_MINIMIZER_LOG")]
    pub log_level: Option<String>,

    /// Settings file (TOML).
    #[arg(long, env = "KC_MINIMIZER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored diagnostics.
    #[arg(long)]
    pub no_color: bool,
}

/// Outcome of reading the command line.
#[derive(Debug)]
pub enum Invocation {
    /// Arguments are valid.
    Run(Cli),
    /// `--help` or `--version` was requested.
    Info(clap::Error),
}

impl Cli {
    /// Parses `args` (including the program name).
    ///
    /// Anything but exactly two paths, or an unknown option, is a
    /// [`MinimizerError::Usage`] carrying the usage line.
    pub fn parse_args<I, T>(args: I) -> MinimizerResult<Invocation>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(Invocation::Run(cli)),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Ok(Invocation::Info(e))
            }
            Err(_) => Err(MinimizerError::Usage(Self::usage())),
        }
    }

    /// One-line usage.
    #[must_use]
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_paths_run() {
        let Ok(Invocation::Run(cli)) =
            Cli::parse_args(["kc-realm-minimizer", "full.json", "min.json"])
        else {
            panic!("expected a runnable invocation");
        };
        assert_eq!(cli.input, PathBuf::from("full.json"));
        assert_eq!(cli.output, PathBuf::from("min.json"));
        assert!(!cli.verbose);
    }

    #[test]
    fn flags_do_not_count_as_paths() {
        let Ok(Invocation::Run(cli)) =
            Cli::parse_args(["kc-realm-minimizer", "-v", "full.json", "--no-color", "min.json"])
        else {
            panic!("expected a runnable invocation");
        };
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn wrong_path_count_is_usage() {
        for args in [
            vec!["kc-realm-minimizer"],
            vec!["kc-realm-minimizer", "full.json"],
            vec!["kc-realm-minimizer", "a.json", "b.json", "c.json"],
        ] {
            assert!(
                matches!(Cli::parse_args(args.clone()), Err(MinimizerError::Usage(_))),
                "{args:?} should be a usage error"
            );
        }
    }

    #[test]
    fn help_is_informational() {
        assert!(matches!(
            Cli::parse_args(["kc-realm-minimizer", "--help"]),
            Ok(Invocation::Info(_))
        ));
    }

    #[test]
    fn usage_names_both_paths() {
        let usage = Cli::usage();
        assert!(usage.contains("<INPUT>"));
        assert!(usage.contains("<OUTPUT>"));
    }
}

//! # Keycloak Realm Minimizer
//!
//! Command-line entry point.

#![forbid(unsafe_code)]

use kc_realm_minimizer::{
    cli::{Cli, Invocation},
    commands::run_minimize,
    config::CliConfig,
    logging,
    output::{error, set_color, success, summary, usage, warning},
    MinimizerError, MinimizerResult,
};

fn main() {
    let cli = match Cli::parse_args(std::env::args_os()) {
        Ok(Invocation::Run(cli)) => cli,
        Ok(Invocation::Info(info)) => info.exit(),
        Err(MinimizerError::Usage(line)) => {
            usage(&line);
            std::process::exit(1);
        }
        Err(e) => {
            error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli) {
        error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> MinimizerResult<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    set_color(config.color && !cli.no_color);
    logging::init(&config.effective_log_filter(cli.log_level.as_deref(), cli.verbose))?;

    let report = run_minimize(&cli.input, &cli.output)?;
    summary(&report);

    if report.clients.is_empty() {
        warning("no custom clients found; is this the right realm export?");
    } else {
        success(&format!("minimized realm written to '{}'", report.output_path.display()));
    }

    Ok(())
}

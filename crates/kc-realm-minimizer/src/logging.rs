//! Tracing setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{MinimizerError, MinimizerResult};

/// Installs the global subscriber, logging to stderr so stdout carries only
/// the run summary.
pub fn init(filter: &str) -> MinimizerResult<()> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|e| MinimizerError::Config(format!("invalid log filter '{filter}': {e}")))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| MinimizerError::Config(format!("failed to initialize logging: {e}")))
}

//! # kc-realm-minimizer
//!
//! Reduces a full Keycloak realm export to the configuration worth
//! committing and re-importing elsewhere:
//! - built-in clients and realm roles are dropped (Keycloak recreates them)
//! - client redirect URIs, web origins and post-logout redirects become `*`
//! - the realm is enabled with `sslRequired = NONE`
//! - users are carried through as exported

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;
pub mod transform;

pub use cli::Cli;
pub use commands::{run_minimize, Summary};
pub use config::CliConfig;
pub use error::{MinimizerError, MinimizerResult};
pub use model::RealmDocument;
pub use transform::{minimize, MinimalRealm};

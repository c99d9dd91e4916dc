//! Command implementations.

pub mod minimize;

pub use minimize::{run_minimize, Summary};

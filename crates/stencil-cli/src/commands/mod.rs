//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod coordinate;
pub mod engine;
pub mod init;

//! Command handlers. Each module translates parsed arguments into calls on
//! the core service or the configuration layer.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;

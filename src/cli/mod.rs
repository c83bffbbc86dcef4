pub mod commands;

pub use commands::{parse_arguments, Cli, Commands};

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, Conversion};
pub use commands::run;

mod commands;

pub use commands::{Action, Cli};

//! CLI module - argument parsing, prompting and report output

pub mod args;
pub mod logging;
pub mod prompt;
pub mod report;
pub mod run;

pub use args::{Cli, GlobalOpts, OutputFormat};
pub use run::run;

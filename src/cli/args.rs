//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, ValueEnum};

use crate::core::Dimensions;

const EXAMPLES: &str = "\
Examples:
  printtolcalc
    Interactive mode, prompts for expected and measured dimensions.

  printtolcalc --expected 20 20 20 --measured 19.99 19.95 20.10
    Command-line mode, pass dimensions directly.

All dimensions must be in millimeters (mm).";

#[derive(Parser, Debug)]
#[command(name = "printtolcalc")]
#[command(author, version, about = "Calculate 3D print dimensional tolerance")]
#[command(long_about = "Compare the expected dimensions of a printed part against calliper measurements and report the signed and absolute percentage deviation on each axis.")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Expected dimensions in mm (e.g. --expected 20 20 20)
    #[arg(
        long,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        allow_negative_numbers = true,
        action = ArgAction::Set
    )]
    pub expected: Option<Vec<f64>>,

    /// Measured dimensions in mm (e.g. --measured 19.99 19.95 20.10)
    #[arg(
        long,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        allow_negative_numbers = true,
        action = ArgAction::Set
    )]
    pub measured: Option<Vec<f64>>,

    #[command(flatten)]
    pub global: GlobalOpts,
}

impl Cli {
    /// Expected dimensions given on the command line, if any
    pub fn expected_dimensions(&self) -> Option<Dimensions> {
        self.expected.as_deref().and_then(to_dimensions)
    }

    /// Measured dimensions given on the command line, if any
    pub fn measured_dimensions(&self) -> Option<Dimensions> {
        self.measured.as_deref().and_then(to_dimensions)
    }
}

fn to_dimensions(values: &[f64]) -> Option<Dimensions> {
    <[f64; 3]>::try_from(values).ok().map(Dimensions::from)
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', env = "PRINTTOL_FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Suppress precision advisories and other non-essential output
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tolerance report
    #[default]
    Text,
    /// JSON format (for programming)
    Json,
}

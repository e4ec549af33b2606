//! Top-level command flow: gather inputs, compute, print

use miette::Result;

use crate::cli::args::Cli;
use crate::cli::{prompt, report};
use crate::core::{compute, Dimensions, Role};

pub fn run(cli: Cli) -> Result<()> {
    let expected = resolve(cli.expected_dimensions(), Role::Expected)?;
    let measured = resolve(cli.measured_dimensions(), Role::Measured)?;

    let tolerances = compute(expected, measured)?;

    println!("{}", report::render(&tolerances, cli.global.format)?);
    Ok(())
}

fn resolve(given: Option<Dimensions>, role: Role) -> Result<Dimensions> {
    match given {
        Some(dims) => {
            tracing::debug!(%role, "using dimensions from command line");
            Ok(dims)
        }
        None => prompt::prompt_dimensions(role),
    }
}

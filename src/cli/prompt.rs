//! Prompting for dimensions that were not given on the command line
//!
//! On a terminal the values are collected with dialoguer. When stdin is
//! piped, one value per line is read instead so the tool can be scripted.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use miette::{Diagnostic, IntoDiagnostic, Result};
use std::io::{self, BufRead, IsTerminal};
use thiserror::Error;

use crate::core::{Axis, Dimensions, Role};

/// Failure while reading a dimension from non-interactive input
#[derive(Debug, Error, Diagnostic)]
pub enum InputError {
    #[error("could not parse {role} {axis} dimension from '{input}'")]
    #[diagnostic(
        code(printtol::input::parse),
        help("enter a number in millimeters, e.g. 20 or 19.95")
    )]
    Parse {
        axis: Axis,
        role: Role,
        input: String,
    },

    #[error("input ended before the {role} {axis} dimension was entered")]
    #[diagnostic(code(printtol::input::eof))]
    UnexpectedEof { axis: Axis, role: Role },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Ask the user for an X/Y/Z triple
pub fn prompt_dimensions(role: Role) -> Result<Dimensions> {
    eprintln!();
    eprintln!("{}", style(format!("Enter {role} dimensions (in mm):")).bold());

    let stdin = io::stdin();
    if stdin.is_terminal() {
        tracing::debug!(%role, "prompting interactively");
        prompt_interactive()
    } else {
        tracing::debug!(%role, "reading dimensions from piped stdin");
        read_dimensions(&mut stdin.lock(), role).map_err(Into::into)
    }
}

fn prompt_interactive() -> Result<Dimensions> {
    let theme = ColorfulTheme::default();
    let mut values = [0.0; 3];
    for axis in Axis::ALL {
        values[axis.index()] = Input::<f64>::with_theme(&theme)
            .with_prompt(format!(" {axis}"))
            .interact_text()
            .into_diagnostic()?;
    }
    Ok(Dimensions::from(values))
}

/// Read one value per line for X, Y and Z. Blank lines are skipped.
pub fn read_dimensions<R: BufRead>(reader: &mut R, role: Role) -> Result<Dimensions, InputError> {
    let mut values = [0.0; 3];
    let mut line = String::new();

    for axis in Axis::ALL {
        let input = loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Err(InputError::UnexpectedEof { axis, role });
            }
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                break trimmed.to_string();
            }
        };

        values[axis.index()] = input.parse().map_err(|_| InputError::Parse {
            axis,
            role,
            input: input.clone(),
        })?;
    }

    Ok(Dimensions::from(values))
}

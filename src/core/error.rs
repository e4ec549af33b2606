//! Validation errors for dimension inputs

use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

use crate::core::axis::{Axis, Role};

/// Why a dimension value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    NaN,
    Infinite,
    Zero,
    Negative,
}

impl InvalidReason {
    /// Classify a value, returning `None` when it is a usable length
    pub fn classify(value: f64) -> Option<Self> {
        if value.is_nan() {
            Some(InvalidReason::NaN)
        } else if value.is_infinite() {
            Some(InvalidReason::Infinite)
        } else if value == 0.0 {
            Some(InvalidReason::Zero)
        } else if value < 0.0 {
            Some(InvalidReason::Negative)
        } else {
            None
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvalidReason::NaN => "cannot be NaN",
            InvalidReason::Infinite => "cannot be infinite",
            InvalidReason::Zero => "cannot be zero",
            InvalidReason::Negative => "cannot be negative",
        };
        f.write_str(s)
    }
}

/// A dimension that is not a finite, positive length
#[derive(Debug, Clone, Error, Diagnostic, PartialEq)]
#[error("{role} value for {axis}-axis {reason} (got {value})")]
#[diagnostic(
    code(printtol::dimension::invalid_value),
    help("dimensions must be finite lengths in millimeters greater than zero")
)]
pub struct InvalidValue {
    pub axis: Axis,
    pub role: Role,
    pub reason: InvalidReason,
    pub value: f64,
}

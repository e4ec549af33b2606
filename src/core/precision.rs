//! Decimal precision advisories
//!
//! Measurements with more than two decimal places are beyond what calipers
//! report reliably, and the percentage derived from them may carry
//! floating-point noise. These are flagged but never rejected.

use serde::Serialize;

use crate::core::axis::{Axis, Role};

/// Fractional digits allowed before an advisory is raised
pub const MAX_DECIMALS: usize = 2;

/// Digits used when rendering a value before counting its decimals
const RENDER_DIGITS: usize = 10;

/// A value with more decimal places than [`MAX_DECIMALS`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecisionWarning {
    pub axis: Axis,
    pub role: Role,
    pub value: f64,
    pub decimals: usize,
}

/// Count fractional digits after rendering to 10 places and trimming zeros
pub fn decimal_places(value: f64) -> usize {
    let rendered = format!("{:.*}", RENDER_DIGITS, value);
    match rendered.split_once('.') {
        Some((_, frac)) => frac.trim_end_matches('0').len(),
        None => 0,
    }
}

/// Check a single value, returning an advisory if it is too precise
pub fn check(axis: Axis, role: Role, value: f64) -> Option<PrecisionWarning> {
    let decimals = decimal_places(value);
    (decimals > MAX_DECIMALS).then_some(PrecisionWarning {
        axis,
        role,
        value,
        decimals,
    })
}

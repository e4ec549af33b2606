//! Per-axis tolerance calculation

use serde::Serialize;

use crate::core::axis::{Axis, Dimensions, Role};
use crate::core::error::{InvalidReason, InvalidValue};
use crate::core::precision::{self, PrecisionWarning};

/// Deviation of one axis from its expected length
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToleranceResult {
    pub axis: Axis,
    /// `(measured - expected) / expected * 100`
    pub signed_percent: f64,
    /// Always `signed_percent.abs()`
    pub absolute_percent: f64,
}

impl ToleranceResult {
    fn between(axis: Axis, expected: f64, measured: f64) -> Self {
        let signed_percent = ((measured - expected) / expected) * 100.0;
        Self {
            axis,
            signed_percent,
            absolute_percent: signed_percent.abs(),
        }
    }
}

/// Complete result of comparing a print against its design dimensions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToleranceReport {
    pub expected: Dimensions,
    pub measured: Dimensions,
    /// One entry per axis, in X, Y, Z order
    pub results: [ToleranceResult; 3],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<PrecisionWarning>,
}

impl ToleranceReport {
    pub fn get(&self, axis: Axis) -> &ToleranceResult {
        &self.results[axis.index()]
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Compute signed and absolute tolerance for each axis.
///
/// Every value is validated before any ratio is taken. The expected triple is
/// checked before the measured one, and the first offending value aborts the
/// whole computation. Values with more than two decimals are logged as
/// warnings and collected on the report.
pub fn compute(expected: Dimensions, measured: Dimensions) -> Result<ToleranceReport, InvalidValue> {
    validate(&expected, Role::Expected)?;
    validate(&measured, Role::Measured)?;

    let mut warnings = Vec::new();
    for (dims, role) in [(&expected, Role::Expected), (&measured, Role::Measured)] {
        for (axis, value) in dims.iter() {
            if let Some(warning) = precision::check(axis, role, value) {
                tracing::warn!(
                    axis = %axis,
                    role = %role,
                    value,
                    decimals = warning.decimals,
                    "excess decimal precision may affect percentage accuracy"
                );
                warnings.push(warning);
            }
        }
    }

    let results = Axis::ALL.map(|axis| ToleranceResult::between(axis, expected.get(axis), measured.get(axis)));

    for r in &results {
        tracing::debug!(axis = %r.axis, signed = r.signed_percent, absolute = r.absolute_percent, "computed tolerance");
    }

    Ok(ToleranceReport {
        expected,
        measured,
        results,
        warnings,
    })
}

fn validate(dims: &Dimensions, role: Role) -> Result<(), InvalidValue> {
    for (axis, value) in dims.iter() {
        if let Some(reason) = InvalidReason::classify(value) {
            return Err(InvalidValue {
                axis,
                role,
                reason,
                value,
            });
        }
    }
    Ok(())
}

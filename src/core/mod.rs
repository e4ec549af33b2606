//! Core module - dimension types and the tolerance calculation

pub mod axis;
pub mod error;
pub mod precision;
pub mod tolerance;

pub use axis::{Axis, Dimensions, Role};
pub use error::{InvalidReason, InvalidValue};
pub use precision::PrecisionWarning;
pub use tolerance::{compute, ToleranceReport, ToleranceResult};

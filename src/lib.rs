//! PrintTolCalc: dimensional tolerance for 3D printed parts
//!
//! Compares expected and measured X/Y/Z dimensions and reports the signed
//! and absolute percentage deviation on each axis.

pub mod cli;
pub mod core;

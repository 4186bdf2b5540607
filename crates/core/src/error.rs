//! Error types for the bulk parameter derivation
//!
//! Every failure names the offending input so that the caller can tell which
//! field of [`crate::UrbanCanopyParams`] violated which constraint. There is no
//! partial result: an error means nothing was computed.

use thiserror::Error;

/// An input lies outside the physically valid (or validated) range.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("parameter `{parameter}` = {value} is out of range: {constraint}")]
pub struct DomainError {
    /// Name of the offending input (e.g. `"height_to_width"`)
    pub parameter: &'static str,
    /// The rejected value
    pub value: f64,
    /// Human-readable description of the violated constraint
    pub constraint: &'static str,
}

impl DomainError {
    pub(crate) fn new(parameter: &'static str, value: f64, constraint: &'static str) -> Self {
        Self {
            parameter,
            value,
            constraint,
        }
    }
}

/// A per-layer input does not line up with the depth grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parameter `{parameter}` has {actual} layers, expected {expected}")]
pub struct ShapeError {
    /// Name of the offending input (e.g. `"soil_conductivity"`)
    pub parameter: &'static str,
    /// Number of layers required by `depths`
    pub expected: usize,
    /// Number of layers supplied
    pub actual: usize,
}

/// Any failure of [`crate::derive`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SuryError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl SuryError {
    /// Name of the input that caused the failure
    pub fn parameter(&self) -> &'static str {
        match self {
            SuryError::Domain(e) => e.parameter,
            SuryError::Shape(e) => e.parameter,
        }
    }
}

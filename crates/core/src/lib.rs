//! SURY Bulk Parameter Library
//!
//! Derives the bulk (effective) surface parameters a land-surface scheme needs
//! to represent an urban canopy, following the Semi-Empirical URban canopY
//! parametrization (SURY) of Wouters et al. (2016):
//! - bulk albedo and emissivity from canyon radiation trapping and snow cover
//! - vertical profiles of bulk heat conductivity and heat capacity
//! - aerodynamic roughness length z0 and kB⁻¹ = ln(z0/z0H)
//!
//! The derivation is a pure function of its inputs. Evaluate one cell with
//! [`derive`] or a whole grid in parallel with [`derive_batch`].

// Core types and utilities
pub mod core_types;
pub mod error;
pub mod physics;
pub mod sury;

pub use core_types::{
    BulkParameters, DomainPolicy, HeatCapacity, LayerProperty, Meters, MetersPerSecond,
    ThermalConductivity, UrbanCanopyParams, DEFAULT_DEPTHS,
};
pub use error::{DomainError, ShapeError, SuryError};
pub use sury::{
    derive, derive_batch, derive_batch_with_policy, derive_with_policy, validate,
    MAX_VALIDATED_HEIGHT_TO_WIDTH,
};

//! Core types: physical units, input parameters and derived bulk parameters

pub mod bulk;
pub mod params;
pub mod units;

pub use bulk::BulkParameters;
pub use params::{DomainPolicy, LayerProperty, UrbanCanopyParams, DEFAULT_DEPTHS};
pub use units::*;

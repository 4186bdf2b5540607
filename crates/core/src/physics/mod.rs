//! SURY physics: radiation, ground heat storage and surface-layer turbulence

pub(crate) mod radiation;
pub(crate) mod roughness;
pub(crate) mod thermal;

pub(crate) use radiation::{bulk_albedo, bulk_emissivity, bulk_radiative_factor, snow_blend};
pub(crate) use roughness::{kb_inverse, roughness_length, thermal_roughness_length};
pub(crate) use thermal::{bulk_profile, surface_area_index};

// Empirical constants are public so callers can document their configuration
pub use radiation::CANYON_TRAPPING_COEFFICIENT;
pub use roughness::{KINEMATIC_VISCOSITY_AIR, ROUGHNESS_HEIGHT_RATIO};

/// Public re-exports of the individual closures for validation testing
pub mod sury_validation {
    pub use super::radiation::{bulk_radiative_factor, canyon_factor};
    pub use super::roughness::{kb_inverse, roughness_length, roughness_reynolds_number};
    pub use super::thermal::{soil_weight, surface_area_index};
}

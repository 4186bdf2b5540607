//! Bulk radiative properties of an urban canyon
//!
//! Radiation entering a street canyon is partly trapped by multiple
//! reflections between the walls and the street. SURY captures this with an
//! exponential canyon factor in the height-to-width ratio, so that a canyon
//! behaves as a darker (lower albedo) and blacker (higher emissivity) flat
//! surface than its substrate.
//!
//! # Scientific References
//! - Wouters, H., et al. (2016). "The efficient urban canopy dependency
//!   parametrization (SURY) v1.0 for atmospheric modelling: description and
//!   application with the COSMO-CLM model for a Belgian summer"
//!   Geoscientific Model Development, 9, 3027-3054

/// Exponential decay rate of the canyon radiative factor with height-to-width ratio
pub const CANYON_TRAPPING_COEFFICIENT: f64 = 0.6;

/// Fraction of the substrate's radiative exchange retained by a canyon
///
/// ψ_canyon = exp(-0.6 × H/W)
///
/// # Arguments
/// * `height_to_width` - Canyon aspect ratio H/W
///
/// # Returns
/// Canyon factor (1 for a flat surface, tending to 0 for deep canyons)
pub fn canyon_factor(height_to_width: f64) -> f64 {
    (-CANYON_TRAPPING_COEFFICIENT * height_to_width).exp()
}

/// Area-weighted radiative factor of roofs (ψ = 1) and canyons
///
/// ψ_bulk = f_roof + (1 - f_roof) × ψ_canyon
pub fn bulk_radiative_factor(roof_fraction: f64, height_to_width: f64) -> f64 {
    roof_fraction + (1.0 - roof_fraction) * canyon_factor(height_to_width)
}

/// Blend a snow-free and a snow-covered optical property by snow fraction
#[inline]
pub fn snow_blend(snow_free: f64, snow: f64, snow_fraction: f64) -> f64 {
    (1.0 - snow_fraction) * snow_free + snow_fraction * snow
}

/// Bulk albedo: reflected radiation scales with the retained fraction
///
/// α_bulk = ψ_bulk × α
pub fn bulk_albedo(albedo: f64, radiative_factor: f64) -> f64 {
    albedo * radiative_factor
}

/// Bulk emissivity: the canyon closes the gap to a black body
///
/// ε_bulk = 1 - ψ_bulk × (1 - ε)
pub fn bulk_emissivity(emissivity: f64, radiative_factor: f64) -> f64 {
    1.0 - radiative_factor * (1.0 - emissivity)
}

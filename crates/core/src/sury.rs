//! Bulk parameter derivation (SURY)
//!
//! Maps the urban-canopy inputs onto the bulk parameters of a land-surface
//! scheme in four closed-form steps:
//! 1. radiation: canyon trapping plus snow blending of albedo and emissivity
//! 2. ground heat storage: SAI-scaled substrate relaxing into the soil with depth
//! 3. momentum roughness from building height
//! 4. kB⁻¹ from the roughness Reynolds number
//!
//! Every call validates its inputs first and either returns a fully populated
//! [`BulkParameters`] or the first violated constraint. Nothing is cached.
//!
//! # Usage
//! ```
//! use sury_core::{derive, UrbanCanopyParams};
//!
//! let bulk = derive(&UrbanCanopyParams::default()).unwrap();
//! assert!(bulk.albedo < 0.101); // canyons trap shortwave radiation
//! assert_eq!(bulk.conductivity.len(), 11);
//! ```

use std::ops::Deref;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::core_types::bulk::BulkParameters;
use crate::core_types::params::{DomainPolicy, LayerProperty, UrbanCanopyParams};
use crate::error::{DomainError, ShapeError, SuryError};
use crate::physics::{
    bulk_albedo, bulk_emissivity, bulk_profile, bulk_radiative_factor, kb_inverse,
    roughness_length, snow_blend, surface_area_index, thermal_roughness_length,
};

/// Upper end of the canyon aspect ratios the parametrization was fitted on
pub const MAX_VALIDATED_HEIGHT_TO_WIDTH: f64 = 2.0;

fn check_unit_interval(parameter: &'static str, value: f64) -> Result<(), DomainError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(DomainError::new(parameter, value, "must lie in [0, 1]"))
    }
}

fn check_positive(parameter: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DomainError::new(parameter, value, "must be finite and > 0"))
    }
}

fn check_layered<T>(
    parameter: &'static str,
    property: &LayerProperty<T>,
    layers: usize,
) -> Result<(), SuryError>
where
    T: Copy + Deref<Target = f64>,
{
    property.check_layers(parameter, layers)?;
    for value in property.values() {
        check_positive(parameter, **value)?;
    }
    Ok(())
}

fn check_height_to_width(value: f64, policy: DomainPolicy) -> Result<(), DomainError> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::new(
            "height_to_width",
            value,
            "must be finite and >= 0",
        ));
    }
    if value > MAX_VALIDATED_HEIGHT_TO_WIDTH {
        match policy {
            DomainPolicy::Strict => {
                return Err(DomainError::new(
                    "height_to_width",
                    value,
                    "must lie in the validated range [0, 2]",
                ));
            }
            DomainPolicy::Warn => {
                warn!(
                    "Canyon height-to-width ratio {} exceeds the validated range [0, {}], extrapolating",
                    value, MAX_VALIDATED_HEIGHT_TO_WIDTH
                );
            }
        }
    }
    Ok(())
}

fn check_depths(params: &UrbanCanopyParams) -> Result<(), SuryError> {
    if params.depths.is_empty() {
        return Err(ShapeError {
            parameter: "depths",
            expected: 1,
            actual: 0,
        }
        .into());
    }
    for depth in &params.depths {
        if !depth.is_finite() || **depth < 0.0 {
            return Err(DomainError::new("depths", **depth, "must be finite and >= 0").into());
        }
    }
    for pair in params.depths.windows(2) {
        if pair[1] <= pair[0] {
            return Err(
                DomainError::new("depths", *pair[1], "must be strictly increasing").into(),
            );
        }
    }
    Ok(())
}

/// Reject a bulk profile that overflowed for huge but finite material properties.
fn check_profile_finite<T>(
    parameter: &'static str,
    substrate: &LayerProperty<T>,
    profile: &[T],
) -> Result<(), DomainError>
where
    T: Copy + Deref<Target = f64>,
{
    match profile.iter().position(|value| !value.is_finite()) {
        Some(layer) => Err(DomainError::new(
            parameter,
            *substrate.at(layer),
            "SAI-scaled bulk value is not representable",
        )),
        None => Ok(()),
    }
}

/// Reject u*·z0 so large that kB⁻¹ overflows or z0H underflows to zero.
fn check_turbulence_finite(params: &UrbanCanopyParams, kbm1: f64) -> Result<(), DomainError> {
    let z0 = roughness_length(params.building_height);
    if kbm1.is_finite() && *thermal_roughness_length(z0, kbm1) > 0.0 {
        Ok(())
    } else {
        Err(DomainError::new(
            "friction_velocity",
            *params.friction_velocity,
            "u*·z0/ν too large: kB^-1 or z0H is not representable",
        ))
    }
}

/// Check every input against its valid range and layer shape.
///
/// Constraints are checked in field order; the first violation is returned.
///
/// # Errors
/// - [`SuryError::Domain`] for a value outside its physical range, or an
///   aspect ratio beyond [0, 2] under [`DomainPolicy::Strict`]
/// - [`SuryError::Shape`] for an empty depth grid or a per-layer property whose
///   length differs from the depth grid
pub fn validate(params: &UrbanCanopyParams, policy: DomainPolicy) -> Result<(), SuryError> {
    let layers = params.layer_count();

    check_unit_interval("albedo", params.albedo)?;
    check_unit_interval("emissivity", params.emissivity)?;
    check_layered("substrate_conductivity", &params.substrate_conductivity, layers)?;
    check_layered("substrate_heat_capacity", &params.substrate_heat_capacity, layers)?;
    check_positive("building_height", *params.building_height)?;
    check_height_to_width(params.height_to_width, policy)?;
    check_unit_interval("roof_fraction", params.roof_fraction)?;
    check_depths(params)?;
    check_layered("soil_conductivity", &params.soil_conductivity, layers)?;
    check_layered("soil_heat_capacity", &params.soil_heat_capacity, layers)?;
    check_unit_interval("snow_albedo", params.snow_albedo)?;
    check_unit_interval("snow_emissivity", params.snow_emissivity)?;
    check_unit_interval("snow_fraction", params.snow_fraction)?;
    check_positive("friction_velocity", *params.friction_velocity)?;

    Ok(())
}

/// Derive the bulk parameters, rejecting aspect ratios outside [0, 2].
///
/// # Errors
/// See [`validate`].
pub fn derive(params: &UrbanCanopyParams) -> Result<BulkParameters, SuryError> {
    derive_with_policy(params, DomainPolicy::Strict)
}

/// Derive the bulk parameters with an explicit out-of-range policy for the
/// canyon aspect ratio.
///
/// # Errors
/// See [`validate`]. Inputs that pass validation but drive a derived value out
/// of the representable range (e.g. a kilometre-scale building height with a
/// large u*, so that kB⁻¹ overflows and z0H underflows to zero) are also
/// reported as [`SuryError::Domain`].
pub fn derive_with_policy(
    params: &UrbanCanopyParams,
    policy: DomainPolicy,
) -> Result<BulkParameters, SuryError> {
    validate(params, policy)?;

    // Radiation
    let psi = bulk_radiative_factor(params.roof_fraction, params.height_to_width);
    let albedo = snow_blend(params.albedo, params.snow_albedo, params.snow_fraction);
    let emissivity = snow_blend(params.emissivity, params.snow_emissivity, params.snow_fraction);

    // Ground heat storage
    let sai = surface_area_index(params.height_to_width, params.roof_fraction);
    let conductivity = bulk_profile(
        &params.depths,
        params.building_height,
        sai,
        &params.substrate_conductivity,
        &params.soil_conductivity,
    );
    let heat_capacity = bulk_profile(
        &params.depths,
        params.building_height,
        sai,
        &params.substrate_heat_capacity,
        &params.soil_heat_capacity,
    );

    check_profile_finite(
        "substrate_conductivity",
        &params.substrate_conductivity,
        &conductivity,
    )?;
    check_profile_finite(
        "substrate_heat_capacity",
        &params.substrate_heat_capacity,
        &heat_capacity,
    )?;

    // Surface-layer turbulence
    let z0 = roughness_length(params.building_height);
    let kbm1 = kb_inverse(params.friction_velocity, z0);
    check_turbulence_finite(params, kbm1)?;

    let bulk = BulkParameters {
        albedo: bulk_albedo(albedo, psi),
        emissivity: bulk_emissivity(emissivity, psi),
        conductivity,
        heat_capacity,
        roughness_length: z0,
        kbm1,
        depths: params.depths.clone(),
        surface_area_index: sai,
    };

    debug!(
        "SURY bulk parameters: albedo={:.4}, emissivity={:.4}, SAI={:.3}, z0={}, kB^-1={:.3}",
        bulk.albedo, bulk.emissivity, bulk.surface_area_index, bulk.roughness_length, bulk.kbm1
    );

    Ok(bulk)
}

/// Derive bulk parameters for many independent grid cells in parallel.
///
/// Results keep the order of `cells`; each cell succeeds or fails on its own.
pub fn derive_batch(cells: &[UrbanCanopyParams]) -> Vec<Result<BulkParameters, SuryError>> {
    derive_batch_with_policy(cells, DomainPolicy::Strict)
}

/// [`derive_batch`] with an explicit out-of-range policy.
pub fn derive_batch_with_policy(
    cells: &[UrbanCanopyParams],
    policy: DomainPolicy,
) -> Vec<Result<BulkParameters, SuryError>> {
    let results: Vec<_> = cells
        .par_iter()
        .map(|cell| derive_with_policy(cell, policy))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        debug!("SURY batch: {} of {} cells rejected", failed, cells.len());
    }
    results
}

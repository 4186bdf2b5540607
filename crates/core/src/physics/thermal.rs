//! Bulk thermal profiles of the urban ground column
//!
//! Walls add heat-storing surface on top of the plan area. SURY accounts for
//! this by scaling the substrate's conductivity and heat capacity with the
//! surface area index (SAI) at the surface and relaxing linearly towards the
//! natural soil over the depth of the buildings.
//!
//! # Scientific References
//! - Wouters, H., et al. (2016). Geoscientific Model Development, 9, 3027-3054

use std::ops::{Add, Mul};

use crate::core_types::params::LayerProperty;
use crate::core_types::units::Meters;

/// Surface area index of parallel canyons with flat roofs
///
/// SAI = (1 + 2 × H/W) × (1 - f_roof) + f_roof
///
/// Each unit of canyon floor carries two walls of relative height H/W.
///
/// # Arguments
/// * `height_to_width` - Canyon aspect ratio H/W
/// * `roof_fraction` - Plan-area roof fraction (0-1)
///
/// # Returns
/// Exposed surface per unit plan area (>= 1 for valid inputs)
pub fn surface_area_index(height_to_width: f64, roof_fraction: f64) -> f64 {
    (1.0 + 2.0 * height_to_width) * (1.0 - roof_fraction) + roof_fraction
}

/// Weight of the underlying soil at `depth` below an urban canopy of height `building_height`
///
/// Grows linearly from 0 at the surface to 1 at the building height and stays
/// at 1 below it.
#[inline]
pub fn soil_weight(depth: Meters, building_height: Meters) -> f64 {
    depth.min(building_height) / building_height
}

/// Linear blend between the surface bulk value and the soil value
#[inline]
fn relax_to_soil<T>(surface: T, soil: T, weight: f64) -> T
where
    T: Mul<f64, Output = T> + Add<Output = T>,
{
    surface * (1.0 - weight) + soil * weight
}

/// Vertical profile of a bulk thermal property (one value per depth)
///
/// At each depth the substrate value is amplified by the surface area index
/// and blended with the soil value according to [`soil_weight`].
///
/// Per-layer inputs must already be shape-checked against `depths`.
pub fn bulk_profile<T>(
    depths: &[Meters],
    building_height: Meters,
    surface_area_index: f64,
    substrate: &LayerProperty<T>,
    soil: &LayerProperty<T>,
) -> Vec<T>
where
    T: Copy + Mul<f64, Output = T> + Add<Output = T>,
{
    depths
        .iter()
        .enumerate()
        .map(|(layer, &depth)| {
            let surface = substrate.at(layer) * surface_area_index;
            relax_to_soil(surface, soil.at(layer), soil_weight(depth, building_height))
        })
        .collect()
}

//! FFI-exposed parameter records.
//!
//! `SuryInputs` mirrors `sury_core::UrbanCanopyParams` with scalar material
//! properties (one value for the whole column); the depth grid travels
//! separately as a pointer/length pair. Both structs have a stable
//! C-compatible layout (`#[repr(C)]`).

use sury_core::{
    BulkParameters, HeatCapacity, LayerProperty, Meters, MetersPerSecond, ThermalConductivity,
    UrbanCanopyParams,
};

/// Urban-canopy inputs (SI units).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuryInputs {
    /// Substrate albedo (0-1).
    pub albedo: f64,
    /// Substrate emissivity (0-1).
    pub emissivity: f64,
    /// Substrate heat conductivity in W/(m·K).
    pub substrate_conductivity: f64,
    /// Substrate volumetric heat capacity in J/(m³·K).
    pub substrate_heat_capacity: f64,
    /// Building height in meters.
    pub building_height: f64,
    /// Canyon height-to-width ratio, validity range [0, 2].
    pub height_to_width: f64,
    /// Roof fraction (0-1).
    pub roof_fraction: f64,
    /// Heat conductivity of the soil below in W/(m·K).
    pub soil_conductivity: f64,
    /// Volumetric heat capacity of the soil below in J/(m³·K).
    pub soil_heat_capacity: f64,
    /// Snow albedo (0-1).
    pub snow_albedo: f64,
    /// Snow emissivity (0-1).
    pub snow_emissivity: f64,
    /// Snow fraction (0-1).
    pub snow_fraction: f64,
    /// Friction velocity in m/s.
    pub friction_velocity: f64,
}

impl SuryInputs {
    /// Build the core parameter record on the given depth grid (meters).
    pub(crate) fn to_params(&self, depths: &[f64]) -> UrbanCanopyParams {
        UrbanCanopyParams {
            albedo: self.albedo,
            emissivity: self.emissivity,
            substrate_conductivity: LayerProperty::Uniform(ThermalConductivity::new(
                self.substrate_conductivity,
            )),
            substrate_heat_capacity: LayerProperty::Uniform(HeatCapacity::new(
                self.substrate_heat_capacity,
            )),
            building_height: Meters::new(self.building_height),
            height_to_width: self.height_to_width,
            roof_fraction: self.roof_fraction,
            depths: depths.iter().copied().map(Meters::new).collect(),
            soil_conductivity: LayerProperty::Uniform(ThermalConductivity::new(
                self.soil_conductivity,
            )),
            soil_heat_capacity: LayerProperty::Uniform(HeatCapacity::new(self.soil_heat_capacity)),
            snow_albedo: self.snow_albedo,
            snow_emissivity: self.snow_emissivity,
            snow_fraction: self.snow_fraction,
            friction_velocity: MetersPerSecond::new(self.friction_velocity),
        }
    }
}

impl Default for SuryInputs {
    fn default() -> Self {
        let params = UrbanCanopyParams::default();
        SuryInputs {
            albedo: params.albedo,
            emissivity: params.emissivity,
            substrate_conductivity: *params.substrate_conductivity.at(0),
            substrate_heat_capacity: *params.substrate_heat_capacity.at(0),
            building_height: *params.building_height,
            height_to_width: params.height_to_width,
            roof_fraction: params.roof_fraction,
            soil_conductivity: *params.soil_conductivity.at(0),
            soil_heat_capacity: *params.soil_heat_capacity.at(0),
            snow_albedo: params.snow_albedo,
            snow_emissivity: params.snow_emissivity,
            snow_fraction: params.snow_fraction,
            friction_velocity: *params.friction_velocity,
        }
    }
}

/// Scalar bulk parameters. The per-layer profiles are written to
/// caller-provided buffers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SuryOutputs {
    /// Bulk albedo (0-1).
    pub albedo: f64,
    /// Bulk emissivity (0-1).
    pub emissivity: f64,
    /// Aerodynamic roughness length z0 in meters.
    pub roughness_length: f64,
    /// kB^-1 = ln(z0/z0H).
    pub kbm1: f64,
    /// Thermal roughness length z0H in meters.
    pub thermal_roughness_length: f64,
    /// Surface area index used for the substrate scaling.
    pub surface_area_index: f64,
}

impl From<&BulkParameters> for SuryOutputs {
    fn from(bulk: &BulkParameters) -> Self {
        SuryOutputs {
            albedo: bulk.albedo,
            emissivity: bulk.emissivity,
            roughness_length: *bulk.roughness_length,
            kbm1: bulk.kbm1,
            thermal_roughness_length: *bulk.thermal_roughness_length(),
            surface_area_index: bulk.surface_area_index,
        }
    }
}

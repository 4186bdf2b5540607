//! Derived bulk surface parameters

use super::units::{HeatCapacity, Meters, ThermalConductivity};
use serde::{Deserialize, Serialize};

/// Bulk (effective) surface parameters of an urban canopy.
///
/// Produced by [`crate::derive`]; owned entirely by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkParameters {
    /// Bulk albedo (0-1)
    pub albedo: f64,
    /// Bulk emissivity (0-1)
    pub emissivity: f64,
    /// Bulk heat conductivity, one value per layer
    pub conductivity: Vec<ThermalConductivity>,
    /// Bulk volumetric heat capacity, one value per layer
    pub heat_capacity: Vec<HeatCapacity>,
    /// Aerodynamic roughness length z0
    pub roughness_length: Meters,
    /// kB⁻¹ = ln(z0/z0H)
    pub kbm1: f64,
    /// Depth grid the profiles were evaluated on
    pub depths: Vec<Meters>,
    /// Surface area index used to scale the substrate properties
    pub surface_area_index: f64,
}

impl BulkParameters {
    /// Thermal roughness length z0H = z0 × exp(-kB⁻¹)
    pub fn thermal_roughness_length(&self) -> Meters {
        crate::physics::thermal_roughness_length(self.roughness_length, self.kbm1)
    }

    /// Number of layers in the thermal profiles
    pub fn layer_count(&self) -> usize {
        self.depths.len()
    }

    /// Iterate (depth, conductivity, heat capacity) per layer, top to bottom
    pub fn layers(
        &self,
    ) -> impl Iterator<Item = (Meters, ThermalConductivity, HeatCapacity)> + '_ {
        self.depths
            .iter()
            .zip(&self.conductivity)
            .zip(&self.heat_capacity)
            .map(|((&d, &k), &c)| (d, k, c))
    }
}

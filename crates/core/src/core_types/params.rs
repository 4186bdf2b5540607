//! Urban-canopy input parameters
//!
//! [`UrbanCanopyParams`] carries the full set of geometric and material inputs
//! of the SURY parametrization. `Default` reproduces the baseline urban canyon
//! of Wouters et al. (2016); callers override individual fields with struct
//! update syntax or the `with_*` setters:
//!
//! ```
//! use sury_core::UrbanCanopyParams;
//!
//! let params = UrbanCanopyParams::default()
//!     .with_building_height(20.0)
//!     .with_height_to_width(1.0)
//!     .with_roof_fraction(0.5);
//! assert_eq!(*params.building_height, 20.0);
//! assert_eq!(params.snow_fraction, 0.0);
//! ```
//!
//! Deserialising a partial record fills the omitted fields from the baseline.

use super::units::{HeatCapacity, Meters, MetersPerSecond, ThermalConductivity};
use crate::error::ShapeError;
use serde::{Deserialize, Serialize};

/// Depths (m) of the ground layers of the bulk land-surface column
pub const DEFAULT_DEPTHS: [f64; 11] = [
    0.0, 0.01, 0.035, 0.08, 0.17, 0.35, 0.71, 1.43, 2.87, 5.75, 11.51,
];

/// A material property given either once for the whole column or per layer.
///
/// Serialises as a bare number (`Uniform`) or an array (`PerLayer`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayerProperty<T> {
    /// Same value at every depth
    Uniform(T),
    /// One value per entry of the depth grid
    PerLayer(Vec<T>),
}

impl<T: Copy> LayerProperty<T> {
    /// Value at layer `index`. `PerLayer` must already be shape-checked.
    #[inline]
    pub fn at(&self, index: usize) -> T {
        match self {
            LayerProperty::Uniform(v) => *v,
            LayerProperty::PerLayer(values) => values[index],
        }
    }

    /// All distinct values carried, for range validation
    pub fn values(&self) -> &[T] {
        match self {
            LayerProperty::Uniform(v) => std::slice::from_ref(v),
            LayerProperty::PerLayer(values) => values,
        }
    }

    /// Check that a per-layer property matches a column of `layers` layers.
    ///
    /// # Errors
    /// [`ShapeError`] when a `PerLayer` vector has a different length.
    pub fn check_layers(&self, parameter: &'static str, layers: usize) -> Result<(), ShapeError> {
        match self {
            LayerProperty::Uniform(_) => Ok(()),
            LayerProperty::PerLayer(values) if values.len() == layers => Ok(()),
            LayerProperty::PerLayer(values) => Err(ShapeError {
                parameter,
                expected: layers,
                actual: values.len(),
            }),
        }
    }
}

impl From<ThermalConductivity> for LayerProperty<ThermalConductivity> {
    fn from(value: ThermalConductivity) -> Self {
        LayerProperty::Uniform(value)
    }
}

impl From<HeatCapacity> for LayerProperty<HeatCapacity> {
    fn from(value: HeatCapacity) -> Self {
        LayerProperty::Uniform(value)
    }
}

impl<T> From<Vec<T>> for LayerProperty<T> {
    fn from(values: Vec<T>) -> Self {
        LayerProperty::PerLayer(values)
    }
}

/// How the derivation treats a canyon aspect ratio beyond the validated range [0, 2].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DomainPolicy {
    /// Reject with a `DomainError`
    #[default]
    Strict,
    /// Emit a `tracing` warning and extrapolate the formulas
    Warn,
}

/// Inputs of the SURY bulk parameter derivation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrbanCanopyParams {
    /// Substrate albedo (0-1)
    pub albedo: f64,
    /// Substrate emissivity (0-1)
    pub emissivity: f64,
    /// Substrate heat conductivity
    pub substrate_conductivity: LayerProperty<ThermalConductivity>,
    /// Substrate volumetric heat capacity
    pub substrate_heat_capacity: LayerProperty<HeatCapacity>,
    /// Building height H
    pub building_height: Meters,
    /// Canyon height-to-width ratio; validity range [0, 2]
    pub height_to_width: f64,
    /// Plan-area roof fraction (0-1)
    pub roof_fraction: f64,
    /// Depths of the ground layers, strictly increasing
    pub depths: Vec<Meters>,
    /// Heat conductivity of the soil below
    pub soil_conductivity: LayerProperty<ThermalConductivity>,
    /// Volumetric heat capacity of the soil below
    pub soil_heat_capacity: LayerProperty<HeatCapacity>,
    /// Snow albedo (0-1)
    pub snow_albedo: f64,
    /// Snow emissivity (0-1)
    pub snow_emissivity: f64,
    /// Snow-covered fraction (0-1)
    pub snow_fraction: f64,
    /// Friction velocity u*
    pub friction_velocity: MetersPerSecond,
}

impl Default for UrbanCanopyParams {
    fn default() -> Self {
        UrbanCanopyParams {
            albedo: 0.101,
            emissivity: 0.86,
            substrate_conductivity: LayerProperty::Uniform(ThermalConductivity::URBAN_SUBSTRATE),
            substrate_heat_capacity: LayerProperty::Uniform(HeatCapacity::URBAN_SUBSTRATE),
            building_height: Meters::new(15.0),
            height_to_width: 1.5,
            roof_fraction: 0.667,
            depths: DEFAULT_DEPTHS.iter().copied().map(Meters::new).collect(),
            soil_conductivity: LayerProperty::Uniform(ThermalConductivity::SOIL),
            soil_heat_capacity: LayerProperty::Uniform(HeatCapacity::SOIL),
            snow_albedo: 0.70,
            snow_emissivity: 0.997,
            snow_fraction: 0.0,
            friction_velocity: MetersPerSecond::new(0.25),
        }
    }
}

impl UrbanCanopyParams {
    /// Number of ground layers in the column
    pub fn layer_count(&self) -> usize {
        self.depths.len()
    }

    pub fn with_albedo(mut self, albedo: f64) -> Self {
        self.albedo = albedo;
        self
    }

    pub fn with_emissivity(mut self, emissivity: f64) -> Self {
        self.emissivity = emissivity;
        self
    }

    pub fn with_substrate_conductivity(
        mut self,
        conductivity: impl Into<LayerProperty<ThermalConductivity>>,
    ) -> Self {
        self.substrate_conductivity = conductivity.into();
        self
    }

    pub fn with_substrate_heat_capacity(
        mut self,
        heat_capacity: impl Into<LayerProperty<HeatCapacity>>,
    ) -> Self {
        self.substrate_heat_capacity = heat_capacity.into();
        self
    }

    /// Set the building height in meters
    pub fn with_building_height(mut self, height: f64) -> Self {
        self.building_height = Meters::new(height);
        self
    }

    pub fn with_height_to_width(mut self, ratio: f64) -> Self {
        self.height_to_width = ratio;
        self
    }

    pub fn with_roof_fraction(mut self, fraction: f64) -> Self {
        self.roof_fraction = fraction;
        self
    }

    /// Replace the depth grid (meters)
    pub fn with_depths(mut self, depths: &[f64]) -> Self {
        self.depths = depths.iter().copied().map(Meters::new).collect();
        self
    }

    pub fn with_soil_conductivity(
        mut self,
        conductivity: impl Into<LayerProperty<ThermalConductivity>>,
    ) -> Self {
        self.soil_conductivity = conductivity.into();
        self
    }

    pub fn with_soil_heat_capacity(
        mut self,
        heat_capacity: impl Into<LayerProperty<HeatCapacity>>,
    ) -> Self {
        self.soil_heat_capacity = heat_capacity.into();
        self
    }

    /// Set snow optics (albedo, emissivity)
    pub fn with_snow_optics(mut self, albedo: f64, emissivity: f64) -> Self {
        self.snow_albedo = albedo;
        self.snow_emissivity = emissivity;
        self
    }

    pub fn with_snow_fraction(mut self, fraction: f64) -> Self {
        self.snow_fraction = fraction;
        self
    }

    /// Set the friction velocity in m/s
    pub fn with_friction_velocity(mut self, ustar: f64) -> Self {
        self.friction_velocity = MetersPerSecond::new(ustar);
        self
    }
}

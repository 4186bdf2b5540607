//! Semantic unit types for the urban-canopy parameters
//!
//! Newtype wrappers keep lengths, velocities and the two thermal material
//! properties from being mixed up when they travel through the bulk
//! derivation (e.g. a heat capacity passed where a conductivity is expected).
//!
//! # Design Philosophy
//! - Everything is f64: the parametrization is evaluated once per grid cell and
//!   the reference values (e.g. 1.25e6 J/(m³·K)) span many orders of magnitude
//! - Constructors are unchecked `const fn`s; physical range checks live in
//!   [`crate::sury::validate`] so that they surface as typed errors instead of panics
//! - Total ordering via `total_cmp` (NaN sorts greater than all values)
//! - Serde support, serialised as plain numbers
//!
//! # Usage
//! ```
//! use sury_core::core_types::units::{Meters, ThermalConductivity};
//!
//! let h = Meters::new(15.0);
//! assert!((*(h * 0.075) - 1.125).abs() < 1e-12);
//!
//! let k = ThermalConductivity::new(0.777) * 2.0;
//! assert_eq!(k, ThermalConductivity::new(1.554));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Div, Mul};

// ============================================================================
// LENGTH
// ============================================================================

/// Length in meters (building height, layer depth, roughness length)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Meters(f64);

impl Eq for Meters {}

impl PartialOrd for Meters {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Meters {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Meters {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Meters {
    /// Create a new length in meters
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Meters(value)
    }
}

impl Mul<f64> for Meters {
    type Output = Meters;
    fn mul(self, rhs: f64) -> Meters {
        Meters(self.0 * rhs)
    }
}

// Length ratio is dimensionless
impl Div<Meters> for Meters {
    type Output = f64;
    fn div(self, rhs: Meters) -> f64 {
        self.0 / rhs.0
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} m", self.0)
    }
}

// ============================================================================
// VELOCITY
// ============================================================================

/// Velocity in m/s (friction velocity u*)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MetersPerSecond(f64);

impl Eq for MetersPerSecond {}

impl PartialOrd for MetersPerSecond {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MetersPerSecond {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for MetersPerSecond {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl MetersPerSecond {
    /// Create a new velocity in m/s
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MetersPerSecond(value)
    }
}

// Cross-type operation: velocity × length = kinematic quantity (m²/s)
impl Mul<Meters> for MetersPerSecond {
    type Output = f64;
    fn mul(self, rhs: Meters) -> f64 {
        self.0 * rhs.0
    }
}

impl fmt::Display for MetersPerSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} m/s", self.0)
    }
}

// ============================================================================
// THERMAL MATERIAL PROPERTIES
// ============================================================================

/// Heat conductivity in W/(m·K)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ThermalConductivity(f64);

impl Eq for ThermalConductivity {}

impl PartialOrd for ThermalConductivity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ThermalConductivity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for ThermalConductivity {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl ThermalConductivity {
    /// Bulk substrate conductivity of the SURY baseline canyon
    pub const URBAN_SUBSTRATE: ThermalConductivity = ThermalConductivity(0.777);

    /// Conductivity of the natural soil below the urban fabric
    pub const SOIL: ThermalConductivity = ThermalConductivity(0.28);

    /// Create a new conductivity in W/(m·K)
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        ThermalConductivity(value)
    }
}

impl Add for ThermalConductivity {
    type Output = ThermalConductivity;
    fn add(self, rhs: ThermalConductivity) -> ThermalConductivity {
        ThermalConductivity(self.0 + rhs.0)
    }
}

impl Mul<f64> for ThermalConductivity {
    type Output = ThermalConductivity;
    fn mul(self, rhs: f64) -> ThermalConductivity {
        ThermalConductivity(self.0 * rhs)
    }
}

impl fmt::Display for ThermalConductivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} W/(m·K)", self.0)
    }
}

/// Volumetric heat capacity in J/(m³·K)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct HeatCapacity(f64);

impl Eq for HeatCapacity {}

impl PartialOrd for HeatCapacity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeatCapacity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for HeatCapacity {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl HeatCapacity {
    /// Bulk substrate heat capacity of the SURY baseline canyon
    pub const URBAN_SUBSTRATE: HeatCapacity = HeatCapacity(1.25e6);

    /// Heat capacity of the natural soil below the urban fabric
    pub const SOIL: HeatCapacity = HeatCapacity(1.35e6);

    /// Create a new volumetric heat capacity in J/(m³·K)
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        HeatCapacity(value)
    }
}

impl Add for HeatCapacity {
    type Output = HeatCapacity;
    fn add(self, rhs: HeatCapacity) -> HeatCapacity {
        HeatCapacity(self.0 + rhs.0)
    }
}

impl Mul<f64> for HeatCapacity {
    type Output = HeatCapacity;
    fn mul(self, rhs: f64) -> HeatCapacity {
        HeatCapacity(self.0 * rhs)
    }
}

impl fmt::Display for HeatCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4e} J/(m³·K)", self.0)
    }
}

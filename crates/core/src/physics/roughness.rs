//! Surface-layer turbulence properties of an urban canopy
//!
//! Momentum roughness follows from the building height alone. Heat is
//! transferred less efficiently than momentum over bluff bodies, so the
//! thermal roughness length z0H is much smaller than z0; the log ratio
//! kB⁻¹ = ln(z0/z0H) grows with the roughness Reynolds number.
//!
//! # Scientific References
//! - Brutsaert, W. (1982). "Evaporation into the Atmosphere". Reidel, Dordrecht
//! - Kanda, M., et al. (2007). "Roughness lengths for momentum and heat derived
//!   from outdoor urban scale models". Journal of Applied Meteorology and
//!   Climatology, 46(7), 1067-1079
//! - Wouters, H., et al. (2016). Geoscientific Model Development, 9, 3027-3054

use crate::core_types::units::{Meters, MetersPerSecond};

/// Ratio of aerodynamic roughness length to building height
pub const ROUGHNESS_HEIGHT_RATIO: f64 = 0.075;

/// Kinematic viscosity of air (m²/s)
pub const KINEMATIC_VISCOSITY_AIR: f64 = 1.461e-5;

/// Bluff-body kB⁻¹ closure: kB⁻¹ = a × Re*^(1/4) + b
const KBM1_COEFFICIENT: f64 = 1.29;
const KBM1_OFFSET: f64 = -2.0;

/// Aerodynamic roughness length z0 = 0.075 × H
///
/// A function of urban morphology only, independent of the thermal state.
pub fn roughness_length(building_height: Meters) -> Meters {
    building_height * ROUGHNESS_HEIGHT_RATIO
}

/// Roughness Reynolds number Re* = u* × z0 / ν
pub fn roughness_reynolds_number(friction_velocity: MetersPerSecond, z0: Meters) -> f64 {
    friction_velocity * z0 / KINEMATIC_VISCOSITY_AIR
}

/// kB⁻¹ = ln(z0/z0H) from the roughness Reynolds number
///
/// kB⁻¹ = 1.29 × Re*^0.25 - 2
///
/// # Arguments
/// * `friction_velocity` - Friction velocity u* (m/s), must be > 0
/// * `z0` - Aerodynamic roughness length (m)
///
/// # References
/// Brutsaert (1982), Kanda et al. (2007)
pub fn kb_inverse(friction_velocity: MetersPerSecond, z0: Meters) -> f64 {
    let re = roughness_reynolds_number(friction_velocity, z0);
    KBM1_COEFFICIENT * re.powf(0.25) + KBM1_OFFSET
}

/// Thermal roughness length z0H = z0 × exp(-kB⁻¹)
pub fn thermal_roughness_length(z0: Meters, kbm1: f64) -> Meters {
    z0 * (-kbm1).exp()
}

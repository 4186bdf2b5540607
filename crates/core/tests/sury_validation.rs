//! SURY Bulk Parameter Validation Suite
//!
//! Checks the derived bulk parameters against reference values of the
//! published parametrization and against the physical properties any bulk
//! urban surface must satisfy.
//!
//! # Test Categories
//! 1. Reference values (baseline canyon, extrapolated deep canyon)
//! 2. Radiative limits (snow cover, open geometry, bounds)
//! 3. Thermal profile limits (roof-only and canyon-only surfaces)
//! 4. Roughness behaviour
//! 5. Input validation
//! 6. Determinism, batching and serialisation
//!
//! # References
//! - Wouters, H., et al. (2016). Geoscientific Model Development, 9, 3027-3054
//!
//! Run tests with: `cargo test --test sury_validation`

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sury_core::physics::sury_validation::{roughness_length, surface_area_index};
use sury_core::{
    derive, derive_batch, derive_with_policy, BulkParameters, DomainPolicy, HeatCapacity,
    LayerProperty, Meters, SuryError, ThermalConductivity, UrbanCanopyParams,
};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn random_valid_params(rng: &mut StdRng) -> UrbanCanopyParams {
    UrbanCanopyParams::default()
        .with_albedo(rng.random_range(0.0..=1.0))
        .with_emissivity(rng.random_range(0.0..=1.0))
        .with_building_height(rng.random_range(1.0..60.0))
        .with_height_to_width(rng.random_range(0.0..=2.0))
        .with_roof_fraction(rng.random_range(0.0..=1.0))
        .with_snow_optics(rng.random_range(0.0..=1.0), rng.random_range(0.0..=1.0))
        .with_snow_fraction(rng.random_range(0.0..=1.0))
        .with_friction_velocity(rng.random_range(0.01..2.0))
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 1: REFERENCE VALUES
// ═══════════════════════════════════════════════════════════════════════════════

/// Baseline urban canyon (H = 15 m, H/W = 1.5, roof fraction 0.667)
#[test]
fn test_baseline_canyon_reference_values() {
    let bulk = derive(&UrbanCanopyParams::default()).unwrap();

    assert_relative_eq!(bulk.albedo, 0.08104115736605558, max_relative = 1e-12);
    assert_relative_eq!(bulk.emissivity, 0.8876657224628932, max_relative = 1e-12);
    assert_relative_eq!(*bulk.roughness_length, 1.125, max_relative = 1e-12);
    assert_relative_eq!(bulk.kbm1, 13.194985468866836, max_relative = 1e-12);

    let expected_conductivity = [
        1.553223,
        1.5523741846666665,
        1.5502521463333334,
        1.5464324773333333,
        1.5387931393333334,
        1.5235144633333333,
        1.4929571113333333,
        1.4318424073333333,
        1.3096129993333332,
        1.0651541833333333,
        0.5762365513333334,
    ];
    let expected_heat_capacity = [
        2498750.0,
        2497984.1666666665,
        2496069.5833333335,
        2492623.3333333335,
        2485730.8333333335,
        2471945.8333333335,
        2444375.8333333335,
        2389235.8333333335,
        2278955.833333333,
        2058395.8333333335,
        1617275.8333333335,
    ];
    for (layer, (k, c)) in bulk.conductivity.iter().zip(&bulk.heat_capacity).enumerate() {
        assert_relative_eq!(**k, expected_conductivity[layer], max_relative = 1e-12);
        assert_relative_eq!(**c, expected_heat_capacity[layer], max_relative = 1e-12);
    }
}

/// Deep canyon beyond the validated range, evaluated with the warning policy
#[test]
fn test_extrapolated_deep_canyon_reference_values() {
    let params = UrbanCanopyParams::default()
        .with_building_height(20.0)
        .with_height_to_width(10.0)
        .with_roof_fraction(0.5);
    let bulk = derive_with_policy(&params, DomainPolicy::Warn).unwrap();

    assert_relative_eq!(bulk.albedo, 0.05062517698492165, max_relative = 1e-12);
    assert_relative_eq!(bulk.emissivity, 0.9298264873476334, max_relative = 1e-12);
    assert_relative_eq!(*bulk.roughness_length, 1.5, max_relative = 1e-12);
    assert_relative_eq!(bulk.kbm1, 14.328074499339944, max_relative = 1e-12);
    assert_relative_eq!(*bulk.conductivity[0], 8.547, max_relative = 1e-12);
    assert_relative_eq!(*bulk.conductivity[10], 3.7893415, max_relative = 1e-12);
    assert_relative_eq!(*bulk.heat_capacity[0], 13750000.0, max_relative = 1e-12);
    assert_relative_eq!(*bulk.heat_capacity[10], 6613800.0, max_relative = 1e-12);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 2: RADIATIVE LIMITS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_bulk_optics_stay_in_unit_interval() {
    let mut rng = StdRng::seed_from_u64(2016);
    for _ in 0..2000 {
        let params = random_valid_params(&mut rng);
        let bulk = derive(&params).unwrap();
        assert!(
            (0.0..=1.0).contains(&bulk.albedo),
            "albedo {} for {:?}",
            bulk.albedo,
            params
        );
        assert!(
            (0.0..=1.0).contains(&bulk.emissivity),
            "emissivity {} for {:?}",
            bulk.emissivity,
            params
        );
    }
}

#[test]
fn test_snow_free_surface_ignores_snow_optics() {
    let base = UrbanCanopyParams::default().with_snow_fraction(0.0);
    let a = derive(&base.clone().with_snow_optics(0.2, 0.9)).unwrap();
    let b = derive(&base.with_snow_optics(0.95, 0.999)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_full_snow_cover_replaces_substrate_optics() {
    let params = UrbanCanopyParams::default()
        .with_height_to_width(0.0)
        .with_snow_fraction(1.0)
        .with_snow_optics(0.7, 0.997);
    let bulk = derive(&params).unwrap();
    assert_abs_diff_eq!(bulk.albedo, 0.7, epsilon = 1e-12);
    assert_abs_diff_eq!(bulk.emissivity, 0.997, epsilon = 1e-12);

    // In a canyon the snow optics are still trapped, independent of the substrate
    let canyon = UrbanCanopyParams::default().with_snow_fraction(1.0);
    let dark = derive(&canyon.clone().with_albedo(0.05).with_emissivity(0.8)).unwrap();
    let bright = derive(&canyon.with_albedo(0.5).with_emissivity(0.95)).unwrap();
    assert_eq!(dark.albedo, bright.albedo);
    assert_eq!(dark.emissivity, bright.emissivity);
}

#[test]
fn test_roof_only_flat_surface_reduces_to_substrate() {
    let params = UrbanCanopyParams::default()
        .with_height_to_width(0.0)
        .with_roof_fraction(1.0)
        .with_snow_fraction(0.0)
        .with_albedo(0.25)
        .with_emissivity(0.91);
    let bulk = derive(&params).unwrap();

    assert_eq!(bulk.albedo, 0.25);
    assert_abs_diff_eq!(bulk.emissivity, 0.91, epsilon = 1e-15);
    assert_eq!(bulk.surface_area_index, 1.0);
    assert_eq!(bulk.conductivity[0], ThermalConductivity::URBAN_SUBSTRATE);
    assert_eq!(bulk.heat_capacity[0], HeatCapacity::URBAN_SUBSTRATE);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 3: THERMAL PROFILE LIMITS
// ═══════════════════════════════════════════════════════════════════════════════

/// With roofs only, the profile no longer depends on the canyon geometry
#[test]
fn test_roof_only_profile_independent_of_canyon_geometry() {
    let roof = UrbanCanopyParams::default().with_roof_fraction(1.0);
    let shallow = derive(&roof.clone().with_height_to_width(0.2)).unwrap();
    let deep = derive(&roof.with_height_to_width(1.9)).unwrap();

    assert_eq!(shallow.conductivity, deep.conductivity);
    assert_eq!(shallow.heat_capacity, deep.heat_capacity);
    assert_eq!(shallow.conductivity[0], ThermalConductivity::URBAN_SUBSTRATE);
}

/// Without roofs, the surface layer is the substrate amplified by floor plus walls
#[test]
fn test_canyon_only_profile_scales_with_aspect_ratio() {
    for htw in [0.0, 0.5, 1.0, 2.0] {
        let params = UrbanCanopyParams::default()
            .with_roof_fraction(0.0)
            .with_height_to_width(htw);
        let bulk = derive(&params).unwrap();

        let sai = 1.0 + 2.0 * htw;
        assert_relative_eq!(bulk.surface_area_index, sai, max_relative = 1e-15);
        assert_relative_eq!(*bulk.conductivity[0], 0.777 * sai, max_relative = 1e-12);
        assert_relative_eq!(*bulk.heat_capacity[0], 1.25e6 * sai, max_relative = 1e-12);
    }
}

#[test]
fn test_profile_reaches_soil_below_buildings() {
    let params = UrbanCanopyParams::default()
        .with_building_height(2.0)
        .with_soil_conductivity(ThermalConductivity::new(0.4));
    let bulk = derive(&params).unwrap();

    for (depth, k, _) in bulk.layers() {
        if depth >= Meters::new(2.0) {
            assert_eq!(k, ThermalConductivity::new(0.4), "layer at {}", depth);
        }
    }
}

#[test]
fn test_per_layer_soil_properties() {
    let soil: Vec<_> = (0..11)
        .map(|i| ThermalConductivity::new(0.2 + 0.01 * f64::from(i)))
        .collect();
    let params = UrbanCanopyParams::default()
        .with_building_height(5.0)
        .with_soil_conductivity(soil.clone());
    let bulk = derive(&params).unwrap();

    // 5.75 m and 11.51 m lie below the 5 m buildings
    assert_eq!(bulk.conductivity[9], soil[9]);
    assert_eq!(bulk.conductivity[10], soil[10]);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 4: ROUGHNESS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_roughness_non_decreasing_with_building_height() {
    let mut previous = Meters::new(0.0);
    for h in (1..=100).map(f64::from) {
        let bulk = derive(&UrbanCanopyParams::default().with_building_height(h)).unwrap();
        assert!(bulk.roughness_length >= previous, "z0 dropped at H = {}", h);
        previous = bulk.roughness_length;
    }
    assert_eq!(roughness_length(Meters::new(100.0)), previous);
}

#[test]
fn test_thermal_roughness_length_consistent_with_kbm1() {
    let bulk = derive(&UrbanCanopyParams::default()).unwrap();
    let z0h = bulk.thermal_roughness_length();
    assert!(z0h < bulk.roughness_length);
    assert_relative_eq!((bulk.roughness_length / z0h).ln(), bulk.kbm1, max_relative = 1e-12);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 5: INPUT VALIDATION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_aspect_ratio_outside_validated_range_rejected() {
    for htw in [-1.0, 3.0, f64::NAN] {
        let params = UrbanCanopyParams::default().with_height_to_width(htw);
        match derive(&params) {
            Err(SuryError::Domain(e)) => assert_eq!(e.parameter, "height_to_width"),
            other => panic!("H/W = {} should be rejected, got {:?}", htw, other),
        }
    }
    // Validated range is inclusive
    assert!(derive(&UrbanCanopyParams::default().with_height_to_width(2.0)).is_ok());
    assert!(derive(&UrbanCanopyParams::default().with_height_to_width(0.0)).is_ok());
}

#[test]
fn test_fractions_outside_unit_interval_rejected() {
    let cases = [
        (UrbanCanopyParams::default().with_roof_fraction(1.01), "roof_fraction"),
        (UrbanCanopyParams::default().with_snow_fraction(-0.1), "snow_fraction"),
        (UrbanCanopyParams::default().with_snow_optics(1.2, 0.9), "snow_albedo"),
        (UrbanCanopyParams::default().with_emissivity(f64::NAN), "emissivity"),
    ];
    for (params, parameter) in cases {
        let err = derive(&params).unwrap_err();
        assert!(matches!(err, SuryError::Domain(_)));
        assert_eq!(err.parameter(), parameter);
    }
}

#[test]
fn test_friction_velocity_must_be_positive() {
    for ustar in [0.0, -0.25, f64::INFINITY] {
        let err = derive(&UrbanCanopyParams::default().with_friction_velocity(ustar)).unwrap_err();
        assert_eq!(err.parameter(), "friction_velocity");
    }
}

#[test]
fn test_building_height_must_be_positive() {
    let err = derive(&UrbanCanopyParams::default().with_building_height(0.0)).unwrap_err();
    assert_eq!(err.parameter(), "building_height");
}

#[test]
fn test_depth_grid_validation() {
    let negative = UrbanCanopyParams::default().with_depths(&[-0.1, 0.5]);
    assert_eq!(derive(&negative).unwrap_err().parameter(), "depths");

    let unordered = UrbanCanopyParams::default().with_depths(&[0.0, 1.0, 0.5]);
    assert_eq!(derive(&unordered).unwrap_err().parameter(), "depths");

    let custom = UrbanCanopyParams::default().with_depths(&[0.05, 0.5, 5.0]);
    assert_eq!(derive(&custom).unwrap().layer_count(), 3);
}

#[test]
fn test_substrate_layers_must_match_depths() {
    let params = UrbanCanopyParams::default()
        .with_depths(&[0.0, 1.0, 2.0])
        .with_substrate_heat_capacity(vec![HeatCapacity::new(1.0e6); 2]);
    match derive(&params) {
        Err(SuryError::Shape(e)) => {
            assert_eq!(e.parameter, "substrate_heat_capacity");
            assert_eq!((e.expected, e.actual), (3, 2));
        }
        other => panic!("expected shape error, got {:?}", other),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 6: DETERMINISM, BATCHING AND SERIALISATION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_repeated_derivation_is_bit_identical() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let params = random_valid_params(&mut rng);
        let first = derive(&params).unwrap();
        let second = derive(&params).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.kbm1.to_bits(), second.kbm1.to_bits());
    }
}

#[test]
fn test_batch_matches_sequential_derivation() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut cells: Vec<_> = (0..256).map(|_| random_valid_params(&mut rng)).collect();
    cells[17] = UrbanCanopyParams::default().with_height_to_width(5.0);

    let batch = derive_batch(&cells);
    assert_eq!(batch.len(), cells.len());
    for (cell, result) in cells.iter().zip(&batch) {
        assert_eq!(result, &derive(cell));
    }
    assert!(batch[17].is_err());
}

#[test]
fn test_partial_json_fills_defaults() {
    let json = r#"{
        "building_height": 20.0,
        "roof_fraction": 0.5,
        "soil_heat_capacity": [1.0e6, 1.1e6, 1.2e6, 1.3e6, 1.4e6, 1.5e6,
                               1.6e6, 1.7e6, 1.8e6, 1.9e6, 2.0e6]
    }"#;
    let params: UrbanCanopyParams = serde_json::from_str(json).unwrap();

    assert_eq!(*params.building_height, 20.0);
    assert_eq!(params.albedo, 0.101);
    assert_eq!(
        params.soil_conductivity,
        LayerProperty::Uniform(ThermalConductivity::SOIL)
    );
    assert!(matches!(params.soil_heat_capacity, LayerProperty::PerLayer(ref v) if v.len() == 11));

    let bulk = derive(&params).unwrap();
    let encoded = serde_json::to_string(&bulk).unwrap();
    let decoded: BulkParameters = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.layer_count(), 11);
    assert_relative_eq!(
        bulk.surface_area_index,
        surface_area_index(1.5, 0.5),
        max_relative = 1e-15
    );
}

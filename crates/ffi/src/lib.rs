//! C ABI for the SURY bulk parameter derivation.
//!
//! ```c
//! SuryInputs inputs = sury_default_inputs();
//! inputs.building_height = 20.0;
//!
//! double lam[11], cv[11];
//! SuryOutputs out;
//! SuryErrorCode err = sury_derive(&inputs, NULL, 11, &out, lam, cv);
//! if (err != Ok) {
//!     fprintf(stderr, "SURY: %s\n", sury_get_last_error());
//! }
//! ```
//!
//! Every call records its outcome in thread-local storage, retrievable with
//! `sury_get_last_error` / `sury_get_last_error_code`.

mod error;
mod helpers;
mod inputs;

use std::slice;

use sury_core::{derive, DEFAULT_DEPTHS};

pub use error::{sury_get_last_error, sury_get_last_error_code, SuryErrorCode};
pub use inputs::{SuryInputs, SuryOutputs};

use crate::error::DefaultSuryError;
use crate::helpers::{clear_last_error, track_error};

/// Baseline urban-canyon inputs (H = 15 m, H/W = 1.5, roof fraction 0.667).
#[no_mangle]
pub extern "C" fn sury_default_inputs() -> SuryInputs {
    SuryInputs::default()
}

/// Number of layers of the default depth grid.
#[no_mangle]
pub extern "C" fn sury_default_layer_count() -> usize {
    DEFAULT_DEPTHS.len()
}

/// Derive the bulk parameters for one urban-canopy configuration.
///
/// # Parameters
/// - `inputs`: urban-canopy inputs
/// - `depths`: `n_depths` strictly increasing layer depths in meters, or null
///   for the default 11-layer grid
/// - `n_depths`: number of layers
/// - `out`: receives the scalar bulk parameters
/// - `out_conductivity`, `out_heat_capacity`: buffers of `n_depths` doubles
///   receiving the bulk heat conductivity and heat capacity profiles
///
/// # Returns
/// - `Ok` on success, with all outputs written
/// - `NullPointer` if `inputs` or an output pointer is null
/// - `DomainError` if an input lies outside its valid range
/// - `ShapeError` if `n_depths` does not fit the depth grid
///
/// Outputs are left untouched on failure.
///
/// # Safety
/// Non-null pointers must be valid for the documented number of elements.
#[no_mangle]
pub unsafe extern "C" fn sury_derive(
    inputs: *const SuryInputs,
    depths: *const f64,
    n_depths: usize,
    out: *mut SuryOutputs,
    out_conductivity: *mut f64,
    out_heat_capacity: *mut f64,
) -> SuryErrorCode {
    if inputs.is_null() {
        return track_error(&DefaultSuryError::null_pointer("inputs"));
    }
    if out.is_null() {
        return track_error(&DefaultSuryError::null_pointer("out"));
    }
    if out_conductivity.is_null() {
        return track_error(&DefaultSuryError::null_pointer("out_conductivity"));
    }
    if out_heat_capacity.is_null() {
        return track_error(&DefaultSuryError::null_pointer("out_heat_capacity"));
    }

    let depths: &[f64] = if depths.is_null() {
        if n_depths != DEFAULT_DEPTHS.len() {
            return track_error(&DefaultSuryError::invalid_layer_count(
                "n_depths",
                DEFAULT_DEPTHS.len(),
                n_depths,
            ));
        }
        &DEFAULT_DEPTHS
    } else {
        // SAFETY: caller guarantees `depths` holds `n_depths` values
        unsafe { slice::from_raw_parts(depths, n_depths) }
    };

    // SAFETY: `inputs` checked non-null above
    let params = unsafe { &*inputs }.to_params(depths);

    let bulk = match derive(&params) {
        Ok(bulk) => bulk,
        Err(e) => return track_error(&DefaultSuryError::from(&e)),
    };

    // SAFETY: output pointers checked non-null; caller guarantees `n_depths` capacity
    unsafe {
        *out = SuryOutputs::from(&bulk);
        let conductivity = slice::from_raw_parts_mut(out_conductivity, n_depths);
        let heat_capacity = slice::from_raw_parts_mut(out_heat_capacity, n_depths);
        for (layer, (k, c)) in bulk.conductivity.iter().zip(&bulk.heat_capacity).enumerate() {
            conductivity[layer] = **k;
            heat_capacity[layer] = **c;
        }
    }

    clear_last_error();
    SuryErrorCode::Ok
}

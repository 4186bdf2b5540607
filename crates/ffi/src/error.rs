use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use sury_core::SuryError;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait SuryFfiError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> SuryErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `SuryFfiError` for FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultSuryError {
    code: SuryErrorCode,
    msg: String,
}

impl DefaultSuryError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: SuryErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a buffer length that does not match the depth grid.
    pub fn invalid_layer_count(param_name: &str, expected: usize, actual: usize) -> Self {
        Self {
            code: SuryErrorCode::ShapeError,
            msg: format!("Parameter '{param_name}' has {actual} layers, expected {expected}"),
        }
    }
}

impl From<&SuryError> for DefaultSuryError {
    fn from(error: &SuryError) -> Self {
        let code = match error {
            SuryError::Domain(_) => SuryErrorCode::DomainError,
            SuryError::Shape(_) => SuryErrorCode::ShapeError,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl SuryFfiError for DefaultSuryError {
    fn code(&self) -> SuryErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by the SURY functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuryErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// An input lies outside its physically valid range.
    DomainError = 2,

    /// Array lengths do not match the depth grid.
    ShapeError = 3,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    static LAST_ERROR: RefCell<(Option<CString>, SuryErrorCode)> = const { RefCell::new((None, SuryErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, SuryErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, SuryErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded.
///
/// # Lifetime
/// The returned pointer is valid until the next SURY call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// SuryInputs inputs = sury_default_inputs();
/// inputs.height_to_width = 3.0;
/// if (sury_derive(&inputs, NULL, 11, &out, lam, cv) != Ok) {
///     printf("SURY failed: %s\n", sury_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn sury_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code (`Ok` if the last call succeeded).
#[no_mangle]
pub extern "C" fn sury_get_last_error_code() -> SuryErrorCode {
    with_last_error(|(_cstring, code)| *code)
}

use crate::error::{with_last_error_mut, SuryErrorCode, SuryFfiError};
use std::ffi::CString;

/// Set the thread-local error message and code.
/// Accepts any type implementing `SuryFfiError` trait.
pub(crate) fn set_last_error(error: &impl SuryFfiError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl SuryFfiError) -> SuryErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations so stale diagnostics never leak.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = SuryErrorCode::Ok;
    });
}

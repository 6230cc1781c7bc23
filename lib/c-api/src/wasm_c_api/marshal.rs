//! Moving whole argument and result lists across the bridge.
//!
//! A host function called by the engine receives its parameters as a
//! caller-owned array of `wasmtime_val_t` and must fill a second array with
//! its results. These helpers decode the first, check what the host
//! produced against the declared result kinds, and encode it into the
//! second.

use super::externals::wasmtime_extern_t;
use super::value::wasmtime_val_t;
use std::slice;
use wasmtime_bridge_types::{BridgeError, BridgeResult, Extern, Val, ValKind};

/// Decodes a list of raw values.
pub fn read_vals(raw: &[wasmtime_val_t]) -> BridgeResult<Vec<Val>> {
    tracing::trace!(len = raw.len(), "reading values");
    raw.iter().map(Val::try_from).collect()
}

/// Encodes `vals` into `raw`, which must have exactly the same length.
///
/// On an arity mismatch nothing is written.
pub fn write_vals(raw: &mut [wasmtime_val_t], vals: &[Val]) -> BridgeResult<()> {
    if raw.len() != vals.len() {
        return Err(BridgeError::ArityMismatch {
            expected: raw.len(),
            got: vals.len(),
        });
    }
    tracing::trace!(len = vals.len(), "writing values");
    for (slot, val) in raw.iter_mut().zip(vals) {
        *slot = val.into();
    }
    Ok(())
}

/// Checks that `vals` has the declared number of values, each of the
/// declared kind.
pub fn check_kinds(vals: &[Val], kinds: &[ValKind]) -> BridgeResult<()> {
    if vals.len() != kinds.len() {
        return Err(BridgeError::ArityMismatch {
            expected: kinds.len(),
            got: vals.len(),
        });
    }
    match vals
        .iter()
        .zip(kinds)
        .position(|(val, kind)| val.kind() != *kind)
    {
        Some(index) => Err(BridgeError::ResultKindMismatch {
            index,
            expected: kinds[index].name(),
            got: vals[index].kind().name(),
        }),
        None => Ok(()),
    }
}

/// Views a caller-owned array of values.
///
/// # Safety
///
/// Unless `len` is zero, `ptr` must point to `len` initialised values that
/// stay alive and unmodified for `'a`.
pub unsafe fn val_slice<'a>(ptr: *const wasmtime_val_t, len: usize) -> &'a [wasmtime_val_t] {
    if len == 0 {
        &[]
    } else {
        unsafe { slice::from_raw_parts(ptr, len) }
    }
}

/// Views a caller-owned array of values for writing.
///
/// # Safety
///
/// Unless `len` is zero, `ptr` must point to `len` values that nothing else
/// accesses for `'a`.
pub unsafe fn val_slice_mut<'a>(ptr: *mut wasmtime_val_t, len: usize) -> &'a mut [wasmtime_val_t] {
    if len == 0 {
        &mut []
    } else {
        unsafe { slice::from_raw_parts_mut(ptr, len) }
    }
}

/// Decodes a raw extern.
pub fn read_extern(raw: &wasmtime_extern_t) -> BridgeResult<Extern> {
    Extern::try_from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::ptr;

    #[test]
    fn empty_lists_may_be_null() {
        let args = unsafe { val_slice(ptr::null(), 0) };
        assert_eq!(read_vals(args), Ok(vec![]));
        let results = unsafe { val_slice_mut(ptr::null_mut(), 0) };
        assert_eq!(write_vals(results, &[]), Ok(()));
    }

    #[test]
    fn result_kinds_are_checked_in_order() {
        let kinds = [ValKind::I32, ValKind::F64];
        assert_eq!(check_kinds(&[Val::I32(1), Val::from_f64(2.0)], &kinds), Ok(()));
        assert_eq!(
            check_kinds(&[Val::I32(1)], &kinds),
            Err(BridgeError::ArityMismatch {
                expected: 2,
                got: 1
            })
        );
        assert_eq!(
            check_kinds(&[Val::I32(1), Val::I64(2)], &kinds),
            Err(BridgeError::ResultKindMismatch {
                index: 1,
                expected: "f64",
                got: "i64",
            })
        );
    }
}

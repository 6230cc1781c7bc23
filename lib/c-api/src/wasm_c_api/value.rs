use super::accessor::{UnionPayload, Variant, get, set};
use super::externals::wasmtime_func_t;
use super::shims::{ValExternRef, ValF32, ValF64, ValFuncRef, ValI32, ValI64};
use std::fmt;
use wasmtime_bridge_types::{BridgeError, BridgeResult, ExternRef, StoreId, Val, ValKind};

#[allow(non_camel_case_types)]
pub type wasmtime_valkind_t = u8;

/// An external reference as the engine lays it out.
///
/// A `store_id` of zero is the null reference.
#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct wasmtime_externref_t {
    /// Identifier of the store owning the reference, zero for null.
    pub store_id: u64,
    /// Private field for the engine.
    pub __private1: u32,
    /// Private field for the engine.
    pub __private2: u32,
}

impl wasmtime_externref_t {
    /// Whether this is the null reference.
    pub const fn is_null(&self) -> bool {
        self.store_id == 0
    }

    /// Reads the handle, `None` for null.
    pub fn to_native(&self) -> Option<ExternRef> {
        StoreId::from_raw(self.store_id)
            .map(|store| ExternRef::from_parts(store, [self.__private1, self.__private2]))
    }
}

impl UnionPayload for wasmtime_externref_t {}

impl From<ExternRef> for wasmtime_externref_t {
    fn from(externref: ExternRef) -> Self {
        let [__private1, __private2] = externref.private();
        Self {
            store_id: externref.store().as_raw(),
            __private1,
            __private2,
        }
    }
}

impl From<Option<ExternRef>> for wasmtime_externref_t {
    fn from(externref: Option<ExternRef>) -> Self {
        externref.map(Self::from).unwrap_or_default()
    }
}

/// Storage shared by every alternative of a value, sized to the largest.
#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Clone, Copy)]
pub union wasmtime_valunion_t {
    pub i32: i32,
    pub i64: i64,
    pub f32: f32,
    pub f64: f64,
    pub externref: wasmtime_externref_t,
    pub funcref: wasmtime_func_t,
}

impl Default for wasmtime_valunion_t {
    fn default() -> Self {
        // SAFETY: all-zero bytes are a valid integer, float and handle, and
        // initialise every byte of the storage.
        unsafe { std::mem::zeroed() }
    }
}

/// A value as the engine lays it out: a tag beside an untagged union.
///
/// The default value is the `i32` zero with fully zeroed storage.
#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Clone, Copy, Default)]
pub struct wasmtime_val_t {
    pub kind: wasmtime_valkind_t,
    pub of: wasmtime_valunion_t,
}

impl fmt::Debug for wasmtime_val_t {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("wasmtime_val_t");
        s.field("kind", &self.kind);
        match Val::try_from(self) {
            Ok(val) => s.field("of", &val),
            Err(err) => s.field("of", &format_args!("<{err}>")),
        };
        s.finish()
    }
}

impl TryFrom<&wasmtime_val_t> for Val {
    type Error = BridgeError;

    fn try_from(raw: &wasmtime_val_t) -> BridgeResult<Self> {
        Ok(match raw.kind()? {
            ValKind::I32 => Val::I32(get::<ValI32>(raw)?),
            ValKind::I64 => Val::I64(get::<ValI64>(raw)?),
            ValKind::F32 => Val::F32(get::<ValF32>(raw)?.to_bits()),
            ValKind::F64 => Val::F64(get::<ValF64>(raw)?.to_bits()),
            ValKind::FuncRef => Val::FuncRef(get::<ValFuncRef>(raw)?.to_native()),
            ValKind::ExternRef => Val::ExternRef(get::<ValExternRef>(raw)?.to_native()),
        })
    }
}

impl TryFrom<wasmtime_val_t> for Val {
    type Error = BridgeError;

    fn try_from(raw: wasmtime_val_t) -> BridgeResult<Self> {
        (&raw).try_into()
    }
}

impl From<&Val> for wasmtime_val_t {
    fn from(val: &Val) -> Self {
        let mut raw = Self::default();
        match *val {
            Val::I32(v) => set::<ValI32>(&mut raw, v),
            Val::I64(v) => set::<ValI64>(&mut raw, v),
            Val::F32(bits) => set::<ValF32>(&mut raw, f32::from_bits(bits)),
            Val::F64(bits) => set::<ValF64>(&mut raw, f64::from_bits(bits)),
            Val::FuncRef(func) => set::<ValFuncRef>(&mut raw, func.into()),
            Val::ExternRef(externref) => set::<ValExternRef>(&mut raw, externref.into()),
        }
        raw
    }
}

impl From<Val> for wasmtime_val_t {
    fn from(val: Val) -> Self {
        (&val).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wasmtime_bridge_types::{Func, VariantType};

    #[test]
    fn scalars_convert_both_ways() {
        for val in [
            Val::I32(i32::MIN),
            Val::I64(i64::MAX),
            Val::from_f32(-0.0),
            Val::from_f64(f64::INFINITY),
            Val::F64(0x7ff0_0000_0000_0001),
        ] {
            let raw = wasmtime_val_t::from(val);
            assert_eq!(raw.kind, val.kind().tag());
            assert_eq!(Val::try_from(&raw), Ok(val));
        }
    }

    #[test]
    fn null_references_are_zero_handles() {
        let raw = wasmtime_val_t::from(Val::null_func_ref());
        assert_eq!(raw.kind, ValKind::FuncRef.tag());
        assert!(unsafe { raw.of.funcref }.is_null());
        assert_eq!(Val::try_from(raw), Ok(Val::FuncRef(None)));

        let raw = wasmtime_val_t::from(Val::null_extern_ref());
        assert!(unsafe { raw.of.externref }.is_null());
        assert_eq!(Val::try_from(raw), Ok(Val::ExternRef(None)));
    }

    #[test]
    fn live_references_keep_their_identity() {
        let store = StoreId::default();
        let func = Func::from_parts(store, 17);
        let externref = ExternRef::from_parts(store, [2, 3]);
        assert_eq!(
            Val::try_from(wasmtime_val_t::from(Val::from(func))),
            Ok(Val::FuncRef(Some(func)))
        );
        assert_eq!(
            Val::try_from(wasmtime_val_t::from(Val::from(externref))),
            Ok(Val::ExternRef(Some(externref)))
        );
    }

    #[test]
    fn bad_tags_are_errors() {
        let raw = wasmtime_val_t {
            kind: ValKind::V128_TAG,
            ..Default::default()
        };
        assert_eq!(
            Val::try_from(&raw),
            Err(BridgeError::UnsupportedKind {
                variant: VariantType::Value,
                kind: "v128"
            })
        );
        let raw = wasmtime_val_t {
            kind: 200,
            ..Default::default()
        };
        assert!(format!("{raw:?}").contains("unknown `wasmtime_val` kind tag 200"));
    }
}

use crate::wasm_c_api::accessor::UnionPayload;
use std::mem::{offset_of, size_of};
use std::ops::Range;
use wasmtime_bridge_types::{Func, StoreId};

/// A function handle as the engine lays it out.
///
/// A `store_id` of zero is the null function reference.
#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct wasmtime_func_t {
    /// Identifier of the store owning the function, zero for null.
    pub store_id: u64,
    /// Private field for the engine.
    pub __private: usize,
}

impl wasmtime_func_t {
    /// Whether this is the null function reference.
    pub const fn is_null(&self) -> bool {
        self.store_id == 0
    }

    /// Reads the handle, `None` for null.
    pub fn to_native(&self) -> Option<Func> {
        StoreId::from_raw(self.store_id).map(|store| Func::from_parts(store, self.__private))
    }
}

impl UnionPayload for wasmtime_func_t {
    // Empty on 64-bit targets.
    const PADDING: &'static [Range<usize>] =
        &[offset_of!(Self, __private) + size_of::<usize>()..size_of::<Self>()];
}

impl From<Func> for wasmtime_func_t {
    fn from(func: Func) -> Self {
        Self {
            store_id: func.store().as_raw(),
            __private: func.private(),
        }
    }
}

impl From<Option<Func>> for wasmtime_func_t {
    fn from(func: Option<Func>) -> Self {
        func.map(Self::from).unwrap_or_default()
    }
}

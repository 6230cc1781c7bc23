use crate::wasm_c_api::accessor::UnionPayload;
use std::mem::{offset_of, size_of};
use std::ops::Range;
use wasmtime_bridge_types::{Global, StoreId};

/// A global handle as the engine lays it out.
#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct wasmtime_global_t {
    /// Identifier of the store owning the global.
    pub store_id: u64,
    /// Private field for the engine.
    pub __private1: u32,
    /// Private field for the engine.
    pub __private2: u32,
    /// Private field for the engine.
    pub __private3: u32,
}

impl wasmtime_global_t {
    /// Reads the handle, `None` if the store id is zero.
    pub fn to_native(&self) -> Option<Global> {
        StoreId::from_raw(self.store_id).map(|store| {
            Global::from_parts(store, [self.__private1, self.__private2, self.__private3])
        })
    }
}

impl UnionPayload for wasmtime_global_t {
    const PADDING: &'static [Range<usize>] =
        &[offset_of!(Self, __private3) + size_of::<u32>()..size_of::<Self>()];
}

impl From<Global> for wasmtime_global_t {
    fn from(global: Global) -> Self {
        let [__private1, __private2, __private3] = global.private();
        Self {
            store_id: global.store().as_raw(),
            __private1,
            __private2,
            __private3,
        }
    }
}

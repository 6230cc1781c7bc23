use super::wasmtime_store_slot_t;
use crate::wasm_c_api::accessor::UnionPayload;
use std::mem::{offset_of, size_of};
use std::ops::Range;
use wasmtime_bridge_types::{StoreId, Table};

/// A table handle as the engine lays it out. Same shape as a memory handle.
#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct wasmtime_table_t {
    /// Store id and first private word.
    pub slot: wasmtime_store_slot_t,
    /// Private field for the engine.
    pub __private2: u32,
}

impl wasmtime_table_t {
    /// Reads the handle, `None` if the store id is zero.
    pub fn to_native(&self) -> Option<Table> {
        StoreId::from_raw(self.slot.store_id)
            .map(|store| Table::from_parts(store, [self.slot.__private1, self.__private2]))
    }
}

impl UnionPayload for wasmtime_table_t {
    const PADDING: &'static [Range<usize>] = &[
        wasmtime_store_slot_t::PADDING,
        offset_of!(Self, __private2) + size_of::<u32>()..size_of::<Self>(),
    ];
}

impl From<Table> for wasmtime_table_t {
    fn from(table: Table) -> Self {
        let [private1, private2] = table.private();
        Self {
            slot: wasmtime_store_slot_t {
                store_id: table.store().as_raw(),
                __private1: private1,
            },
            __private2: private2,
        }
    }
}

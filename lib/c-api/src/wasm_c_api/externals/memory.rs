use crate::wasm_c_api::accessor::UnionPayload;
use std::mem::{offset_of, size_of};
use std::ops::Range;
use wasmtime_bridge_types::{Memory, StoreId};

/// Leading part of the memory and table handles.
///
/// The engine declares it as an anonymous struct so that the trailing
/// private word lands after its padding; keeping it as a real struct here
/// reproduces the same offsets.
#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct wasmtime_store_slot_t {
    /// Identifier of the store owning the object, never zero for a live one.
    pub store_id: u64,
    /// Private field for the engine.
    pub __private1: u32,
}

impl wasmtime_store_slot_t {
    /// Padding between the first private word and the end of the slot.
    pub(crate) const PADDING: Range<usize> =
        offset_of!(Self, __private1) + size_of::<u32>()..size_of::<Self>();
}

/// A linear memory handle as the engine lays it out.
#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct wasmtime_memory_t {
    /// Store id and first private word.
    pub slot: wasmtime_store_slot_t,
    /// Private field for the engine.
    pub __private2: u32,
}

impl wasmtime_memory_t {
    /// Reads the handle, `None` if the store id is zero.
    pub fn to_native(&self) -> Option<Memory> {
        StoreId::from_raw(self.slot.store_id)
            .map(|store| Memory::from_parts(store, [self.slot.__private1, self.__private2]))
    }
}

impl UnionPayload for wasmtime_memory_t {
    const PADDING: &'static [Range<usize>] = &[
        wasmtime_store_slot_t::PADDING,
        offset_of!(Self, __private2) + size_of::<u32>()..size_of::<Self>(),
    ];
}

impl From<Memory> for wasmtime_memory_t {
    fn from(memory: Memory) -> Self {
        let [private1, private2] = memory.private();
        Self {
            slot: wasmtime_store_slot_t {
                store_id: memory.store().as_raw(),
                __private1: private1,
            },
            __private2: private2,
        }
    }
}

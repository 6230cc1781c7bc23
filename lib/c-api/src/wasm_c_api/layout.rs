//! Compile-time checks that the raw layouts match the engine's header.
//!
//! A failing assertion here means the engine changed a layout: update the
//! affected types and the registry, then bump
//! [`LAYOUT_REVISION`](super::registry::LAYOUT_REVISION).

use super::externals::{
    wasmtime_extern_t, wasmtime_extern_union_t, wasmtime_global_t, wasmtime_memory_t,
    wasmtime_store_slot_t, wasmtime_table_t,
};
use super::registry::REGISTRY;
use super::value::{wasmtime_val_t, wasmtime_valunion_t};
use std::mem::{align_of, offset_of, size_of};
use wasmtime_bridge_types::VariantType;

macro_rules! assert_layout {
    ($ty:ty, size = $size:expr, align = $align:expr) => {
        const _: () = assert!(size_of::<$ty>() == $size, concat!("size of ", stringify!($ty)));
        const _: () = assert!(align_of::<$ty>() == $align, concat!("align of ", stringify!($ty)));
    };
}

#[cfg(target_pointer_width = "64")]
mod lp64 {
    use super::*;
    use crate::wasm_c_api::externals::wasmtime_func_t;
    use crate::wasm_c_api::value::wasmtime_externref_t;

    assert_layout!(wasmtime_func_t, size = 16, align = 8);
    assert_layout!(wasmtime_externref_t, size = 16, align = 8);
    assert_layout!(wasmtime_store_slot_t, size = 16, align = 8);
    assert_layout!(wasmtime_memory_t, size = 24, align = 8);
    assert_layout!(wasmtime_table_t, size = 24, align = 8);
    assert_layout!(wasmtime_global_t, size = 24, align = 8);
    assert_layout!(wasmtime_valunion_t, size = 16, align = 8);
    assert_layout!(wasmtime_val_t, size = 24, align = 8);
    assert_layout!(wasmtime_extern_union_t, size = 24, align = 8);
    assert_layout!(wasmtime_extern_t, size = 32, align = 8);
}

// The tag sits beside the union, never inside it.
const _: () = assert!(offset_of!(wasmtime_val_t, kind) == 0);
const _: () = assert!(offset_of!(wasmtime_val_t, of) == align_of::<wasmtime_valunion_t>());
const _: () = assert!(offset_of!(wasmtime_extern_t, kind) == 0);
const _: () = assert!(offset_of!(wasmtime_extern_t, of) == align_of::<wasmtime_extern_union_t>());

// The slot leads memories and tables.
const _: () = assert!(offset_of!(wasmtime_memory_t, slot) == 0);
const _: () = assert!(offset_of!(wasmtime_table_t, slot) == 0);

// The trailing private word of memories and tables follows the padded slot.
const _: () = assert!(offset_of!(wasmtime_memory_t, __private2) == size_of::<wasmtime_store_slot_t>());
const _: () = assert!(offset_of!(wasmtime_table_t, __private2) == size_of::<wasmtime_store_slot_t>());
const _: () = assert!(offset_of!(wasmtime_global_t, __private1) == 8);

// Every payload fits its union.
const _: () = {
    let mut i = 0;
    while i < REGISTRY.len() {
        let entry = &REGISTRY[i];
        let (size, align) = match entry.variant {
            VariantType::Value => {
                (size_of::<wasmtime_valunion_t>(), align_of::<wasmtime_valunion_t>())
            }
            VariantType::Extern => (
                size_of::<wasmtime_extern_union_t>(),
                align_of::<wasmtime_extern_union_t>(),
            ),
        };
        assert!(entry.payload_size <= size);
        assert!(entry.payload_align <= align);
        i += 1;
    }
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wasm_c_api::externals::wasmtime_func_t;
    use pretty_assertions::assert_eq;

    #[test]
    fn externs_are_the_same_size() {
        assert_eq!(size_of::<wasmtime_extern_union_t>(), size_of::<wasmtime_memory_t>());
        assert_eq!(size_of::<wasmtime_extern_union_t>(), size_of::<wasmtime_global_t>());
        assert_eq!(size_of::<wasmtime_memory_t>(), size_of::<wasmtime_table_t>());

        assert_eq!(align_of::<wasmtime_extern_t>(), align_of::<wasmtime_func_t>());
        assert_eq!(align_of::<wasmtime_extern_t>(), align_of::<wasmtime_memory_t>());
        assert_eq!(align_of::<wasmtime_extern_t>(), align_of::<wasmtime_global_t>());
        assert_eq!(align_of::<wasmtime_extern_t>(), align_of::<wasmtime_table_t>());
    }

    #[test]
    fn registry_sizes_match_the_types() {
        for entry in REGISTRY {
            assert!(entry.payload_size > 0, "{}", entry.alternative);
            assert!(entry.payload_align.is_power_of_two());
        }
        assert_eq!(
            wasmtime_val_t::accessor_entry(wasmtime_bridge_types::ValKind::FuncRef).payload_size,
            size_of::<wasmtime_func_t>()
        );
        assert_eq!(
            wasmtime_extern_t::accessor_entry(wasmtime_bridge_types::ExternKind::Global)
                .payload_size,
            size_of::<wasmtime_global_t>()
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn padding_ranges() {
        use crate::wasm_c_api::accessor::UnionPayload;
        use crate::wasm_c_api::value::wasmtime_externref_t;

        assert_eq!(wasmtime_memory_t::PADDING, &[12..16, 20..24]);
        assert_eq!(wasmtime_table_t::PADDING, &[12..16, 20..24]);
        assert_eq!(wasmtime_global_t::PADDING, &[20..24]);
        assert!(wasmtime_func_t::PADDING.iter().all(|r| r.is_empty()));
        assert!(wasmtime_externref_t::PADDING.is_empty());
    }
}

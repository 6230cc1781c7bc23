//! The accessor registry and the C shims generated from it.
//!
//! This table is the whole contract with the engine's union layouts: one
//! row per alternative, in the engine's field names and C payload types.
//! Adding, removing or resizing an alternative in the engine means editing
//! this table and bumping [`LAYOUT_REVISION`](super::registry::LAYOUT_REVISION).

use super::externals::{
    wasmtime_extern_t, wasmtime_func_t, wasmtime_global_t, wasmtime_memory_t, wasmtime_table_t,
};
use super::value::{wasmtime_externref_t, wasmtime_val_t};
use wasmtime_bridge_types::{ExternKind, ValKind};

union_accessors! {
    Val(wasmtime_val, Value): wasmtime_val_t as ValKind {
        I32 => i32: i32 = "int32_t",
        I64 => i64: i64 = "int64_t",
        F32 => f32: f32 = "float",
        F64 => f64: f64 = "double",
        ExternRef => externref: wasmtime_externref_t = "wasmtime_externref_t",
        FuncRef => funcref: wasmtime_func_t = "wasmtime_func_t",
    }

    Extern(wasmtime_extern, Extern): wasmtime_extern_t as ExternKind {
        Func => func: wasmtime_func_t = "wasmtime_func_t",
        Memory => memory: wasmtime_memory_t = "wasmtime_memory_t",
        Table => table: wasmtime_table_t = "wasmtime_table_t",
        Global => global: wasmtime_global_t = "wasmtime_global_t",
    }
}

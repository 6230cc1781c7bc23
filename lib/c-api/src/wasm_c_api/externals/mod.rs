mod function;
mod global;
mod memory;
mod table;

pub use function::*;
pub use global::*;
pub use memory::*;
pub use table::*;

use super::accessor::{get, set, Variant};
use super::shims::{ExternFunc, ExternGlobal, ExternMemory, ExternTable};
use std::fmt;
use wasmtime_bridge_types::{BridgeError, BridgeResult, Extern, ExternKind};

#[allow(non_camel_case_types)]
pub type wasmtime_extern_kind_t = u8;

/// Storage shared by every alternative of an extern.
///
/// Nothing in here says which field is live; that is recorded in
/// [`wasmtime_extern_t::kind`].
#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Clone, Copy)]
pub union wasmtime_extern_union_t {
    pub func: wasmtime_func_t,
    pub global: wasmtime_global_t,
    pub table: wasmtime_table_t,
    pub memory: wasmtime_memory_t,
}

impl Default for wasmtime_extern_union_t {
    fn default() -> Self {
        // SAFETY: every field is plain integers, for which all-zero bytes are
        // a valid value. Zeroing the whole union keeps reads through another
        // field deterministic.
        unsafe { std::mem::zeroed() }
    }
}

/// An extern as the engine lays it out: a tag beside an untagged union.
#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Clone, Copy, Default)]
pub struct wasmtime_extern_t {
    pub kind: wasmtime_extern_kind_t,
    pub of: wasmtime_extern_union_t,
}

impl fmt::Debug for wasmtime_extern_t {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("wasmtime_extern_t");
        s.field("kind", &self.kind);
        match Extern::try_from(self) {
            Ok(ext) => s.field("of", &ext),
            Err(err) => s.field("of", &format_args!("<{err}>")),
        };
        s.finish()
    }
}

impl TryFrom<&wasmtime_extern_t> for Extern {
    type Error = BridgeError;

    fn try_from(raw: &wasmtime_extern_t) -> BridgeResult<Self> {
        let kind = raw.kind()?;
        let null = || BridgeError::NullHandle {
            alternative: kind.name(),
        };
        Ok(match kind {
            ExternKind::Func => {
                Extern::Func(get::<ExternFunc>(raw)?.to_native().ok_or_else(null)?)
            }
            ExternKind::Global => {
                Extern::Global(get::<ExternGlobal>(raw)?.to_native().ok_or_else(null)?)
            }
            ExternKind::Table => {
                Extern::Table(get::<ExternTable>(raw)?.to_native().ok_or_else(null)?)
            }
            ExternKind::Memory => {
                Extern::Memory(get::<ExternMemory>(raw)?.to_native().ok_or_else(null)?)
            }
        })
    }
}

impl TryFrom<wasmtime_extern_t> for Extern {
    type Error = BridgeError;

    fn try_from(raw: wasmtime_extern_t) -> BridgeResult<Self> {
        (&raw).try_into()
    }
}

impl From<Extern> for wasmtime_extern_t {
    fn from(ext: Extern) -> Self {
        let mut raw = Self::default();
        match ext {
            Extern::Func(func) => set::<ExternFunc>(&mut raw, func.into()),
            Extern::Global(global) => set::<ExternGlobal>(&mut raw, global.into()),
            Extern::Table(table) => set::<ExternTable>(&mut raw, table.into()),
            Extern::Memory(memory) => set::<ExternMemory>(&mut raw, memory.into()),
        }
        raw
    }
}

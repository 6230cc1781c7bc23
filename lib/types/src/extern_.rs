use crate::error::{BridgeError, BridgeResult};
use crate::handles::{Func, Global, Memory, Table};
use crate::kind::{ExternKind, VariantType};

/// An item a module imports or exports: exactly one of a function, global,
/// table or memory, each held by a non-owning handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extern {
    /// A function.
    Func(Func),
    /// A global.
    Global(Global),
    /// A table.
    Table(Table),
    /// A linear memory.
    Memory(Memory),
}

macro_rules! accessors {
    ($(($variant:ident($ty:ty) $get:ident $try_get:ident))*) => ($(
        /// Returns the handle if this extern is of that kind.
        #[inline]
        pub fn $get(&self) -> Option<$ty> {
            match self {
                Self::$variant(handle) => Some(*handle),
                _ => None,
            }
        }

        /// Returns the handle, failing with [`BridgeError::TagMismatch`] if
        /// this extern is of another kind.
        #[inline]
        pub fn $try_get(&self) -> BridgeResult<$ty> {
            self.$get().ok_or_else(|| BridgeError::TagMismatch {
                variant: VariantType::Extern,
                requested: ExternKind::$variant.name(),
                active: self.kind().name(),
            })
        }
    )*)
}

impl Extern {
    /// Returns the kind of this extern.
    pub const fn kind(&self) -> ExternKind {
        match self {
            Self::Func(_) => ExternKind::Func,
            Self::Global(_) => ExternKind::Global,
            Self::Table(_) => ExternKind::Table,
            Self::Memory(_) => ExternKind::Memory,
        }
    }

    accessors! {
        (Func(Func) func try_func)
        (Global(Global) global try_global)
        (Table(Table) table try_table)
        (Memory(Memory) memory try_memory)
    }
}

impl From<Func> for Extern {
    fn from(func: Func) -> Self {
        Self::Func(func)
    }
}

impl From<Global> for Extern {
    fn from(global: Global) -> Self {
        Self::Global(global)
    }
}

impl From<Table> for Extern {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

impl From<Memory> for Extern {
    fn from(memory: Memory) -> Self {
        Self::Memory(memory)
    }
}

use crate::error::{BridgeError, BridgeResult};
use enum_iterator::IntoEnumIterator;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;

/// The two variant families that cross the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoEnumIterator)]
pub enum VariantType {
    /// A single WebAssembly value (`wasmtime_val_t`).
    Value,
    /// An imported or exported item (`wasmtime_extern_t`).
    Extern,
}

impl VariantType {
    /// The C name of the variant, without the `_t` suffix.
    pub const fn c_name(self) -> &'static str {
        match self {
            Self::Value => "wasmtime_val",
            Self::Extern => "wasmtime_extern",
        }
    }
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_name())
    }
}

/// The tag of a value, encoded with the engine's codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoEnumIterator, TryFromPrimitive, IntoPrimitive,
)]
#[repr(u8)]
pub enum ValKind {
    /// A 32-bit integer.
    I32 = 0,
    /// A 64-bit integer.
    I64 = 1,
    /// A 32-bit float.
    F32 = 2,
    /// A 64-bit float.
    F64 = 3,
    /// A function reference.
    FuncRef = 5,
    /// An external reference.
    ExternRef = 6,
}

impl ValKind {
    /// Engine code for 128-bit vectors, which the bridge does not carry.
    pub const V128_TAG: u8 = 4;
    /// Engine code for internal references, which the bridge does not carry.
    pub const ANYREF_TAG: u8 = 7;

    /// Decodes a raw tag byte.
    pub fn from_tag(tag: u8) -> BridgeResult<Self> {
        Self::try_from(tag).map_err(|_| match tag {
            Self::V128_TAG => BridgeError::UnsupportedKind {
                variant: VariantType::Value,
                kind: "v128",
            },
            Self::ANYREF_TAG => BridgeError::UnsupportedKind {
                variant: VariantType::Value,
                kind: "anyref",
            },
            tag => BridgeError::UnknownKind {
                variant: VariantType::Value,
                tag,
            },
        })
    }

    /// The raw tag byte.
    pub fn tag(self) -> u8 {
        self.into()
    }

    /// The text-format name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::FuncRef => "funcref",
            Self::ExternRef => "externref",
        }
    }
}

impl fmt::Display for ValKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The tag of an extern, encoded with the engine's codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoEnumIterator, TryFromPrimitive, IntoPrimitive,
)]
#[repr(u8)]
pub enum ExternKind {
    /// A function.
    Func = 0,
    /// A global.
    Global = 1,
    /// A table.
    Table = 2,
    /// A linear memory.
    Memory = 3,
}

impl ExternKind {
    /// Engine code for shared memories, which the bridge does not carry.
    pub const SHARED_MEMORY_TAG: u8 = 4;

    /// Decodes a raw tag byte.
    pub fn from_tag(tag: u8) -> BridgeResult<Self> {
        Self::try_from(tag).map_err(|_| match tag {
            Self::SHARED_MEMORY_TAG => BridgeError::UnsupportedKind {
                variant: VariantType::Extern,
                kind: "sharedmemory",
            },
            tag => BridgeError::UnknownKind {
                variant: VariantType::Extern,
                tag,
            },
        })
    }

    /// The raw tag byte.
    pub fn tag(self) -> u8 {
        self.into()
    }

    /// The text-format name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Func => "func",
            Self::Global => "global",
            Self::Table => "table",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for ExternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

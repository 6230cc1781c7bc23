//! These are the native types the wasmtime variant bridge hands to the
//! binding layer.
//!
//! The engine's C API stores a value or an extern as a tag byte next to an
//! untagged payload union. This crate is the other side of that edge: every
//! variant is a Rust sum type, every handle is a plain non-owning `Copy`
//! value, and asking for the wrong alternative is a [`BridgeError`] instead of
//! a silent reinterpretation. The raw layouts themselves live in
//! `wasmtime-bridge-c-api`.

#![deny(missing_docs, unused_extern_crates, unsafe_code)]
#![warn(unused_import_braces)]

pub mod error;
mod extern_;
mod handles;
mod host_data;
mod kind;
mod store_id;
mod value;

pub use crate::error::{BridgeError, BridgeResult};
pub use crate::extern_::Extern;
pub use crate::handles::{ExternRef, Func, Global, Memory, Table};
pub use crate::host_data::{HostDataId, HostDataTable};
pub use crate::kind::{ExternKind, ValKind, VariantType};
pub use crate::store_id::StoreId;
pub use crate::value::Val;

pub use enum_iterator::IntoEnumIterator;

/// Version number of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

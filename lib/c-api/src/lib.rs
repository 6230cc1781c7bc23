//! Wasmtime variant bridge C API.
//!
//! The wasmtime C API passes values and externs as a tag byte beside an
//! untagged union (`wasmtime_val_t`, `wasmtime_extern_t`). Bindings written in
//! languages that cannot name union fields need a function per alternative to
//! read or write the payload. This crate generates those functions from one
//! registry of `(variant, alternative, payload)` rows and exports them with
//! the C ABI:
//!
//! * `bridge_<variant>_<field>_get` and `_set` are tag-blind, exactly like
//!   writing `val->of.<field>` in C. They are exported only with the
//!   `raw-accessors` feature.
//! * `bridge_<variant>_<field>_try_get` and `_init` check or record the tag,
//!   and report failures through [`error::bridge_last_error_message`].
//!
//! On the Rust side the same rows are zero-sized [`Accessor`] markers, and
//! the raw layouts convert to and from the native types of
//! `wasmtime-bridge-types`.
//!
//! [`Accessor`]: wasm_c_api::accessor::Accessor

#![deny(
    dead_code,
    unused_imports,
    unused_variables,
    unused_unsafe,
    unreachable_patterns
)]

pub mod error;
pub mod wasm_c_api;

pub use wasm_c_api::accessor::{Accessor, Variant, get, get_unchecked, set, set_unchecked};
pub use wasm_c_api::externals::wasmtime_extern_t;
pub use wasm_c_api::registry::{AccessorEntry, LAYOUT_REVISION, REGISTRY};
pub use wasm_c_api::value::wasmtime_val_t;
pub use wasmtime_bridge_types as types;

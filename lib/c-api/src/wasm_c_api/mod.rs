//! The raw engine layouts and the accessors over them.

#[macro_use]
mod macros;

pub mod accessor;

pub mod externals;

mod layout;

pub mod marshal;

pub mod registry;

pub mod shims;

pub mod value;

//! Non-owning handles to objects that live inside an engine store.
//!
//! A handle is the store id plus whatever words the engine uses to find the
//! object again. The bridge only copies these around; creating, rooting and
//! freeing the underlying objects is the engine's business, so none of these
//! types implement `Drop`.
use crate::store_id::StoreId;

macro_rules! engine_handle {
    ($(#[$attr:meta])* $name:ident($private:ty)) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name {
            store: StoreId,
            private: $private,
        }

        impl $name {
            /// Builds a handle from its store and the engine-private words.
            pub const fn from_parts(store: StoreId, private: $private) -> Self {
                Self { store, private }
            }

            /// The store owning the object.
            pub const fn store(&self) -> StoreId {
                self.store
            }

            /// The engine-private words locating the object in its store.
            pub const fn private(&self) -> $private {
                self.private
            }
        }
    };
}

engine_handle! {
    /// A function, either defined by a module or by the host.
    Func(usize)
}

engine_handle! {
    /// A linear memory.
    Memory([u32; 2])
}

engine_handle! {
    /// A table of references.
    Table([u32; 2])
}

engine_handle! {
    /// A global cell, mutable or not.
    Global([u32; 3])
}

engine_handle! {
    /// A reference to host data, reference counted by the engine.
    ExternRef([u32; 2])
}

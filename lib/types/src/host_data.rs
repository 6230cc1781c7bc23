//! Host objects referenced from WebAssembly through `externref`.
//!
//! The engine only stores a pointer-sized word of host data for each external
//! reference. Hosts keep the real objects in a [`HostDataTable`] and hand the
//! engine the [`HostDataId`] instead. Ids are slab slots shifted by one, so a
//! live externref never carries a zero word and zero keeps meaning "null".
use parking_lot::Mutex;
use slab::Slab;
use std::num::NonZeroUsize;

/// Key of an object stored in a [`HostDataTable`]. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostDataId(NonZeroUsize);

impl HostDataId {
    fn from_slot(slot: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(slot))
    }

    fn slot(self) -> usize {
        self.0.get() - 1
    }

    /// Decodes the word stored as externref data; `None` for zero.
    pub const fn from_raw(raw: usize) -> Option<Self> {
        match NonZeroUsize::new(raw) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// The word to store as externref data.
    pub const fn into_raw(self) -> usize {
        self.0.get()
    }
}

/// A thread-safe slab of host objects keyed by [`HostDataId`].
#[derive(Debug)]
pub struct HostDataTable<T> {
    slots: Mutex<Slab<T>>,
}

impl<T> Default for HostDataTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HostDataTable<T> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(Slab::new()),
        }
    }

    /// Stores `value` and returns its id.
    pub fn insert(&self, value: T) -> HostDataId {
        HostDataId::from_slot(self.slots.lock().insert(value))
    }

    /// Runs `f` on the object stored under `id`, if any.
    pub fn with<R>(&self, id: HostDataId, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.slots.lock().get(id.slot()).map(f)
    }

    /// Removes and returns the object stored under `id`.
    pub fn remove(&self, id: HostDataId) -> Option<T> {
        self.slots.lock().try_remove(id.slot())
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    /// Whether the table holds no objects.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> HostDataTable<T> {
    /// Returns a copy of the object stored under `id`.
    pub fn get(&self, id: HostDataId) -> Option<T> {
        self.with(id, T::clone)
    }
}

use std::{
    num::NonZeroU64,
    sync::atomic::{AtomicU64, Ordering},
};

/// Unique ID of the engine store that owns a handle.
///
/// Every handle crossing the bridge carries the ID of its store. The raw
/// encoding reserves zero for "no object", which is how null references are
/// spelled in the engine's layouts, so a `StoreId` itself is never zero.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct StoreId(NonZeroU64);

impl StoreId {
    /// Wraps a raw store id, returning `None` for the null id.
    pub const fn from_raw(raw: u64) -> Option<Self> {
        match NonZeroU64::new(raw) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// The raw id as the engine stores it.
    pub const fn as_raw(self) -> u64 {
        self.0.get()
    }
}

impl Default for StoreId {
    // Allocates a unique ID, used by hosts that stand in for the engine.
    fn default() -> Self {
        // The counter starts at one and only reaches zero again after 2^64
        // allocations; past that point ids repeat from 1.
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        Self(NonZeroU64::new(id).unwrap_or(NonZeroU64::MIN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_store() {
        assert_eq!(StoreId::from_raw(0), None);
        assert_eq!(StoreId::from_raw(7).map(StoreId::as_raw), Some(7));
    }

    #[test]
    fn default_ids_are_unique() {
        let a = StoreId::default();
        let b = StoreId::default();
        assert_ne!(a, b);
        assert!(b > a);
        assert_ne!(a.as_raw(), 0);
    }
}

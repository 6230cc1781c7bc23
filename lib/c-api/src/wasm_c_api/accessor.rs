//! Typed access to the alternatives of a raw variant.
//!
//! Every alternative of `wasmtime_val_t` and `wasmtime_extern_t` has a
//! zero-sized marker type implementing [`Accessor`], generated from the
//! registry in [`super::shims`]. The marker's `read`/`write` are the
//! tag-blind primitives the C shims export; [`get`] and [`set`] wrap them
//! with the tag so that asking for the wrong alternative becomes a
//! [`BridgeError::TagMismatch`].

use super::externals::wasmtime_extern_t;
use super::registry::AccessorEntry;
use super::value::wasmtime_val_t;
use std::fmt;
use std::ops::Range;
use std::ptr;
use wasmtime_bridge_types::{BridgeError, BridgeResult, ExternKind, ValKind, VariantType};

/// A raw tag-plus-union layout.
pub trait Variant: Copy {
    /// Decoded form of the tag.
    type Kind: Copy + Eq + fmt::Debug + fmt::Display;

    /// Which family this layout belongs to.
    const TYPE: VariantType;

    /// Decodes the tag recorded beside the payload.
    fn kind(&self) -> BridgeResult<Self::Kind>;

    /// Records `kind` as the active alternative. Does not touch the payload.
    fn set_kind(&mut self, kind: Self::Kind);

    /// Text-format name of `kind`.
    fn kind_name(kind: Self::Kind) -> &'static str;
}

impl Variant for wasmtime_val_t {
    type Kind = ValKind;

    const TYPE: VariantType = VariantType::Value;

    fn kind(&self) -> BridgeResult<ValKind> {
        ValKind::from_tag(self.kind)
    }

    fn set_kind(&mut self, kind: ValKind) {
        self.kind = kind.tag();
    }

    fn kind_name(kind: ValKind) -> &'static str {
        kind.name()
    }
}

impl Variant for wasmtime_extern_t {
    type Kind = ExternKind;

    const TYPE: VariantType = VariantType::Extern;

    fn kind(&self) -> BridgeResult<ExternKind> {
        ExternKind::from_tag(self.kind)
    }

    fn set_kind(&mut self, kind: ExternKind) {
        self.kind = kind.tag();
    }

    fn kind_name(kind: ExternKind) -> &'static str {
        kind.name()
    }
}

/// A type stored in one slot of a variant's union.
///
/// [`Accessor::write`] zeroes the listed padding after each store, so a read
/// through another alternative only sees bytes that were actually written.
pub trait UnionPayload: Copy {
    /// Byte ranges of `Self` not covered by any field.
    const PADDING: &'static [Range<usize>] = &[];
}

impl UnionPayload for i32 {}
impl UnionPayload for i64 {}
impl UnionPayload for f32 {}
impl UnionPayload for f64 {}

/// Zeroes the padding of a `P` stored at the start of `slot`.
pub(crate) fn clear_padding<P: UnionPayload, U>(slot: &mut U) {
    let base = ptr::from_mut(slot).cast::<u8>();
    for range in P::PADDING {
        debug_assert!(range.end <= std::mem::size_of::<U>());
        // SAFETY: the range lies within `P`, which the layout assertions
        // keep within the union `U`.
        unsafe { base.add(range.start).write_bytes(0, range.end.saturating_sub(range.start)) };
    }
}

/// One alternative of a [`Variant`].
pub trait Accessor {
    /// The layout this alternative lives in.
    type Variant: Variant;

    /// The payload type stored in this alternative's slot.
    type Payload: UnionPayload;

    /// The tag recorded when this alternative is active.
    const KIND: <Self::Variant as Variant>::Kind;

    /// This alternative's row in the registry.
    const ENTRY: AccessorEntry;

    /// Copies the payload out of this alternative's slot, whatever the tag
    /// says.
    ///
    /// # Safety
    ///
    /// The bytes in the slot must be a valid `Payload`. Every alternative
    /// here is plain integers and floats, so this holds whenever the slot
    /// was last filled through [`Accessor::write`] or by the engine.
    unsafe fn read(val: &Self::Variant) -> Self::Payload;

    /// Zeroes the whole union, then stores `payload` in this alternative's
    /// slot with its padding zeroed. Leaves the tag alone.
    fn write(val: &mut Self::Variant, payload: Self::Payload);
}

/// Reads alternative `A` after checking that it is the active one.
pub fn get<A: Accessor>(val: &A::Variant) -> BridgeResult<A::Payload> {
    let active = val.kind()?;
    if active != A::KIND {
        return Err(BridgeError::TagMismatch {
            variant: <A::Variant as Variant>::TYPE,
            requested: <A::Variant as Variant>::kind_name(A::KIND),
            active: <A::Variant as Variant>::kind_name(active),
        });
    }
    // SAFETY: the tag says `A` is the active alternative.
    Ok(unsafe { A::read(val) })
}

/// Stores `payload` in alternative `A` and records `A` as active.
pub fn set<A: Accessor>(val: &mut A::Variant, payload: A::Payload) {
    A::write(val, payload);
    val.set_kind(A::KIND);
}

/// Reads alternative `A` without looking at the tag.
///
/// # Safety
///
/// See [`Accessor::read`].
#[inline]
pub unsafe fn get_unchecked<A: Accessor>(val: &A::Variant) -> A::Payload {
    unsafe { A::read(val) }
}

/// Writes alternative `A` without recording it in the tag.
#[inline]
pub fn set_unchecked<A: Accessor>(val: &mut A::Variant, payload: A::Payload) {
    A::write(val, payload)
}

use crate::error::{BridgeError, BridgeResult};
use crate::handles::{ExternRef, Func};
use crate::kind::{ValKind, VariantType};

/// A WebAssembly value, one of the six alternatives a `wasmtime_val_t` can
/// hold.
///
/// Floats keep their raw bits so that NaN payloads survive a trip through
/// the bridge unchanged; use [`Val::f32`] and [`Val::f64`] to get native
/// floats back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Val {
    // NB: the ordering here matches `ValKind`.
    //
    /// A 32-bit integer.
    I32(i32),

    /// A 64-bit integer.
    I64(i64),

    /// A 32-bit float, as raw bits.
    F32(u32),

    /// A 64-bit float, as raw bits.
    F64(u64),

    /// A function reference, `None` when null.
    FuncRef(Option<Func>),

    /// An external reference, `None` when null.
    ExternRef(Option<ExternRef>),
}

macro_rules! accessors {
    ($bind:ident $(($variant:ident($ty:ty) $get:ident $try_get:ident $cvt:expr))*) => ($(
        /// Attempt to access the underlying value of this `Val`, returning
        /// `None` if it is not the correct type.
        #[inline]
        pub fn $get(&self) -> Option<$ty> {
            if let Val::$variant($bind) = self {
                Some($cvt)
            } else {
                None
            }
        }

        /// Access the underlying value of this `Val`, failing with
        /// [`BridgeError::TagMismatch`] if another alternative is active.
        #[inline]
        pub fn $try_get(&self) -> BridgeResult<$ty> {
            self.$get().ok_or_else(|| self.mismatch(ValKind::$variant))
        }
    )*)
}

impl Val {
    /// Returns the null function reference value.
    #[inline]
    pub const fn null_func_ref() -> Self {
        Self::FuncRef(None)
    }

    /// Returns the null external reference value.
    #[inline]
    pub const fn null_extern_ref() -> Self {
        Self::ExternRef(None)
    }

    /// Builds an `f32` value from a native float.
    #[inline]
    pub fn from_f32(val: f32) -> Self {
        Self::F32(val.to_bits())
    }

    /// Builds an `f64` value from a native float.
    #[inline]
    pub fn from_f64(val: f64) -> Self {
        Self::F64(val.to_bits())
    }

    /// Returns the kind of this value, the tag the engine would record.
    #[inline]
    pub const fn kind(&self) -> ValKind {
        match self {
            Self::I32(_) => ValKind::I32,
            Self::I64(_) => ValKind::I64,
            Self::F32(_) => ValKind::F32,
            Self::F64(_) => ValKind::F64,
            Self::FuncRef(_) => ValKind::FuncRef,
            Self::ExternRef(_) => ValKind::ExternRef,
        }
    }

    /// Whether this is a null reference.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::FuncRef(None) | Self::ExternRef(None))
    }

    fn mismatch(&self, requested: ValKind) -> BridgeError {
        BridgeError::TagMismatch {
            variant: VariantType::Value,
            requested: requested.name(),
            active: self.kind().name(),
        }
    }

    accessors! {
        e
        (I32(i32) i32 try_i32 *e)
        (I64(i64) i64 try_i64 *e)
        (F32(f32) f32 try_f32 f32::from_bits(*e))
        (F64(f64) f64 try_f64 f64::from_bits(*e))
        (FuncRef(Option<Func>) funcref try_funcref *e)
        (ExternRef(Option<ExternRef>) externref try_externref *e)
    }
}

impl From<i32> for Val {
    fn from(val: i32) -> Self {
        Self::I32(val)
    }
}

impl From<i64> for Val {
    fn from(val: i64) -> Self {
        Self::I64(val)
    }
}

impl From<f32> for Val {
    fn from(val: f32) -> Self {
        Self::from_f32(val)
    }
}

impl From<f64> for Val {
    fn from(val: f64) -> Self {
        Self::from_f64(val)
    }
}

impl From<Func> for Val {
    fn from(val: Func) -> Self {
        Self::FuncRef(Some(val))
    }
}

impl From<Option<Func>> for Val {
    fn from(val: Option<Func>) -> Self {
        Self::FuncRef(val)
    }
}

impl From<ExternRef> for Val {
    fn from(val: ExternRef) -> Self {
        Self::ExternRef(Some(val))
    }
}

impl From<Option<ExternRef>> for Val {
    fn from(val: Option<ExternRef>) -> Self {
        Self::ExternRef(val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreId;
    use pretty_assertions::assert_eq;

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(Val::from(1i32).kind(), ValKind::I32);
        assert_eq!(Val::from(1i64).kind(), ValKind::I64);
        assert_eq!(Val::from(1.0f32).kind(), ValKind::F32);
        assert_eq!(Val::from(1.0f64).kind(), ValKind::F64);
        assert_eq!(Val::null_func_ref().kind(), ValKind::FuncRef);
        assert_eq!(Val::null_extern_ref().kind(), ValKind::ExternRef);
    }

    #[test]
    fn wrong_alternative_is_reported() {
        let val = Val::I32(42);
        assert_eq!(val.i32(), Some(42));
        assert_eq!(val.f64(), None);
        assert_eq!(
            val.try_f64(),
            Err(BridgeError::TagMismatch {
                variant: VariantType::Value,
                requested: "f64",
                active: "i32",
            })
        );
    }

    #[test]
    fn nan_payload_is_kept() {
        let bits = 0x7fc0_0001u32;
        let val = Val::from_f32(f32::from_bits(bits));
        assert_eq!(val, Val::F32(bits));
        assert_eq!(val.try_f32().map(f32::to_bits), Ok(bits));
    }

    #[test]
    fn references() {
        let func = Func::from_parts(StoreId::default(), 9);
        let val = Val::from(func);
        assert_eq!(val.funcref(), Some(Some(func)));
        assert!(!val.is_null());
        assert!(Val::null_extern_ref().is_null());
        assert_eq!(Val::null_extern_ref().try_externref(), Ok(None));
    }
}

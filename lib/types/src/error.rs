//! The errors raised when a variant is read through the wrong alternative or
//! decoded from a tag the bridge does not know.
use crate::kind::VariantType;
use thiserror::Error;

/// A convenient alias for a `Result` that uses `BridgeError` as the error type.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Everything that can go wrong while moving a variant across the bridge.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BridgeError {
    /// The requested alternative is not the one recorded in the tag.
    #[error("tag mismatch on `{variant}`: requested `{requested}` but `{active}` is active")]
    TagMismatch {
        /// The variant family that was accessed.
        variant: VariantType,
        /// The alternative the caller asked for.
        requested: &'static str,
        /// The alternative the tag says is stored.
        active: &'static str,
    },

    /// The tag byte does not name any alternative of the engine.
    #[error("unknown `{variant}` kind tag {tag}")]
    UnknownKind {
        /// The variant family that was decoded.
        variant: VariantType,
        /// The raw tag byte.
        tag: u8,
    },

    /// The tag names an alternative the engine has but this bridge does not
    /// expose.
    #[error("`{kind}` is not an alternative of `{variant}` in this bridge")]
    UnsupportedKind {
        /// The variant family that was decoded.
        variant: VariantType,
        /// The engine's name for the alternative.
        kind: &'static str,
    },

    /// An extern carried a handle whose store id is zero.
    #[error("`{alternative}` extern holds a null handle")]
    NullHandle {
        /// The alternative that held the null handle.
        alternative: &'static str,
    },

    /// A list of values had the wrong length.
    #[error("expected {expected} values, got {got}")]
    ArityMismatch {
        /// Number of values the signature declares.
        expected: usize,
        /// Number of values actually supplied.
        got: usize,
    },

    /// A value in a result list has a different kind than declared.
    #[error("result {index} should be `{expected}` but is `{got}`")]
    ResultKindMismatch {
        /// Position of the offending value.
        index: usize,
        /// The declared kind.
        expected: &'static str,
        /// The kind actually produced.
        got: &'static str,
    },

    /// A required pointer argument was null.
    #[error("null pointer passed as `{0}`")]
    NullPointer(&'static str),
}

//! Errors raised by value type construction and conversion.
//!
//! Every variant signals a logic error in the calling pass. None of them are
//! transient, so callers should propagate rather than retry.

use crate::scalar::ScalarKind;
use crate::simple_vt::SimpleVt;

/// Value type error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VtError {
    /// Element count division by zero, or by a factor that does not divide
    /// the minimum lane count exactly.
    #[error("cannot divide element count with minimum {min} by {divisor}")]
    Division { min: u32, divisor: u32 },

    /// Widening an integer element to a width the model has no kind for.
    #[error("no integer kind twice as wide as `{kind}`")]
    MaxWidth { kind: ScalarKind },

    /// A conversion whose input does not have the required shape.
    #[error("cannot convert `{vt}`: {reason}")]
    InvalidConversion { vt: String, reason: &'static str },

    /// A scalar kind the model does not recognize.
    #[error("unsupported scalar kind: {what}")]
    UnsupportedKind { what: String },

    /// A frontend type with no value type counterpart.
    #[error("frontend type `{ty}` has no value type representation")]
    InvalidType { ty: String },

    /// A vector-only operation applied to a scalar type.
    #[error("`{vt}` is not a vector type")]
    NotAVector { vt: String },

    /// Interning a shape that already has a catalog entry.
    #[error("`{vt}` is catalogued and cannot be interned as an extended type")]
    Catalogued { vt: SimpleVt },

    /// A typing context ran out of slots.
    #[error("typing context {context} exceeded u32::MAX extended types")]
    ContextOverflow { context: u32 },
}

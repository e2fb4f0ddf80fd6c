//! Primitive scalar kinds used as value types and vector elements.
//!
//! Integer kinds carry no signedness; that is a property of operations.

use std::fmt;

use crate::error::VtError;

/// Integer or floating-point.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScalarClass {
    Integer,
    Float,
}

/// A primitive element type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ScalarKind {
    /// 1-bit integer (predicate lanes).
    I1,
    I8,
    I16,
    I32,
    I64,
    I128,
    /// IEEE half precision.
    F16,
    /// IEEE single precision.
    F32,
    /// IEEE double precision.
    F64,
    /// x87 extended precision.
    F80,
    /// IEEE quad precision.
    F128,
}

impl ScalarKind {
    /// Every scalar kind, integers first, each class ordered by width.
    pub const ALL: [ScalarKind; 11] = [
        Self::I1,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::I128,
        Self::F16,
        Self::F32,
        Self::F64,
        Self::F80,
        Self::F128,
    ];

    #[inline]
    pub const fn class(self) -> ScalarClass {
        match self {
            Self::I1 | Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::I128 => {
                ScalarClass::Integer
            }
            Self::F16 | Self::F32 | Self::F64 | Self::F80 | Self::F128 => ScalarClass::Float,
        }
    }

    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(self.class(), ScalarClass::Integer)
    }

    #[inline]
    pub const fn is_floating_point(self) -> bool {
        matches!(self.class(), ScalarClass::Float)
    }

    /// Width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::I1 => 1,
            Self::I8 => 8,
            Self::I16 | Self::F16 => 16,
            Self::I32 | Self::F32 => 32,
            Self::I64 | Self::F64 => 64,
            Self::F80 => 80,
            Self::I128 | Self::F128 => 128,
        }
    }

    /// The integer kind of exactly `bits` width, if the model has one.
    pub const fn integer_of_width(bits: u32) -> Option<Self> {
        match bits {
            1 => Some(Self::I1),
            8 => Some(Self::I8),
            16 => Some(Self::I16),
            32 => Some(Self::I32),
            64 => Some(Self::I64),
            128 => Some(Self::I128),
            _ => None,
        }
    }

    /// The floating-point kind of exactly `bits` width, if the model has one.
    pub const fn float_of_width(bits: u32) -> Option<Self> {
        match bits {
            16 => Some(Self::F16),
            32 => Some(Self::F32),
            64 => Some(Self::F64),
            80 => Some(Self::F80),
            128 => Some(Self::F128),
            _ => None,
        }
    }

    /// Look up an integer kind by width.
    pub fn integer(bits: u32) -> Result<Self, VtError> {
        Self::integer_of_width(bits).ok_or_else(|| VtError::UnsupportedKind {
            what: format!("i{bits}"),
        })
    }

    /// Look up a floating-point kind by width.
    pub fn float(bits: u32) -> Result<Self, VtError> {
        Self::float_of_width(bits).ok_or_else(|| VtError::UnsupportedKind {
            what: format!("f{bits}"),
        })
    }

    /// The integer kind of exactly twice this kind's width.
    ///
    /// `None` for floating-point kinds and for `i128`. `i1` has no double
    /// (there is no `i2`).
    pub const fn wider_integer(self) -> Option<Self> {
        if !self.is_integer() {
            return None;
        }
        Self::integer_of_width(self.bits() * 2)
    }

    /// The integer kind with the same width as this float kind.
    ///
    /// `None` for integer kinds and for `f80`.
    pub const fn equal_width_integer(self) -> Option<Self> {
        if !self.is_floating_point() {
            return None;
        }
        Self::integer_of_width(self.bits())
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.class() {
            ScalarClass::Integer => 'i',
            ScalarClass::Float => 'f',
        };
        write!(f, "{prefix}{}", self.bits())
    }
}

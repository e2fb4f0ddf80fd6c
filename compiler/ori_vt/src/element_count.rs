//! Vector lane counts and type sizes that may scale at run time.
//!
//! A scalable count stores only the known minimum. The true lane count is
//! `min * vscale`, where `vscale` is a target constant that is opaque here.
//! Arithmetic never touches the `scalable` flag.

use std::fmt;
use std::ops::Mul;

use crate::error::VtError;

/// Number of lanes in a vector: a known minimum plus a scalability flag.
///
/// `From<u32>` builds a fixed count and `From<(u32, bool)>` takes the
/// `(min, scalable)` pair, so every constructor taking `impl Into<ElementCount>`
/// normalizes to this one value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementCount {
    /// Minimum number of lanes. Exact for fixed-length vectors.
    pub min: u32,
    /// Whether the lane count is `min` times the runtime scale factor.
    pub scalable: bool,
}

impl ElementCount {
    #[inline]
    pub const fn new(min: u32, scalable: bool) -> Self {
        Self { min, scalable }
    }

    /// A fixed-length count of exactly `min` lanes.
    #[inline]
    pub const fn fixed(min: u32) -> Self {
        Self::new(min, false)
    }

    /// A scalable count of `min * vscale` lanes.
    #[inline]
    pub const fn scalable(min: u32) -> Self {
        Self::new(min, true)
    }

    /// Multiply the minimum, or `None` on overflow.
    #[inline]
    pub const fn checked_mul(self, factor: u32) -> Option<Self> {
        match self.min.checked_mul(factor) {
            Some(min) => Some(Self::new(min, self.scalable)),
            None => None,
        }
    }

    /// Divide the minimum by `factor`.
    ///
    /// Fails unless `factor` divides the minimum exactly, since a scalable
    /// count cannot be rounded.
    pub fn checked_div(self, factor: u32) -> Result<Self, VtError> {
        if factor == 0 || self.min % factor != 0 {
            return Err(VtError::Division {
                min: self.min,
                divisor: factor,
            });
        }
        Ok(Self::new(self.min / factor, self.scalable))
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.min == 0
    }

    /// Exactly one lane, known at compile time.
    #[inline]
    pub const fn is_scalar(self) -> bool {
        self.min == 1 && !self.scalable
    }

    #[inline]
    pub const fn is_power_of_two(self) -> bool {
        self.min.is_power_of_two()
    }
}

impl Mul<u32> for ElementCount {
    type Output = ElementCount;

    /// Scales the minimum.
    ///
    /// # Panics
    /// Panics if the minimum overflows `u32`, in release builds too. Use
    /// [`ElementCount::checked_mul`] when the factor is untrusted.
    fn mul(self, factor: u32) -> ElementCount {
        self.checked_mul(factor).unwrap_or_else(|| {
            panic!("element count {self} times {factor} exceeded u32::MAX lanes")
        })
    }
}

impl From<u32> for ElementCount {
    fn from(min: u32) -> Self {
        Self::fixed(min)
    }
}

impl From<(u32, bool)> for ElementCount {
    fn from((min, scalable): (u32, bool)) -> Self {
        Self::new(min, scalable)
    }
}

impl fmt::Display for ElementCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scalable {
            write!(f, "vscale x {}", self.min)
        } else {
            write!(f, "{}", self.min)
        }
    }
}

/// Size of a value type in bits.
///
/// Scalable vector sizes are a multiple of the runtime scale factor, so two
/// sizes only order meaningfully when their `scalable` flags agree.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeSize {
    pub min_bits: u64,
    pub scalable: bool,
}

impl TypeSize {
    #[inline]
    pub const fn fixed(bits: u64) -> Self {
        Self {
            min_bits: bits,
            scalable: false,
        }
    }

    #[inline]
    pub const fn scalable(min_bits: u64) -> Self {
        Self {
            min_bits,
            scalable: true,
        }
    }

    /// Size of `count` lanes of `element_bits` each.
    #[inline]
    pub fn of_lanes(element_bits: u32, count: ElementCount) -> Self {
        Self {
            min_bits: u64::from(element_bits) * u64::from(count.min),
            scalable: count.scalable,
        }
    }
}

impl fmt::Display for TypeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scalable {
            write!(f, "vscale x {} bits", self.min_bits)
        } else {
            write!(f, "{} bits", self.min_bits)
        }
    }
}

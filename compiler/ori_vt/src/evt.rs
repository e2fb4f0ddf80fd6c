//! Extended value types.
//!
//! `Evt` is what legalization and codegen passes pass around. It is either
//! a catalogued `SimpleVt` or a handle to a descriptor interned in a
//! `TypingContext`. Which branch a value took is an implementation detail:
//! equality and hashing look only at the resolved shape, and every
//! constructor tries the catalog before the context, so a given shape always
//! lands on the same branch.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::context::{ExtendedDescriptor, ExtendedVt, TypingContext};
use crate::element_count::{ElementCount, TypeSize};
use crate::error::VtError;
use crate::scalar::ScalarKind;
use crate::simple_vt::{write_vt_name, SimpleVt};

/// A value type: a scalar kind, optionally with a lane count.
#[derive(Copy, Clone, Debug)]
pub enum Evt {
    /// Catalogued type.
    Simple(SimpleVt),
    /// Vector shape interned in a `TypingContext`. Always a vector.
    Extended(ExtendedVt),
}

impl Evt {
    /// The scalar value type of `kind`.
    #[inline]
    pub const fn scalar(kind: ScalarKind) -> Evt {
        Evt::Simple(SimpleVt::from_scalar(kind))
    }

    /// A vector of `count` lanes of `kind`.
    ///
    /// The count may be an `ElementCount`, a `(min, scalable)` pair or a plain
    /// `u32` lane count; all three are the same call. Catalogued shapes come
    /// back as `Evt::Simple`, everything else is interned in `ctx`.
    pub fn vector(ctx: &TypingContext, kind: ScalarKind, count: impl Into<ElementCount>) -> Evt {
        let count = count.into();
        if let Some(vt) = SimpleVt::vector(kind, count) {
            return Evt::Simple(vt);
        }
        tracing::trace!(%kind, %count, "vector shape not catalogued");
        Evt::Extended(ctx.intern(ExtendedDescriptor {
            scalar: kind,
            count,
        }))
    }

    /// Like [`Evt::vector`], with the element given as a value type.
    ///
    /// Fails if `element` is itself a vector.
    pub fn vector_of(
        ctx: &TypingContext,
        element: Evt,
        count: impl Into<ElementCount>,
    ) -> Result<Evt, VtError> {
        let kind = ScalarKind::try_from(element)?;
        Ok(Self::vector(ctx, kind, count))
    }

    /// The integer scalar of `bits` width.
    pub fn integer(bits: u32) -> Result<Evt, VtError> {
        ScalarKind::integer(bits).map(Self::scalar)
    }

    /// The floating-point scalar of `bits` width.
    pub fn float(bits: u32) -> Result<Evt, VtError> {
        ScalarKind::float(bits).map(Self::scalar)
    }

    #[inline]
    pub const fn is_simple(self) -> bool {
        matches!(self, Evt::Simple(_))
    }

    #[inline]
    pub const fn is_extended(self) -> bool {
        matches!(self, Evt::Extended(_))
    }

    /// The catalog entry, if this type has one.
    #[inline]
    pub const fn simple(self) -> Option<SimpleVt> {
        match self {
            Evt::Simple(vt) => Some(vt),
            Evt::Extended(_) => None,
        }
    }

    /// Element kind (or the kind itself, for scalars).
    #[inline]
    pub const fn scalar_kind(self) -> ScalarKind {
        match self {
            Evt::Simple(vt) => vt.scalar_kind(),
            Evt::Extended(vt) => vt.scalar_kind(),
        }
    }

    /// Lane count, or `None` for scalars.
    #[inline]
    pub const fn vector_element_count(self) -> Option<ElementCount> {
        match self {
            Evt::Simple(vt) => vt.vector_element_count(),
            Evt::Extended(vt) => Some(vt.element_count()),
        }
    }

    /// Every `Evt` names a well-formed type, from either branch.
    #[inline]
    pub const fn is_valid(self) -> bool {
        match self {
            Evt::Simple(vt) => vt.is_valid(),
            Evt::Extended(_) => true,
        }
    }

    #[inline]
    pub const fn is_integer(self) -> bool {
        self.scalar_kind().is_integer()
    }

    #[inline]
    pub const fn is_floating_point(self) -> bool {
        self.scalar_kind().is_floating_point()
    }

    #[inline]
    pub const fn is_vector(self) -> bool {
        self.vector_element_count().is_some()
    }

    #[inline]
    pub const fn is_scalable_vector(self) -> bool {
        matches!(
            self.vector_element_count(),
            Some(ElementCount { scalable: true, .. })
        )
    }

    #[inline]
    pub const fn is_fixed_length_vector(self) -> bool {
        matches!(
            self.vector_element_count(),
            Some(ElementCount {
                scalable: false,
                ..
            })
        )
    }

    /// The element type, or `self` for scalars. Always simple.
    #[inline]
    pub const fn scalar_type(self) -> Evt {
        Self::scalar(self.scalar_kind())
    }

    /// Exact lane count of a fixed-length vector.
    pub const fn vector_num_elements(self) -> Option<u32> {
        match self.vector_element_count() {
            Some(ElementCount {
                min,
                scalable: false,
            }) => Some(min),
            _ => None,
        }
    }

    #[inline]
    pub const fn scalar_size_in_bits(self) -> u32 {
        self.scalar_kind().bits()
    }

    pub fn size_in_bits(self) -> TypeSize {
        match self.vector_element_count() {
            Some(count) => TypeSize::of_lanes(self.scalar_size_in_bits(), count),
            None => TypeSize::fixed(u64::from(self.scalar_size_in_bits())),
        }
    }

    /// Vectors whose minimum lane count is a power of two. Scalars count.
    pub const fn is_pow2_vector_type(self) -> bool {
        match self.vector_element_count() {
            Some(count) => count.is_power_of_two(),
            None => true,
        }
    }

    /// Same element kind and scalability, lane count rounded up to a power
    /// of two. `None` if the rounded count does not fit in a `u32`.
    pub fn pow2_vector_type(self, ctx: &TypingContext) -> Option<Evt> {
        let Some(count) = self.vector_element_count() else {
            return Some(self);
        };
        if count.is_power_of_two() {
            return Some(self);
        }
        let min = count.min.checked_next_power_of_two()?;
        Some(Self::vector(
            ctx,
            self.scalar_kind(),
            ElementCount::new(min, count.scalable),
        ))
    }

    /// Same lane count, element integer of twice the width.
    ///
    /// Requires an integer vector.
    pub fn widen_integer_vector_element_type(self, ctx: &TypingContext) -> Result<Evt, VtError> {
        let kind = self.scalar_kind();
        let count = match self.vector_element_count() {
            Some(count) if kind.is_integer() => count,
            _ => {
                return Err(VtError::InvalidConversion {
                    vt: self.to_string(),
                    reason: "expected an integer vector",
                })
            }
        };
        let wider = kind.wider_integer().ok_or(VtError::MaxWidth { kind })?;
        Ok(Self::vector(ctx, wider, count))
    }

    /// Same element kind and scalability, half the minimum lane count.
    pub fn half_num_vector_elements(self, ctx: &TypingContext) -> Result<Evt, VtError> {
        let count = self.require_vector()?.checked_div(2)?;
        Ok(Self::vector(ctx, self.scalar_kind(), count))
    }

    /// Same element kind and scalability, twice the minimum lane count.
    pub fn double_num_vector_elements(self, ctx: &TypingContext) -> Result<Evt, VtError> {
        let count = self
            .require_vector()?
            .checked_mul(2)
            .ok_or_else(|| VtError::InvalidConversion {
                vt: self.to_string(),
                reason: "doubled lane count overflows",
            })?;
        Ok(Self::vector(ctx, self.scalar_kind(), count))
    }

    /// Same shape, floating-point element replaced by the integer of equal
    /// width. Works on scalars and vectors.
    pub fn change_type_to_integer(self, ctx: &TypingContext) -> Result<Evt, VtError> {
        let kind = self.scalar_kind();
        if !kind.is_floating_point() {
            return Err(VtError::InvalidConversion {
                vt: self.to_string(),
                reason: "expected a floating-point type",
            });
        }
        let int = kind
            .equal_width_integer()
            .ok_or_else(|| VtError::InvalidConversion {
                vt: self.to_string(),
                reason: "no integer kind of the same width",
            })?;
        Ok(match self.vector_element_count() {
            Some(count) => Self::vector(ctx, int, count),
            None => Self::scalar(int),
        })
    }

    /// Same lane count, element kind replaced by `kind`.
    pub fn change_vector_element_type(
        self,
        ctx: &TypingContext,
        kind: ScalarKind,
    ) -> Result<Evt, VtError> {
        let count = self.require_vector()?;
        Ok(Self::vector(ctx, kind, count))
    }

    fn require_vector(self) -> Result<ElementCount, VtError> {
        self.vector_element_count()
            .ok_or_else(|| VtError::NotAVector {
                vt: self.to_string(),
            })
    }

    #[inline]
    fn shape(self) -> (ScalarKind, Option<ElementCount>) {
        (self.scalar_kind(), self.vector_element_count())
    }
}

impl PartialEq for Evt {
    fn eq(&self, other: &Evt) -> bool {
        self.shape() == other.shape()
    }
}

impl Eq for Evt {}

impl Hash for Evt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.shape().hash(state);
    }
}

impl PartialEq<SimpleVt> for Evt {
    fn eq(&self, other: &SimpleVt) -> bool {
        *self == Evt::Simple(*other)
    }
}

impl PartialEq<Evt> for SimpleVt {
    fn eq(&self, other: &Evt) -> bool {
        Evt::Simple(*self) == *other
    }
}

impl From<SimpleVt> for Evt {
    fn from(vt: SimpleVt) -> Self {
        Evt::Simple(vt)
    }
}

impl From<ScalarKind> for Evt {
    fn from(kind: ScalarKind) -> Self {
        Evt::scalar(kind)
    }
}

impl TryFrom<Evt> for ScalarKind {
    type Error = VtError;

    fn try_from(vt: Evt) -> Result<Self, Self::Error> {
        if vt.is_vector() {
            return Err(VtError::UnsupportedKind {
                what: format!("vector `{vt}` used as an element kind"),
            });
        }
        Ok(vt.scalar_kind())
    }
}

impl fmt::Display for Evt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vt_name(f, self.scalar_kind(), self.vector_element_count())
    }
}

//! Simple value types: the cheap, catalogued half of the type model.
//!
//! A `SimpleVt` is a one-byte id into a fixed table. Classification is a
//! table read. The filtered iterators are stateless: every call walks the
//! same static table from the start.

mod catalog;

use std::fmt;

pub use catalog::SimpleVt;

use crate::element_count::{ElementCount, TypeSize};
use crate::scalar::ScalarKind;

impl SimpleVt {
    /// Stable catalog id.
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// The entry with catalog id `id`, if there is one.
    #[inline]
    pub fn from_id(id: u8) -> Option<SimpleVt> {
        Self::TABLE.get(usize::from(id)).copied()
    }

    /// Catalog lookup for a vector of `count` lanes of `kind`.
    ///
    /// Returns `None` when the combination is not catalogued; callers that
    /// need a type regardless go through `Evt::vector`.
    pub fn vector(kind: ScalarKind, count: impl Into<ElementCount>) -> Option<SimpleVt> {
        Self::lookup_vector(kind, count.into())
    }

    /// Table entries are valid by construction.
    #[inline]
    pub const fn is_valid(self) -> bool {
        true
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

    /// The element type, or `self` for scalars.
    #[inline]
    pub const fn scalar_type(self) -> SimpleVt {
        Self::from_scalar(self.scalar_kind())
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

    // Catalog enumerations.
    //
    // Each returns a fresh iterator over the static table in id order.

    /// Every catalog entry.
    pub fn all_types() -> impl Iterator<Item = SimpleVt> + Clone {
        Self::filtered(|_| true)
    }

    /// Scalar integer entries.
    pub fn integer_types() -> impl Iterator<Item = SimpleVt> + Clone {
        Self::filtered(|vt| vt.is_integer() && !vt.is_vector())
    }

    /// Scalar floating-point entries.
    pub fn fp_types() -> impl Iterator<Item = SimpleVt> + Clone {
        Self::filtered(|vt| vt.is_floating_point() && !vt.is_vector())
    }

    /// Every vector entry, fixed and scalable.
    pub fn vector_types() -> impl Iterator<Item = SimpleVt> + Clone {
        Self::filtered(SimpleVt::is_vector)
    }

    pub fn integer_fixed_length_vector_types() -> impl Iterator<Item = SimpleVt> + Clone {
        Self::filtered(|vt| vt.is_integer() && vt.is_fixed_length_vector())
    }

    pub fn fp_fixed_length_vector_types() -> impl Iterator<Item = SimpleVt> + Clone {
        Self::filtered(|vt| vt.is_floating_point() && vt.is_fixed_length_vector())
    }

    pub fn integer_scalable_vector_types() -> impl Iterator<Item = SimpleVt> + Clone {
        Self::filtered(|vt| vt.is_integer() && vt.is_scalable_vector())
    }

    pub fn fp_scalable_vector_types() -> impl Iterator<Item = SimpleVt> + Clone {
        Self::filtered(|vt| vt.is_floating_point() && vt.is_scalable_vector())
    }

    fn filtered(pred: fn(SimpleVt) -> bool) -> impl Iterator<Item = SimpleVt> + Clone {
        Self::TABLE.iter().copied().filter(move |&vt| pred(vt))
    }
}

/// Writes a value type name: `i32`, `v4i32`, or `nxv4i32`.
pub(crate) fn write_vt_name(
    f: &mut fmt::Formatter<'_>,
    kind: ScalarKind,
    count: Option<ElementCount>,
) -> fmt::Result {
    match count {
        None => write!(f, "{kind}"),
        Some(ElementCount {
            min,
            scalable: false,
        }) => write!(f, "v{min}{kind}"),
        Some(ElementCount {
            min,
            scalable: true,
        }) => write!(f, "nxv{min}{kind}"),
    }
}

impl fmt::Display for SimpleVt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vt_name(f, self.scalar_kind(), self.vector_element_count())
    }
}

impl From<ScalarKind> for SimpleVt {
    fn from(kind: ScalarKind) -> Self {
        Self::from_scalar(kind)
    }
}

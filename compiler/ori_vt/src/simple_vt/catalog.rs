//! The static catalog of simple value types.
//!
//! One macro invocation declares every entry. It expands to the `SimpleVt`
//! enum, the id-ordered `TABLE`, the per-entry shape accessors and the
//! reverse shape lookup, so the discriminant, the table position and the
//! shape can never drift apart.
//!
//! # Id Layout
//!
//! - Scalars first, in `ScalarKind` order (id = `ScalarKind` discriminant)
//! - Fixed-length vectors, grouped by element kind, ascending lane count
//! - Scalable vectors, same grouping
//!
//! Only power-of-two lane counts are catalogued. Anything else goes
//! through a `TypingContext`.

use crate::element_count::ElementCount;
use crate::scalar::ScalarKind;

macro_rules! define_simple_vts {
    (
        scalars { $($s:ident = $s_kind:ident),* $(,)? }
        fixed { $($f:ident = $f_kind:ident x $f_min:literal),* $(,)? }
        scalable { $($v:ident = $v_kind:ident x $v_min:literal),* $(,)? }
    ) => {
        /// A catalogued value type: a scalar kind, optionally with a lane count.
        ///
        /// The discriminant is the stable catalog id. Entries live for the
        /// whole process and are copied freely.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u8)]
        pub enum SimpleVt {
            $($s,)*
            $($f,)*
            $($v,)*
        }

        impl SimpleVt {
            /// Every entry, indexed by catalog id.
            pub(crate) const TABLE: &'static [SimpleVt] = &[
                $(SimpleVt::$s,)*
                $(SimpleVt::$f,)*
                $(SimpleVt::$v,)*
            ];

            /// Element kind (or the kind itself, for scalars).
            pub const fn scalar_kind(self) -> ScalarKind {
                match self {
                    $(SimpleVt::$s => ScalarKind::$s_kind,)*
                    $(SimpleVt::$f => ScalarKind::$f_kind,)*
                    $(SimpleVt::$v => ScalarKind::$v_kind,)*
                }
            }

            /// Lane count, or `None` for scalars.
            pub const fn vector_element_count(self) -> Option<ElementCount> {
                match self {
                    $(SimpleVt::$s => None,)*
                    $(SimpleVt::$f => Some(ElementCount::fixed($f_min)),)*
                    $(SimpleVt::$v => Some(ElementCount::scalable($v_min)),)*
                }
            }

            /// Catalog entry for a vector shape. A single `match`, so the cost
            /// does not grow with the catalog.
            pub(crate) const fn lookup_vector(
                kind: ScalarKind,
                count: ElementCount,
            ) -> Option<SimpleVt> {
                match (kind, count.min, count.scalable) {
                    $((ScalarKind::$f_kind, $f_min, false) => Some(SimpleVt::$f),)*
                    $((ScalarKind::$v_kind, $v_min, true) => Some(SimpleVt::$v),)*
                    _ => None,
                }
            }

            /// The scalar entry for `kind`. Every scalar kind is catalogued.
            pub const fn from_scalar(kind: ScalarKind) -> SimpleVt {
                match kind {
                    $(ScalarKind::$s_kind => SimpleVt::$s,)*
                }
            }
        }
    };
}

define_simple_vts! {
    scalars {
        I1 = I1, I8 = I8, I16 = I16, I32 = I32, I64 = I64, I128 = I128,
        F16 = F16, F32 = F32, F64 = F64, F80 = F80, F128 = F128,
    }
    fixed {
        V1I1 = I1 x 1, V2I1 = I1 x 2, V4I1 = I1 x 4, V8I1 = I1 x 8,
        V16I1 = I1 x 16, V32I1 = I1 x 32, V64I1 = I1 x 64, V128I1 = I1 x 128,
        V256I1 = I1 x 256, V512I1 = I1 x 512, V1024I1 = I1 x 1024,

        V1I8 = I8 x 1, V2I8 = I8 x 2, V4I8 = I8 x 4, V8I8 = I8 x 8,
        V16I8 = I8 x 16, V32I8 = I8 x 32, V64I8 = I8 x 64, V128I8 = I8 x 128,
        V256I8 = I8 x 256,

        V1I16 = I16 x 1, V2I16 = I16 x 2, V4I16 = I16 x 4, V8I16 = I16 x 8,
        V16I16 = I16 x 16, V32I16 = I16 x 32, V64I16 = I16 x 64,
        V128I16 = I16 x 128,

        V1I32 = I32 x 1, V2I32 = I32 x 2, V4I32 = I32 x 4, V8I32 = I32 x 8,
        V16I32 = I32 x 16, V32I32 = I32 x 32, V64I32 = I32 x 64,
        V128I32 = I32 x 128, V256I32 = I32 x 256, V512I32 = I32 x 512,
        V1024I32 = I32 x 1024, V2048I32 = I32 x 2048,

        V1I64 = I64 x 1, V2I64 = I64 x 2, V4I64 = I64 x 4, V8I64 = I64 x 8,
        V16I64 = I64 x 16, V32I64 = I64 x 32,

        V1I128 = I128 x 1,

        V2F16 = F16 x 2, V4F16 = F16 x 4, V8F16 = F16 x 8, V16F16 = F16 x 16,
        V32F16 = F16 x 32,

        V1F32 = F32 x 1, V2F32 = F32 x 2, V4F32 = F32 x 4, V8F32 = F32 x 8,
        V16F32 = F32 x 16, V32F32 = F32 x 32, V64F32 = F32 x 64,
        V128F32 = F32 x 128, V256F32 = F32 x 256, V512F32 = F32 x 512,
        V1024F32 = F32 x 1024, V2048F32 = F32 x 2048,

        V1F64 = F64 x 1, V2F64 = F64 x 2, V4F64 = F64 x 4, V8F64 = F64 x 8,
    }
    scalable {
        Nxv1I1 = I1 x 1, Nxv2I1 = I1 x 2, Nxv4I1 = I1 x 4, Nxv8I1 = I1 x 8,
        Nxv16I1 = I1 x 16, Nxv32I1 = I1 x 32,

        Nxv1I8 = I8 x 1, Nxv2I8 = I8 x 2, Nxv4I8 = I8 x 4, Nxv8I8 = I8 x 8,
        Nxv16I8 = I8 x 16, Nxv32I8 = I8 x 32,

        Nxv1I16 = I16 x 1, Nxv2I16 = I16 x 2, Nxv4I16 = I16 x 4,
        Nxv8I16 = I16 x 8, Nxv16I16 = I16 x 16, Nxv32I16 = I16 x 32,

        Nxv1I32 = I32 x 1, Nxv2I32 = I32 x 2, Nxv4I32 = I32 x 4,
        Nxv8I32 = I32 x 8, Nxv16I32 = I32 x 16, Nxv32I32 = I32 x 32,

        Nxv1I64 = I64 x 1, Nxv2I64 = I64 x 2, Nxv4I64 = I64 x 4,
        Nxv8I64 = I64 x 8, Nxv16I64 = I64 x 16, Nxv32I64 = I64 x 32,

        Nxv2F16 = F16 x 2, Nxv4F16 = F16 x 4, Nxv8F16 = F16 x 8,

        Nxv1F32 = F32 x 1, Nxv2F32 = F32 x 2, Nxv4F32 = F32 x 4,
        Nxv8F32 = F32 x 8, Nxv16F32 = F32 x 16,

        Nxv1F64 = F64 x 1, Nxv2F64 = F64 x 2, Nxv4F64 = F64 x 4,
        Nxv8F64 = F64 x 8,
    }
}

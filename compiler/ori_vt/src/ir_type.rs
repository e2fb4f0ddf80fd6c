//! Structural frontend types at the codegen boundary.
//!
//! The frontend describes values structurally: a scalar is a class plus a
//! bit width, a vector is a scalar element plus a lane count. Nothing here
//! is checked against the value type model; an `i24` is a perfectly good
//! frontend type that simply has no value type.

use std::fmt;

use crate::element_count::ElementCount;

/// Integer or floating-point, as the frontend sees it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum IrScalarClass {
    Integer,
    Float,
}

/// A frontend scalar type of arbitrary width.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct IrScalarType {
    pub class: IrScalarClass,
    pub bits: u32,
}

impl IrScalarType {
    #[inline]
    pub const fn int(bits: u32) -> Self {
        Self {
            class: IrScalarClass::Integer,
            bits,
        }
    }

    #[inline]
    pub const fn float_of_width(bits: u32) -> Self {
        Self {
            class: IrScalarClass::Float,
            bits,
        }
    }

    pub const fn half() -> Self {
        Self::float_of_width(16)
    }

    pub const fn float() -> Self {
        Self::float_of_width(32)
    }

    pub const fn double() -> Self {
        Self::float_of_width(64)
    }

    pub const fn x86_fp80() -> Self {
        Self::float_of_width(80)
    }

    pub const fn fp128() -> Self {
        Self::float_of_width(128)
    }

    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(self.class, IrScalarClass::Integer)
    }

    #[inline]
    pub const fn is_floating_point(self) -> bool {
        matches!(self.class, IrScalarClass::Float)
    }
}

impl fmt::Display for IrScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.class, self.bits) {
            (IrScalarClass::Integer, bits) => write!(f, "i{bits}"),
            (IrScalarClass::Float, 16) => f.write_str("half"),
            (IrScalarClass::Float, 32) => f.write_str("float"),
            (IrScalarClass::Float, 64) => f.write_str("double"),
            (IrScalarClass::Float, 80) => f.write_str("x86_fp80"),
            (IrScalarClass::Float, 128) => f.write_str("fp128"),
            (IrScalarClass::Float, bits) => write!(f, "f{bits}"),
        }
    }
}

/// A frontend vector type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct IrVectorType {
    element: IrScalarType,
    count: ElementCount,
}

impl IrVectorType {
    /// Accepts the lane count as an `ElementCount`, a `(min, scalable)` pair
    /// or a plain fixed `u32`.
    pub fn new(element: IrScalarType, count: impl Into<ElementCount>) -> Self {
        Self {
            element,
            count: count.into(),
        }
    }

    #[inline]
    pub const fn element_type(self) -> IrScalarType {
        self.element
    }

    #[inline]
    pub const fn element_count(self) -> ElementCount {
        self.count
    }

    #[inline]
    pub const fn min_num_elements(self) -> u32 {
        self.count.min
    }

    #[inline]
    pub const fn is_scalable(self) -> bool {
        self.count.scalable
    }
}

impl fmt::Display for IrVectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} x {}>", self.count, self.element)
    }
}

/// A frontend type that may be translated to a value type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum IrType {
    Scalar(IrScalarType),
    Vector(IrVectorType),
}

impl IrType {
    pub fn vector(element: IrScalarType, count: impl Into<ElementCount>) -> Self {
        IrType::Vector(IrVectorType::new(element, count))
    }

    #[inline]
    pub const fn is_vector(self) -> bool {
        matches!(self, IrType::Vector(_))
    }

    /// The element type of a vector, or the scalar itself.
    #[inline]
    pub const fn scalar_type(self) -> IrScalarType {
        match self {
            IrType::Scalar(scalar) => scalar,
            IrType::Vector(vector) => vector.element,
        }
    }
}

impl From<IrScalarType> for IrType {
    fn from(scalar: IrScalarType) -> Self {
        IrType::Scalar(scalar)
    }
}

impl From<IrVectorType> for IrType {
    fn from(vector: IrVectorType) -> Self {
        IrType::Vector(vector)
    }
}

impl fmt::Display for IrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrType::Scalar(scalar) => fmt::Display::fmt(scalar, f),
            IrType::Vector(vector) => fmt::Display::fmt(vector, f),
        }
    }
}

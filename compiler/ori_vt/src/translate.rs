//! Translation between frontend types and value types.
//!
//! Both directions keep the element kind, the minimum lane count and the
//! scalable flag exactly. For every `Evt` `e`,
//! `Evt::from_ir_type(ctx, &e.to_ir_type()) == Ok(e)`, and every frontend
//! type that translates at all comes back structurally unchanged.

use crate::context::TypingContext;
use crate::error::VtError;
use crate::evt::Evt;
use crate::ir_type::{IrScalarClass, IrScalarType, IrType};
use crate::scalar::{ScalarClass, ScalarKind};
use crate::simple_vt::SimpleVt;

impl ScalarKind {
    /// The model's kind for a frontend scalar, if it has one.
    pub const fn from_ir_scalar(ty: IrScalarType) -> Option<ScalarKind> {
        match ty.class {
            IrScalarClass::Integer => ScalarKind::integer_of_width(ty.bits),
            IrScalarClass::Float => ScalarKind::float_of_width(ty.bits),
        }
    }

    pub const fn to_ir_scalar(self) -> IrScalarType {
        match self.class() {
            ScalarClass::Integer => IrScalarType::int(self.bits()),
            ScalarClass::Float => IrScalarType::float_of_width(self.bits()),
        }
    }
}

impl Evt {
    /// Value type of a frontend type.
    ///
    /// Fails if the element is an integer or float width with no
    /// `ScalarKind`, such as `i24` or a 24-bit float.
    #[tracing::instrument(level = "trace", skip_all, fields(ty = %ty))]
    pub fn from_ir_type(ctx: &TypingContext, ty: &IrType) -> Result<Evt, VtError> {
        let kind = scalar_kind_of(ty)?;
        Ok(match ty {
            IrType::Scalar(_) => Evt::scalar(kind),
            IrType::Vector(vector) => Evt::vector(ctx, kind, vector.element_count()),
        })
    }

    /// Frontend type of this value type.
    pub fn to_ir_type(self) -> IrType {
        let element = self.scalar_kind().to_ir_scalar();
        match self.vector_element_count() {
            Some(count) => IrType::vector(element, count),
            None => IrType::Scalar(element),
        }
    }
}

impl SimpleVt {
    /// Catalog entry of a frontend type.
    ///
    /// Stricter than [`Evt::from_ir_type`]: shapes that would need a
    /// `TypingContext` are rejected too.
    #[tracing::instrument(level = "trace", skip_all, fields(ty = %ty))]
    pub fn from_ir_type(ty: &IrType) -> Result<SimpleVt, VtError> {
        let kind = scalar_kind_of(ty)?;
        let vt = match ty {
            IrType::Scalar(_) => Some(SimpleVt::from_scalar(kind)),
            IrType::Vector(vector) => SimpleVt::vector(kind, vector.element_count()),
        };
        vt.ok_or_else(|| invalid_type(ty))
    }

    pub fn to_ir_type(self) -> IrType {
        Evt::Simple(self).to_ir_type()
    }
}

fn scalar_kind_of(ty: &IrType) -> Result<ScalarKind, VtError> {
    ScalarKind::from_ir_scalar(ty.scalar_type()).ok_or_else(|| invalid_type(ty))
}

fn invalid_type(ty: &IrType) -> VtError {
    VtError::InvalidType { ty: ty.to_string() }
}

#[cfg(test)]
mod tests;

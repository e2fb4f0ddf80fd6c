use super::*;
use crate::element_count::ElementCount;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn scalable_ir_vector_to_evt() {
    let ctx = TypingContext::new();
    let int64 = IrScalarType::int(64);
    let nxv8i64 = IrType::vector(int64, (8u32, true));

    let vt = Evt::from_ir_type(&ctx, &nxv8i64).unwrap();
    assert!(vt.is_scalable_vector());
    assert_eq!(vt, SimpleVt::Nxv8I64);
    assert_eq!(vt.vector_element_count(), Some(ElementCount::scalable(8)));
    assert_eq!(
        Evt::from_ir_type(&ctx, &IrType::from(int64)).unwrap(),
        vt.scalar_type()
    );
}

#[test]
fn scalable_ir_vector_to_simple_vt() {
    let nxv8i64 = IrType::vector(IrScalarType::int(64), (8u32, true));
    let vt = SimpleVt::from_ir_type(&nxv8i64).unwrap();
    assert!(vt.is_scalable_vector());
    assert_eq!(vt, SimpleVt::Nxv8I64);
    assert_eq!(
        SimpleVt::from_ir_type(&IrType::from(IrScalarType::int(64))),
        Ok(vt.scalar_type())
    );
}

#[test]
fn evt_to_ir_vector() {
    let ctx = TypingContext::new();
    let nxv4f64 = Evt::vector(&ctx, ScalarKind::F64, (4u32, true));

    let IrType::Vector(ty) = nxv4f64.to_ir_type() else {
        panic!("expected a vector type");
    };
    assert!(ty.is_scalable());
    assert_eq!(nxv4f64.vector_element_count(), Some(ty.element_count()));
    assert_eq!(
        nxv4f64.scalar_type().to_ir_type(),
        IrType::Scalar(ty.element_type())
    );
    assert_eq!(ty.element_type(), IrScalarType::double());
}

#[test]
fn round_trip_through_ir() {
    let ctx = TypingContext::new();
    let ty = IrType::vector(IrScalarType::int(64), (8u32, true));

    let back = Evt::from_ir_type(&ctx, &ty).unwrap().to_ir_type();
    assert_eq!(back, ty);

    let IrType::Vector(vector) = back else {
        panic!("expected a vector type");
    };
    assert_eq!(vector.element_type(), IrScalarType::int(64));
    assert_eq!(vector.min_num_elements(), 8);
    assert!(vector.is_scalable());
}

#[test]
fn uncatalogued_shapes_translate_through_context() {
    let ctx = TypingContext::new();
    let ty = IrType::vector(IrScalarType::float(), 3u32);

    let vt = Evt::from_ir_type(&ctx, &ty).unwrap();
    assert!(vt.is_extended());
    assert_eq!(vt.to_ir_type(), ty);

    assert_eq!(
        SimpleVt::from_ir_type(&ty),
        Err(VtError::InvalidType {
            ty: "<3 x float>".to_string()
        })
    );
}

#[test]
fn unrepresentable_widths_fail() {
    let ctx = TypingContext::new();
    let cases = [
        IrType::from(IrScalarType::int(24)),
        IrType::from(IrScalarType::float_of_width(24)),
        IrType::vector(IrScalarType::int(7), (4u32, true)),
    ];
    for ty in cases {
        assert!(
            matches!(
                Evt::from_ir_type(&ctx, &ty),
                Err(VtError::InvalidType { .. })
            ),
            "{ty}"
        );
    }
    assert!(ctx.is_empty());
}

#[test]
fn every_catalog_entry_round_trips() {
    let ctx = TypingContext::new();
    for vt in SimpleVt::all_types() {
        assert_eq!(SimpleVt::from_ir_type(&vt.to_ir_type()), Ok(vt));
        assert_eq!(Evt::from_ir_type(&ctx, &vt.to_ir_type()), Ok(Evt::from(vt)));
    }
    assert!(ctx.is_empty());
}

fn representable_scalar() -> impl Strategy<Value = IrScalarType> {
    prop::sample::select(ScalarKind::ALL.to_vec()).prop_map(ScalarKind::to_ir_scalar)
}

proptest! {
    #[test]
    fn ir_round_trip(
        element in representable_scalar(),
        min in 1u32..512,
        scalable in any::<bool>(),
    ) {
        let ctx = TypingContext::new();
        let ty = IrType::vector(element, (min, scalable));
        let vt = Evt::from_ir_type(&ctx, &ty).unwrap();
        prop_assert_eq!(vt.to_ir_type(), ty);
        prop_assert_eq!(vt.is_scalable_vector(), scalable);
        prop_assert_eq!(Evt::from_ir_type(&ctx, &vt.to_ir_type()), Ok(vt));
    }
}

//! Scalable vector value types, end to end.

use ori_vt::{
    ElementCount, Evt, IrScalarType, IrType, ScalarKind, SimpleVt, TypingContext, VtError,
};
use pretty_assertions::assert_eq;

#[test]
fn integer_scalable_catalog_entries() {
    for vt in SimpleVt::integer_scalable_vector_types() {
        assert!(vt.is_valid());
        assert!(vt.is_integer());
        assert!(vt.is_vector());
        assert!(vt.is_scalable_vector());
        assert!(vt.scalar_type().is_valid());
        assert!(!vt.is_floating_point());
    }
}

#[test]
fn fp_scalable_catalog_entries() {
    for vt in SimpleVt::fp_scalable_vector_types() {
        assert!(vt.is_valid());
        assert!(vt.is_floating_point());
        assert!(vt.is_vector());
        assert!(vt.is_scalable_vector());
        assert!(vt.scalar_type().is_valid());
        assert!(!vt.is_integer());
    }
}

#[test]
fn helper_functions() {
    ori_vt::init_tracing();
    let ctx = TypingContext::new();

    // Scalable flag, separate count, and pair all build the same thing.
    let nxv4i32 = Evt::vector(&ctx, ScalarKind::I32, (4u32, true));
    assert!(nxv4i32.is_scalable_vector());

    let count = ElementCount::new(2, true);
    let nxv2i32 = Evt::vector(&ctx, ScalarKind::I32, count);
    assert!(nxv2i32.is_scalable_vector());

    let nxv2i64 = Evt::vector(&ctx, ScalarKind::I64, (2u32, true));
    assert!(nxv2i64.is_scalable_vector());

    assert_eq!(
        Evt::vector(&ctx, ScalarKind::I32, ElementCount::scalable(4)),
        SimpleVt::Nxv4I32
    );

    assert_eq!(nxv2i32.widen_integer_vector_element_type(&ctx), Ok(nxv2i64));
    assert_eq!(nxv4i32.half_num_vector_elements(&ctx), Ok(nxv2i32));

    assert_eq!(
        Evt::vector(&ctx, ScalarKind::I64, count * 2),
        SimpleVt::Nxv4I64
    );
    assert_eq!(
        Evt::vector(&ctx, ScalarKind::I64, count.checked_div(2).unwrap()),
        SimpleVt::Nxv1I64
    );

    let nxv2f64 = Evt::vector(&ctx, ScalarKind::F64, (2u32, true));
    assert_eq!(nxv2f64.change_type_to_integer(&ctx), Ok(nxv2i64));

    let count = nxv4i32.vector_element_count().unwrap();
    assert_eq!(count.min, 4);
    assert!(count.scalable);

    let v8i32 = Evt::vector(&ctx, ScalarKind::I32, 8u32);
    assert!(!v8i32.is_scalable_vector());
    let v4f64 = Evt::vector(&ctx, ScalarKind::F64, (4u32, false));
    assert!(!v4f64.is_scalable_vector());

    let count = v8i32.vector_element_count().unwrap();
    assert_eq!(count.min, 8);
    assert!(!count.scalable);

    // Everything above is catalogued.
    assert!(ctx.is_empty());
}

#[test]
fn odd_minimum_does_not_halve() {
    assert_eq!(
        ElementCount::new(5, true).checked_div(2),
        Err(VtError::Division { min: 5, divisor: 2 })
    );
}

#[test]
fn ir_to_value_type() {
    let ctx = TypingContext::new();
    let int64 = IrScalarType::int(64);
    let ty = IrType::vector(int64, (8u32, true));
    let IrType::Vector(vector) = ty else {
        unreachable!()
    };

    let mvt = SimpleVt::from_ir_type(&ty).unwrap();
    assert!(mvt.is_scalable_vector());
    assert_eq!(Some(vector.element_count()), mvt.vector_element_count());
    assert_eq!(
        SimpleVt::from_ir_type(&IrType::from(vector.element_type())),
        Ok(mvt.scalar_type())
    );

    let evt = Evt::from_ir_type(&ctx, &ty).unwrap();
    assert!(evt.is_scalable_vector());
    assert_eq!(Some(vector.element_count()), evt.vector_element_count());
    assert_eq!(
        Evt::from_ir_type(&ctx, &IrType::from(vector.element_type())),
        Ok(evt.scalar_type())
    );
}

#[test]
fn value_type_to_ir() {
    let ctx = TypingContext::new();
    let nxv4f64 = Evt::vector(&ctx, ScalarKind::F64, (4u32, true));

    let IrType::Vector(vector) = nxv4f64.to_ir_type() else {
        panic!("expected a vector type");
    };
    assert!(vector.is_scalable());
    assert_eq!(nxv4f64.vector_element_count(), Some(vector.element_count()));
    assert_eq!(
        nxv4f64.scalar_type().to_ir_type(),
        IrType::from(vector.element_type())
    );
}

#[test]
fn shared_context_across_threads() {
    let ctx = std::sync::Arc::new(TypingContext::new());
    let workers: Vec<_> = (1..=4u32)
        .map(|i| {
            let ctx = std::sync::Arc::clone(&ctx);
            std::thread::spawn(move || {
                (0..16u32)
                    .map(|n| Evt::vector(&ctx, ScalarKind::I16, (3 * (n % 4 + 1) * i, true)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    for worker in workers {
        for vt in worker.join().unwrap() {
            assert!(vt.is_scalable_vector());
        }
    }
    // Distinct minimums: 3 * k * i for k, i in 1..=4.
    let mut mins: Vec<u32> = (1..=4u32)
        .flat_map(|i| (1..=4u32).map(move |k| 3 * k * i))
        .collect();
    mins.sort_unstable();
    mins.dedup();
    assert_eq!(ctx.len(), mins.len());
}

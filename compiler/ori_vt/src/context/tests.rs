use super::*;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn v3i32() -> ExtendedDescriptor {
    ExtendedDescriptor {
        scalar: ScalarKind::I32,
        count: ElementCount::fixed(3),
    }
}

fn nxv64i8() -> ExtendedDescriptor {
    ExtendedDescriptor {
        scalar: ScalarKind::I8,
        count: ElementCount::scalable(64),
    }
}

#[test]
fn starts_empty() {
    let ctx = TypingContext::new();
    assert!(ctx.is_empty());
    assert_eq!(ctx.len(), 0);
}

#[test]
fn intern_deduplicates() {
    let ctx = TypingContext::new();

    let a = ctx.intern(v3i32());
    let b = ctx.intern(v3i32());
    let c = ctx.intern(nxv64i8());

    assert!(a.same_entry(b));
    assert!(!a.same_entry(c));
    assert_eq!(a.slot(), b.slot());
    assert_eq!(ctx.len(), 2);
}

#[test]
fn lookup_returns_descriptor() {
    let ctx = TypingContext::new();
    let vt = ctx.intern(nxv64i8());

    assert_eq!(ctx.lookup(vt), Some(nxv64i8()));
    assert_eq!(vt.descriptor(), nxv64i8());
    assert_eq!(vt.scalar_kind(), ScalarKind::I8);
    assert_eq!(vt.element_count(), ElementCount::scalable(64));
    assert!(ctx.contains(&nxv64i8()));
    assert!(!ctx.contains(&v3i32()));
}

#[test]
fn handles_are_tied_to_their_context() {
    let first = TypingContext::new();
    let second = TypingContext::new();
    assert_ne!(first.id(), second.id());

    let a = first.intern(v3i32());
    let b = second.intern(v3i32());

    assert_eq!(a.slot(), b.slot());
    assert!(!a.same_entry(b));
    assert_eq!(a.context(), first.id());
    assert_eq!(second.lookup(a), None);
    assert_eq!(first.lookup(a), Some(v3i32()));
}

#[test]
fn concurrent_interning_yields_one_entry() {
    let ctx = Arc::new(TypingContext::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let ctx = Arc::clone(&ctx);
            std::thread::spawn(move || ctx.intern(v3i32()))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(ctx.len(), 1);
    for vt in &results {
        assert!(vt.same_entry(results[0]));
    }
}

#[test]
fn catalogued_shapes_are_refused() {
    let ctx = TypingContext::new();
    let nxv4i32 = ExtendedDescriptor {
        scalar: ScalarKind::I32,
        count: ElementCount::scalable(4),
    };

    assert_eq!(
        ctx.try_intern(nxv4i32).map(ExtendedVt::descriptor),
        Err(VtError::Catalogued {
            vt: SimpleVt::Nxv4I32
        })
    );
    assert!(ctx.is_empty());
    assert!(!ctx.contains(&nxv4i32));
}

#[test]
#[should_panic(expected = "`nxv4i32` is catalogued")]
fn intern_panics_on_catalogued_shape() {
    let ctx = TypingContext::new();
    ctx.intern(ExtendedDescriptor {
        scalar: ScalarKind::I32,
        count: ElementCount::scalable(4),
    });
}

#[test]
fn try_intern_matches_intern() {
    let ctx = TypingContext::new();
    let a = ctx.try_intern(v3i32()).unwrap();
    let b = ctx.intern(v3i32());
    assert!(a.same_entry(b));
    assert_eq!(ctx.len(), 1);
}

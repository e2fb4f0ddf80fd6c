//! Value type descriptors for the Ori code generator.
//!
//! Instruction selection and type legalization reason about values by shape:
//! a primitive scalar kind, optionally with a vector lane count. Lane counts
//! may be *scalable*, meaning the real count is a known minimum times a
//! target constant only known at run time.
//!
//! # Representation
//!
//! - `SimpleVt`: a one-byte id into a static catalog of common shapes
//! - `Evt`: either a `SimpleVt` or a handle to a shape interned in a
//!   `TypingContext`, for everything the catalog lacks
//!
//! Equality on `Evt` is by shape, so callers never need to know which branch
//! a value took. Legality ("does this target support `nxv4i32`?") is not
//! decided here.
//!
//! # Tracing
//!
//! Enable with `RUST_LOG=ori_vt=debug` (new interned shapes) or
//! `RUST_LOG=ori_vt=trace` (catalog misses, frontend translation).

use std::sync::Once;

mod context;
mod element_count;
mod error;
mod evt;
mod ir_type;
mod scalar;
mod simple_vt;
mod translate;

pub use context::{ContextId, ExtendedDescriptor, ExtendedVt, TypingContext};
pub use element_count::{ElementCount, TypeSize};
pub use error::VtError;
pub use evt::Evt;
pub use ir_type::{IrScalarClass, IrScalarType, IrType, IrVectorType};
pub use scalar::{ScalarClass, ScalarKind};
pub use simple_vt::SimpleVt;

// Size assertions to prevent accidental regressions.
// `SimpleVt` and `ElementCount` are copied through every legalization table.
const _: () = assert!(std::mem::size_of::<SimpleVt>() == 1);
const _: () = assert!(std::mem::size_of::<ScalarKind>() == 1);
const _: () = assert!(std::mem::size_of::<ElementCount>() == 8);

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for value type debugging.
///
/// Compiler drivers install their own subscriber. Tools that link this crate
/// without a driver (legalization table generators, the value type tests)
/// have nothing to see interning and catalog misses with; this gives them a
/// subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

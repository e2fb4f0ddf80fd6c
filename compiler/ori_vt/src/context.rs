//! Typing context: the intern table for extended value types.
//!
//! Vector combinations missing from the `SimpleVt` catalog are interned here
//! as `ExtendedDescriptor`s. Catalogued shapes are refused, so a shape has
//! exactly one home. Equal requests get the same slot, so two
//! handles for one combination are representation-identical, not merely
//! equal. Descriptors are never freed one at a time; they all go away with
//! the context.
//!
//! # Thread Safety
//! The table sits behind one `RwLock`. Lookups take the read lock; an insert
//! checks again under the write lock, so lookup-or-insert is atomic for every
//! caller sharing the context.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::element_count::ElementCount;
use crate::error::VtError;
use crate::scalar::ScalarKind;
use crate::simple_vt::SimpleVt;

/// Process-unique identity of a `TypingContext`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ContextId(u32);

impl ContextId {
    fn next() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A vector shape with no catalog entry.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtendedDescriptor {
    pub scalar: ScalarKind,
    pub count: ElementCount,
}

/// Handle to a descriptor interned in a `TypingContext`.
///
/// Carries the owning context, the slot in its table, and the descriptor
/// value, so classification never needs the context. The handle does not
/// own anything; the slot stays meaningful for as long as the context lives.
#[derive(Copy, Clone, Debug)]
pub struct ExtendedVt {
    context: ContextId,
    slot: u32,
    descriptor: ExtendedDescriptor,
}

impl ExtendedVt {
    #[inline]
    pub const fn descriptor(self) -> ExtendedDescriptor {
        self.descriptor
    }

    #[inline]
    pub const fn scalar_kind(self) -> ScalarKind {
        self.descriptor.scalar
    }

    #[inline]
    pub const fn element_count(self) -> ElementCount {
        self.descriptor.count
    }

    #[inline]
    pub const fn context(self) -> ContextId {
        self.context
    }

    #[inline]
    pub const fn slot(self) -> u32 {
        self.slot
    }

    /// Whether both handles name the same interned entry.
    ///
    /// Stronger than `==` on `Evt`, which compares by value.
    #[inline]
    pub fn same_entry(self, other: ExtendedVt) -> bool {
        self.context == other.context && self.slot == other.slot
    }
}

/// Intern table storage.
struct ExtendedTable {
    /// Descriptor to slot, for deduplication.
    map: FxHashMap<ExtendedDescriptor, u32>,
    /// Descriptors by slot.
    descriptors: Vec<ExtendedDescriptor>,
}

/// Owner of every extended value type created during one compilation unit.
///
/// Create one per compilation unit, or share one behind an `Arc`; both are
/// sound. Dropping it releases all of its descriptors together.
pub struct TypingContext {
    id: ContextId,
    table: RwLock<ExtendedTable>,
}

impl TypingContext {
    pub fn new() -> Self {
        Self {
            id: ContextId::next(),
            table: RwLock::new(ExtendedTable {
                map: FxHashMap::default(),
                descriptors: Vec::new(),
            }),
        }
    }

    #[inline]
    pub fn id(&self) -> ContextId {
        self.id
    }

    /// Intern `descriptor`, returning the existing handle if it was seen
    /// before.
    ///
    /// Fails with `VtError::Catalogued` if the shape has a `SimpleVt`
    /// entry; use `Evt::vector` to get whichever representation applies.
    pub fn try_intern(&self, descriptor: ExtendedDescriptor) -> Result<ExtendedVt, VtError> {
        if let Some(vt) = SimpleVt::vector(descriptor.scalar, descriptor.count) {
            return Err(VtError::Catalogued { vt });
        }

        // Fast path: already interned
        if let Some(&slot) = self.table.read().map.get(&descriptor) {
            return Ok(self.handle(slot, descriptor));
        }

        let mut guard = self.table.write();

        // Double-check after acquiring write lock
        if let Some(&slot) = guard.map.get(&descriptor) {
            return Ok(self.handle(slot, descriptor));
        }

        let slot = u32::try_from(guard.descriptors.len()).map_err(|_| {
            VtError::ContextOverflow {
                context: self.id.raw(),
            }
        })?;
        guard.descriptors.push(descriptor);
        guard.map.insert(descriptor, slot);

        tracing::debug!(
            context = self.id.raw(),
            slot,
            scalar = %descriptor.scalar,
            count = %descriptor.count,
            "interned extended value type"
        );

        Ok(self.handle(slot, descriptor))
    }

    /// Intern `descriptor`, returning the existing handle if it was seen
    /// before.
    ///
    /// # Panics
    /// Panics if the shape is catalogued, or if the context already holds
    /// `u32::MAX` descriptors. Use `try_intern` for fallible interning.
    pub fn intern(&self, descriptor: ExtendedDescriptor) -> ExtendedVt {
        self.try_intern(descriptor).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the descriptor behind `vt`.
    ///
    /// Returns `None` if `vt` was interned by a different context.
    pub fn lookup(&self, vt: ExtendedVt) -> Option<ExtendedDescriptor> {
        if vt.context != self.id {
            return None;
        }
        let index = usize::try_from(vt.slot).ok()?;
        self.table.read().descriptors.get(index).copied()
    }

    /// Whether `descriptor` has been interned here.
    pub fn contains(&self, descriptor: &ExtendedDescriptor) -> bool {
        self.table.read().map.contains_key(descriptor)
    }

    /// Number of interned descriptors.
    pub fn len(&self) -> usize {
        self.table.read().descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn handle(&self, slot: u32, descriptor: ExtendedDescriptor) -> ExtendedVt {
        ExtendedVt {
            context: self.id,
            slot,
            descriptor,
        }
    }
}

impl Default for TypingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TypingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypingContext")
            .field("id", &self.id)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests;

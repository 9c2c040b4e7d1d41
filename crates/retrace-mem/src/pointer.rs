use std::fmt;

use crate::error::{MemError, Result};
use crate::layout::{MemoryLayout, ScalarKind};
use crate::slice::Slice;

/// An opaque 64-bit device address.
///
/// Equality and ordering are defined purely on the address value. Address `0`
/// is the canonical null ([`Pointer::NULL`]). A bare pointer addresses bytes;
/// layout-dependent views are built with [`Pointer::slice`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pointer(u64);

impl Pointer {
    pub const NULL: Pointer = Pointer(0);

    pub const fn new(address: u64) -> Self {
        Self(address)
    }

    pub const fn address(self) -> u64 {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Returns the pointer advanced by `n` bytes.
    ///
    /// Fails with [`MemError::AddressOverflow`] if the result does not fit in
    /// the 64-bit device address width. For non-overflowing offsets the
    /// operation is associative: `p.offset(a)?.offset(b)? == p.offset(a + b)?`.
    pub fn offset(self, n: u64) -> Result<Pointer> {
        self.0
            .checked_add(n)
            .map(Pointer)
            .ok_or(MemError::AddressOverflow {
                base: self,
                offset: n,
            })
    }

    /// Size in bytes of the element this pointer addresses.
    ///
    /// A bare pointer is byte-typed, so this is the layout's `i8` size; use
    /// [`MemoryLayout::size_of`] with a [`ScalarKind`] for wider elements.
    pub fn element_size(self, layout: &MemoryLayout) -> u64 {
        layout.size_of(ScalarKind::U8)
    }

    /// Returns a view of elements `[start, end)` counted from this pointer.
    ///
    /// `start > end` fails with [`MemError::SliceRange`]. The view is a
    /// bounded description of device memory, not a copy.
    pub fn slice(self, start: u64, end: u64, layout: &MemoryLayout) -> Result<Slice> {
        self.slice_of(ScalarKind::U8, start, end, layout)
    }

    /// Like [`Pointer::slice`] but with elements of the given scalar kind.
    pub fn slice_of(
        self,
        kind: ScalarKind,
        start: u64,
        end: u64,
        layout: &MemoryLayout,
    ) -> Result<Slice> {
        if start > end {
            return Err(MemError::SliceRange { start, end });
        }
        let element_size = layout.size_of(kind);
        let base = self.offset(
            start
                .checked_mul(element_size)
                .ok_or(MemError::SliceOverflow {
                    base: self,
                    count: start,
                    element_size,
                })?,
        )?;
        Slice::new(base, end - start, element_size)
    }
}

impl From<u64> for Pointer {
    fn from(address: u64) -> Self {
        Self(address)
    }
}

impl fmt::Display for Pointer {
    /// Fixed-width hex so diagnostics line up across a replay log.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

use crate::error::{MemError, Result};
use crate::pointer::Pointer;

/// A lazily bounded view of device memory.
///
/// A slice is `count` elements of `element_size` bytes starting at `base`.
/// It describes a region; it never copies or resolves the bytes itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    base: Pointer,
    count: u64,
    element_size: u64,
}

impl Slice {
    pub(crate) fn new(base: Pointer, count: u64, element_size: u64) -> Result<Self> {
        let bytes = count
            .checked_mul(element_size)
            .ok_or(MemError::SliceOverflow {
                base,
                count,
                element_size,
            })?;
        // The last byte must stay inside the device address width.
        base.offset(bytes)?;
        Ok(Self {
            base,
            count,
            element_size,
        })
    }

    pub fn base(&self) -> Pointer {
        self.base
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn element_size(&self) -> u64 {
        self.element_size
    }

    pub fn byte_len(&self) -> u64 {
        self.count * self.element_size
    }

    /// Narrows the view to elements `[start, end)` of this slice.
    pub fn sub(&self, start: u64, end: u64) -> Result<Slice> {
        if start > end {
            return Err(MemError::SliceRange { start, end });
        }
        if end > self.count {
            return Err(MemError::SliceOutOfRange {
                end,
                count: self.count,
            });
        }
        let base = self.base.offset(start * self.element_size)?;
        Slice::new(base, end - start, self.element_size)
    }
}

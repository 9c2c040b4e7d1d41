use thiserror::Error;

use crate::pointer::Pointer;

pub type Result<T> = std::result::Result<T, MemError>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MemError {
    /// Offsetting the pointer left the 64-bit device address width.
    ///
    /// Address arithmetic is checked: an offset past `u64::MAX` is reported,
    /// never silently wrapped.
    #[error("device address overflow: {base} + {offset:#x}")]
    AddressOverflow { base: Pointer, offset: u64 },

    #[error("invalid slice range: start {start} > end {end}")]
    SliceRange { start: u64, end: u64 },

    /// A slice's byte extent does not fit in the device address width.
    #[error("slice extent overflow: {count} elements of {element_size} bytes at {base}")]
    SliceOverflow {
        base: Pointer,
        count: u64,
        element_size: u64,
    },

    /// Sub-slicing past the end of the parent slice.
    #[error("slice range out of bounds: element {end} past count {count}")]
    SliceOutOfRange { end: u64, count: u64 },

    #[error("access out of bounds: {len:#x} bytes at {addr} exceeds pool size {pool_size:#x}")]
    OutOfBounds {
        addr: Pointer,
        len: u64,
        pool_size: u64,
    },

    #[error("pool chunk size must be non-zero")]
    InvalidChunkSize,

    /// Scalar transfers move through a u64, so a layout may not declare a
    /// scalar wider than 8 bytes.
    #[error("scalar width {size} exceeds the 8-byte transfer limit")]
    ScalarTooWide { size: u64 },
}

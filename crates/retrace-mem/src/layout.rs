/// Byte order of the device the capture was taken on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

/// Size and alignment of one scalar kind on the captured device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarLayout {
    pub size: u64,
    pub alignment: u64,
}

impl ScalarLayout {
    pub const fn new(size: u64, alignment: u64) -> Self {
        Self { size, alignment }
    }
}

/// Scalar kinds a layout can describe.
///
/// Pointer-derived queries ([`crate::Pointer::slice`], element sizing) take
/// one of these rather than assuming a host type, so the same capture replays
/// correctly regardless of the device's word size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    U8,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    /// The device's native `int`.
    Integer,
    /// The device's `size_t`.
    Size,
    /// A device pointer.
    Pointer,
}

/// Memory layout descriptor for the captured device.
///
/// Supplied externally by the replay state; nothing in this crate assumes a
/// fixed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryLayout {
    pub endian: Endian,
    pub pointer: ScalarLayout,
    pub integer: ScalarLayout,
    pub size: ScalarLayout,
    pub i64: ScalarLayout,
    pub i32: ScalarLayout,
    pub i16: ScalarLayout,
    pub i8: ScalarLayout,
    pub f64: ScalarLayout,
    pub f32: ScalarLayout,
}

impl MemoryLayout {
    /// Layout of a typical little-endian 64-bit device.
    pub const fn little_endian_64() -> Self {
        Self {
            endian: Endian::Little,
            pointer: ScalarLayout::new(8, 8),
            integer: ScalarLayout::new(8, 8),
            size: ScalarLayout::new(8, 8),
            i64: ScalarLayout::new(8, 8),
            i32: ScalarLayout::new(4, 4),
            i16: ScalarLayout::new(2, 2),
            i8: ScalarLayout::new(1, 1),
            f64: ScalarLayout::new(8, 8),
            f32: ScalarLayout::new(4, 4),
        }
    }

    /// Layout of a typical little-endian 32-bit device.
    pub const fn little_endian_32() -> Self {
        Self {
            endian: Endian::Little,
            pointer: ScalarLayout::new(4, 4),
            integer: ScalarLayout::new(4, 4),
            size: ScalarLayout::new(4, 4),
            i64: ScalarLayout::new(8, 8),
            i32: ScalarLayout::new(4, 4),
            i16: ScalarLayout::new(2, 2),
            i8: ScalarLayout::new(1, 1),
            f64: ScalarLayout::new(8, 8),
            f32: ScalarLayout::new(4, 4),
        }
    }

    pub fn scalar(&self, kind: ScalarKind) -> ScalarLayout {
        match kind {
            ScalarKind::U8 | ScalarKind::I8 => self.i8,
            ScalarKind::I16 => self.i16,
            ScalarKind::I32 => self.i32,
            ScalarKind::I64 => self.i64,
            ScalarKind::F32 => self.f32,
            ScalarKind::F64 => self.f64,
            ScalarKind::Integer => self.integer,
            ScalarKind::Size => self.size,
            ScalarKind::Pointer => self.pointer,
        }
    }

    pub fn size_of(&self, kind: ScalarKind) -> u64 {
        self.scalar(kind).size
    }

    pub fn alignment_of(&self, kind: ScalarKind) -> u64 {
        self.scalar(kind).alignment
    }
}

impl Default for MemoryLayout {
    fn default() -> Self {
        Self::little_endian_64()
    }
}

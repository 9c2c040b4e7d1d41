use std::collections::HashMap;

use crate::error::{MemError, Result};
use crate::layout::{Endian, MemoryLayout, ScalarKind};
use crate::pointer::Pointer;

// Scalar transfers move through a u64; reject layouts that declare wider
// scalars instead of slicing past the staging buffer.
fn scalar_width(layout: &MemoryLayout, kind: ScalarKind) -> Result<usize> {
    let size = layout.size_of(kind);
    if size > 8 {
        return Err(MemError::ScalarTooWide { size });
    }
    Ok(size as usize)
}

/// Tuning knobs for [`Pool`].
#[derive(Debug, Clone, Copy)]
pub struct PoolOptions {
    /// Allocation granularity in bytes. Must be non-zero.
    pub chunk_size: u64,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self { chunk_size: 4096 }
    }
}

/// Sparse, chunked device memory.
///
/// Backing chunks are allocated on first write; reads of untouched memory
/// observe zero and never allocate. All access is by [`Pointer`] plus an
/// explicit length or [`MemoryLayout`], so a replay pass never deals in host
/// addresses.
#[derive(Debug)]
pub struct Pool {
    size: u64,
    chunk_size: u64,
    chunks: HashMap<u64, Box<[u8]>>,
}

impl Pool {
    pub fn new(size: u64) -> Self {
        Self {
            size,
            chunk_size: PoolOptions::default().chunk_size,
            chunks: HashMap::new(),
        }
    }

    pub fn with_options(size: u64, options: PoolOptions) -> Result<Self> {
        if options.chunk_size == 0 {
            return Err(MemError::InvalidChunkSize);
        }
        Ok(Self {
            size,
            chunk_size: options.chunk_size,
            chunks: HashMap::new(),
        })
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Number of chunks currently backed by host memory.
    pub fn allocated_chunks(&self) -> usize {
        self.chunks.len()
    }

    fn check(&self, addr: Pointer, len: u64) -> Result<()> {
        let end = addr.address().checked_add(len);
        match end {
            Some(end) if end <= self.size => Ok(()),
            _ => Err(MemError::OutOfBounds {
                addr,
                len,
                pool_size: self.size,
            }),
        }
    }

    /// Fills `buf` from device memory starting at `addr`.
    pub fn read(&self, addr: Pointer, buf: &mut [u8]) -> Result<()> {
        self.check(addr, buf.len() as u64)?;
        let mut pos = addr.address();
        let mut filled = 0usize;
        while filled < buf.len() {
            let chunk_index = pos / self.chunk_size;
            let offset = (pos % self.chunk_size) as usize;
            let take = ((self.chunk_size as usize) - offset).min(buf.len() - filled);
            match self.chunks.get(&chunk_index) {
                Some(chunk) => buf[filled..filled + take].copy_from_slice(&chunk[offset..offset + take]),
                None => buf[filled..filled + take].fill(0),
            }
            filled += take;
            pos += take as u64;
        }
        Ok(())
    }

    /// Writes `data` to device memory starting at `addr`.
    pub fn write(&mut self, addr: Pointer, data: &[u8]) -> Result<()> {
        self.check(addr, data.len() as u64)?;
        let chunk_size = self.chunk_size;
        let mut pos = addr.address();
        let mut written = 0usize;
        while written < data.len() {
            let chunk_index = pos / chunk_size;
            let offset = (pos % chunk_size) as usize;
            let take = ((chunk_size as usize) - offset).min(data.len() - written);
            let chunk = self
                .chunks
                .entry(chunk_index)
                .or_insert_with(|| vec![0u8; chunk_size as usize].into_boxed_slice());
            chunk[offset..offset + take].copy_from_slice(&data[written..written + take]);
            written += take;
            pos += take as u64;
        }
        Ok(())
    }

    pub fn read_u8(&self, addr: Pointer) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.read(addr, &mut buf)?;
        Ok(buf[0])
    }

    pub fn write_u8(&mut self, addr: Pointer, value: u8) -> Result<()> {
        self.write(addr, &[value])
    }

    /// Reads a scalar of the given kind, honoring the layout's size and byte
    /// order. Values narrower than 8 bytes zero-extend.
    pub fn read_scalar(
        &self,
        addr: Pointer,
        kind: ScalarKind,
        layout: &MemoryLayout,
    ) -> Result<u64> {
        let size = scalar_width(layout, kind)?;
        let mut buf = [0u8; 8];
        self.read(addr, &mut buf[..size])?;
        let mut value = 0u64;
        match layout.endian {
            Endian::Little => {
                for (i, b) in buf[..size].iter().enumerate() {
                    value |= (*b as u64) << (8 * i);
                }
            }
            Endian::Big => {
                for b in &buf[..size] {
                    value = (value << 8) | *b as u64;
                }
            }
        }
        Ok(value)
    }

    /// Writes a scalar of the given kind, honoring the layout's size and byte
    /// order. Bits beyond the layout's scalar size are truncated.
    pub fn write_scalar(
        &mut self,
        addr: Pointer,
        value: u64,
        kind: ScalarKind,
        layout: &MemoryLayout,
    ) -> Result<()> {
        let size = scalar_width(layout, kind)?;
        let mut buf = [0u8; 8];
        match layout.endian {
            Endian::Little => {
                for (i, b) in buf[..size].iter_mut().enumerate() {
                    *b = (value >> (8 * i)) as u8;
                }
            }
            Endian::Big => {
                for (i, b) in buf[..size].iter_mut().enumerate() {
                    *b = (value >> (8 * (size - 1 - i))) as u8;
                }
            }
        }
        self.write(addr, &buf[..size])
    }

    /// Reads a device pointer stored at `addr`.
    pub fn read_pointer(&self, addr: Pointer, layout: &MemoryLayout) -> Result<Pointer> {
        Ok(Pointer::new(self.read_scalar(
            addr,
            ScalarKind::Pointer,
            layout,
        )?))
    }

    /// Stores a device pointer at `addr`.
    pub fn write_pointer(
        &mut self,
        addr: Pointer,
        value: Pointer,
        layout: &MemoryLayout,
    ) -> Result<()> {
        self.write_scalar(addr, value.address(), ScalarKind::Pointer, layout)
    }

    /// Materializes the bytes covered by `slice`.
    pub fn resolve(&self, slice: &crate::Slice) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; slice.byte_len() as usize];
        self.read(slice.base(), &mut buf)?;
        Ok(buf)
    }
}

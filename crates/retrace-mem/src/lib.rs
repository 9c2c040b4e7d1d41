//! Device memory model for capture/replay.
//!
//! Commands never touch host memory directly: they hold an opaque [`Pointer`]
//! into a device address space and resolve sizes/offsets through a
//! [`MemoryLayout`] supplied by the replay state. [`Slice`] is a lazily
//! bounded view over that space (no copies), and [`Pool`] is the sparse
//! backing store a replay pass reads and writes through pointer + layout.

#![forbid(unsafe_code)]

mod error;
mod layout;
mod pointer;
mod pool;
mod slice;

pub use error::{MemError, Result};
pub use layout::{Endian, MemoryLayout, ScalarKind, ScalarLayout};
pub use pointer::Pointer;
pub use pool::{Pool, PoolOptions};
pub use slice::Slice;

use retrace_mem::{Pointer, Slice};

/// A low-level operation emitted during [`crate::Cmd::mutate`].
#[derive(Debug, Clone, PartialEq)]
pub enum ReplayOp {
    /// Store bytes to device memory.
    Store { dst: Pointer, data: Vec<u8> },
    /// Load a region of device memory.
    Load { src: Slice },
    /// Invoke a device-side function by name.
    Call { name: String },
    /// Marker for correlating emitted operations with the source command.
    Label(u64),
}

/// Ordered consumer of replay operations.
///
/// [`crate::Cmd::mutate`] is the only producer; operations arrive in program
/// order within and across commands.
pub trait ReplaySink {
    fn emit(&mut self, op: ReplayOp);
}

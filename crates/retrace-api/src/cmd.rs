use std::fmt;

use bitflags::bitflags;
use thiserror::Error;

use retrace_mem::{MemError, Slice};

use crate::registry::ApiId;
use crate::sink::ReplaySink;
use crate::state::GlobalState;

/// Identity of a command within a capture.
///
/// [`CmdId::NO_ID`] marks synthetic commands that were not part of the
/// captured stream; it doubles as the "no caller" sentinel for top-level
/// commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CmdId(pub u64);

impl CmdId {
    pub const NO_ID: CmdId = CmdId(u64::MAX);

    /// True for commands that were part of the captured stream.
    pub fn is_real(self) -> bool {
        self != Self::NO_ID
    }
}

/// A zero-valued command is synthetic until it is given a real identity.
impl Default for CmdId {
    fn default() -> Self {
        Self::NO_ID
    }
}

impl fmt::Display for CmdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_real() {
            write!(f, "{}", self.0)
        } else {
            f.write_str("no-id")
        }
    }
}

bitflags! {
    /// Properties of a command, possibly computed from the state snapshot.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct CmdFlags: u32 {
        const SIDE_EFFECTS = 1 << 0;
        const USER_VISIBLE = 1 << 1;
        const DRAW_CALL = 1 << 2;
        const CLEAR = 1 << 3;
        /// The command observed a prior state change.
        const STATE_CHANGE = 1 << 4;
    }
}

/// Out-of-band data attached to a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Extra {
    Label(String),
    /// A memory observation captured alongside the command.
    Observation { range: Slice, data: Vec<u8> },
}

/// Ordered bag of [`Extra`] values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CmdExtras {
    extras: Vec<Extra>,
}

impl CmdExtras {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, extra: Extra) {
        self.extras.push(extra);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Extra> {
        self.extras.iter()
    }

    pub fn len(&self) -> usize {
        self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extras.is_empty()
    }

    /// All label extras, in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.extras.iter().filter_map(|e| match e {
            Extra::Label(s) => Some(s.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MutateError {
    #[error("memory access failed: {0}")]
    Mem(#[from] MemError),

    #[error("mutation failed: {reason}")]
    Failed { reason: String },
}

/// A unit of replay work.
///
/// `mutate` applies the command's declared effect to the shared state, in
/// program order relative to its neighbours, and is called at most once per
/// instance. On error the state is left in the committed-so-far condition:
/// **no rollback happens** and callers must treat partial mutation as the
/// contract, not an accident.
///
/// `flags` may be queried repeatedly, before and after `mutate`, and must be
/// a pure function of `(id, state)`: the immutable state borrow enforces
/// that it cannot mutate, and implementations must not consult hidden
/// counters.
pub trait Cmd: fmt::Debug {
    fn name(&self) -> &'static str;

    /// The API this command belongs to, if any.
    fn api(&self) -> Option<ApiId> {
        None
    }

    /// Identifier of the thread that issued the command.
    fn thread(&self) -> u64 {
        1
    }

    fn set_thread(&mut self, _thread: u64) {}

    /// The command that issued this one, or [`CmdId::NO_ID`] for top-level
    /// commands.
    fn caller(&self) -> CmdId {
        CmdId::NO_ID
    }

    fn set_caller(&mut self, _caller: CmdId) {}

    fn flags(&self, id: CmdId, state: &GlobalState) -> CmdFlags;

    fn extras(&self) -> Option<&CmdExtras> {
        None
    }

    fn mutate(
        &mut self,
        id: CmdId,
        state: &mut GlobalState,
        sink: &mut dyn ReplaySink,
    ) -> Result<(), MutateError>;
}

//! In-order replay pass driver.
//!
//! [`Replayer`] applies a command sequence to one [`GlobalState`] strictly in
//! program order: command N's `mutate` completes (success or failure) before
//! command N+1 starts, so each command's flag computation can observe every
//! earlier effect. The driver owns the per-command
//! `Unexecuted → Executing → Executed | Failed` lifecycle and records an
//! outcome per command; what happens after a failure is the caller's choice
//! via [`ErrorPolicy`].
//!
//! [`GlobalState`]: retrace_api::GlobalState

#![forbid(unsafe_code)]

mod driver;
mod sink;

pub use driver::{CmdOutcome, CmdState, ErrorPolicy, Replayer, ReplayReport};
pub use sink::{NullSink, RecordingSink};

//! The command model a capture/replay pass executes.
//!
//! A [`Cmd`] is a polymorphic unit of replay work: it declares identity and
//! ordering metadata and applies its effect to a [`GlobalState`] through
//! [`Cmd::mutate`], optionally emitting low-level operations to a
//! [`ReplaySink`]. APIs group commands behind a name-keyed factory
//! ([`Api::create_cmd`]) and are looked up through an explicitly constructed
//! [`Registry`].

#![forbid(unsafe_code)]

mod cmd;
mod registry;
mod sink;
mod state;

#[cfg(feature = "test-utils")]
pub mod testapi;

pub use cmd::{Cmd, CmdExtras, CmdFlags, CmdId, Extra, MutateError};
pub use registry::{Api, ApiId, Registry, RegistryBuilder, RegistryError};
pub use sink::{ReplayOp, ReplaySink};
pub use state::GlobalState;

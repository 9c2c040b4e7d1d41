//! Dynamic data containers for command payloads.
//!
//! Captured command payloads arrive from the wire without static type
//! information. [`Value`] is the closed, type-erased form they arrive in;
//! [`Assignable`] is the capability that coerces such a value into a
//! strongly-shaped container; the coercion is atomic, so a shape mismatch
//! leaves the target untouched. [`Dict`] is the generic associative container the payload
//! shapes are built from, and [`Codecs`] holds the registered bidirectional
//! wire conversions.

#![forbid(unsafe_code)]

mod assign;
mod codec;
mod dict;
mod error;
mod record;
mod value;

pub use assign::{Assignable, DictValue, RawStringMap, RecordDict, StringDict};
pub use codec::{Codec, Codecs};
pub use dict::Dict;
pub use error::{AssignError, CodecError};
pub use record::Record;
pub use value::{RecordValue, Value};

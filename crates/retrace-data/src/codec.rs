use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::error::CodecError;
use crate::value::Value;

/// A registered bidirectional wire conversion for one payload type.
///
/// The pair must satisfy `decode(encode(x)) == x` field-wise; the transport
/// bytes themselves need not be identical between passes.
pub struct Codec<T> {
    pub encode: fn(&T) -> Result<Value, CodecError>,
    pub decode: fn(&Value) -> Result<T, CodecError>,
}

// fn pointers are Copy regardless of T.
impl<T> Clone for Codec<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Codec<T> {}

/// Explicitly constructed codec registry.
///
/// Populated once during setup, then used read-only; there is no process-wide
/// registration.
#[derive(Default)]
pub struct Codecs {
    entries: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Codecs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: 'static>(&mut self, codec: Codec<T>) -> Result<(), CodecError> {
        let id = TypeId::of::<T>();
        if self.entries.contains_key(&id) {
            return Err(CodecError::AlreadyRegistered {
                type_name: std::any::type_name::<T>(),
            });
        }
        self.entries.insert(id, Box::new(codec));
        Ok(())
    }

    pub fn get<T: 'static>(&self) -> Option<Codec<T>> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|codec| codec.downcast_ref::<Codec<T>>())
            .copied()
    }

    pub fn encode<T: 'static>(&self, value: &T) -> Result<Value, CodecError> {
        let codec = self.get::<T>().ok_or(CodecError::NotRegistered {
            type_name: std::any::type_name::<T>(),
        })?;
        (codec.encode)(value)
    }

    pub fn decode<T: 'static>(&self, wire: &Value) -> Result<T, CodecError> {
        let codec = self.get::<T>().ok_or(CodecError::NotRegistered {
            type_name: std::any::type_name::<T>(),
        })?;
        (codec.decode)(wire)
    }
}

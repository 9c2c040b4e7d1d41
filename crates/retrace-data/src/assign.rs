use std::collections::HashMap;

use retrace_mem::Pointer;

use crate::dict::Dict;
use crate::error::AssignError;
use crate::record::Record;
use crate::value::Value;

/// Capability to replace a value wholesale from a type-erased [`Value`].
///
/// `try_assign` is atomic: the replacement is fully built from the source
/// before the target is touched, so a [`AssignError::ShapeMismatch`] leaves
/// the target exactly as it was. This is the seam the wire layer uses to pour
/// a generically-decoded value into a strongly-shaped container.
pub trait Assignable {
    fn try_assign(&mut self, source: &Value) -> Result<(), AssignError>;
}

/// string → string payload map.
pub type StringDict = Dict<String, String>;

/// int → owned record-chain payload map.
pub type RecordDict = Dict<i64, Record>;

/// A bare string map payload, carried without the dict wrapper.
pub type RawStringMap = HashMap<String, String>;

fn decode_string_entries(
    entries: &[(Value, Value)],
) -> Result<HashMap<String, String>, AssignError> {
    let mut out = HashMap::with_capacity(entries.len());
    for (k, v) in entries {
        let (Value::Str(k), Value::Str(v)) = (k, v) else {
            return Err(AssignError::ShapeMismatch {
                expected: "string => string map",
                actual: if matches!(k, Value::Str(_)) {
                    v.kind()
                } else {
                    k.kind()
                },
            });
        };
        out.insert(k.clone(), v.clone());
    }
    Ok(out)
}

fn decode_record_entries(entries: &[(Value, Value)]) -> Result<HashMap<i64, Record>, AssignError> {
    let mut out = HashMap::with_capacity(entries.len());
    for (k, v) in entries {
        let (Value::Int(k), Value::Record(v)) = (k, v) else {
            return Err(AssignError::ShapeMismatch {
                expected: "int => record map",
                actual: if matches!(k, Value::Int(_)) {
                    v.kind()
                } else {
                    k.kind()
                },
            });
        };
        out.insert(*k, Record::from_value(v));
    }
    Ok(out)
}

fn map_entries<'a>(source: &'a Value, expected: &'static str) -> Result<&'a [(Value, Value)], AssignError> {
    match source {
        Value::Map(entries) => Ok(entries),
        other => Err(AssignError::ShapeMismatch {
            expected,
            actual: other.kind(),
        }),
    }
}

impl Assignable for StringDict {
    fn try_assign(&mut self, source: &Value) -> Result<(), AssignError> {
        let entries = map_entries(source, "string => string map")?;
        let map = decode_string_entries(entries)?;
        self.replace(map);
        Ok(())
    }
}

impl StringDict {
    pub fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (Value::Str(k.clone()), Value::Str(v.clone())))
                .collect(),
        )
    }
}

impl Assignable for RecordDict {
    fn try_assign(&mut self, source: &Value) -> Result<(), AssignError> {
        let entries = map_entries(source, "int => record map")?;
        let map = decode_record_entries(entries)?;
        self.replace(map);
        Ok(())
    }
}

impl RecordDict {
    pub fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (Value::Int(*k), Value::Record(v.to_value())))
                .collect(),
        )
    }
}

impl Assignable for RawStringMap {
    fn try_assign(&mut self, source: &Value) -> Result<(), AssignError> {
        let entries = map_entries(source, "string => string map")?;
        *self = decode_string_entries(entries)?;
        Ok(())
    }
}

impl Assignable for Pointer {
    fn try_assign(&mut self, source: &Value) -> Result<(), AssignError> {
        match source {
            Value::Pointer(address) => {
                *self = Pointer::new(*address);
                Ok(())
            }
            other => Err(AssignError::ShapeMismatch {
                expected: "pointer",
                actual: other.kind(),
            }),
        }
    }
}

/// The closed set of map shapes a payload field can take.
///
/// Having one variant type lets assignment and wire encoding be written once
/// over the shape set instead of per ad hoc container type.
#[derive(Debug, Clone, PartialEq)]
pub enum DictValue {
    StringToString(StringDict),
    IntToRecord(RecordDict),
    RawStringMap(RawStringMap),
}

impl DictValue {
    pub fn shape(&self) -> &'static str {
        match self {
            DictValue::StringToString(_) => "string => string map",
            DictValue::IntToRecord(_) => "int => record map",
            DictValue::RawStringMap(_) => "raw string map",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            DictValue::StringToString(d) => d.len(),
            DictValue::IntToRecord(d) => d.len(),
            DictValue::RawStringMap(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_value(&self) -> Value {
        match self {
            DictValue::StringToString(d) => d.to_value(),
            DictValue::IntToRecord(d) => d.to_value(),
            DictValue::RawStringMap(m) => Value::Map(
                m.iter()
                    .map(|(k, v)| (Value::Str(k.clone()), Value::Str(v.clone())))
                    .collect(),
            ),
        }
    }
}

impl Assignable for DictValue {
    fn try_assign(&mut self, source: &Value) -> Result<(), AssignError> {
        match self {
            DictValue::StringToString(d) => d.try_assign(source),
            DictValue::IntToRecord(d) => d.try_assign(source),
            DictValue::RawStringMap(m) => m.try_assign(source),
        }
    }
}

/// A type-erased payload value.
///
/// This is the closed set of shapes the wire layer can deliver; dynamic
/// assignment ([`crate::Assignable`]) dispatches over it rather than over
/// runtime type inspection, so every supported coercion is visible in one
/// `match`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    U64(u64),
    Str(String),
    BoolSlice(Vec<bool>),
    /// A device address (see `retrace_mem::Pointer`).
    Pointer(u64),
    Record(RecordValue),
    /// Map entries in unspecified order. Key shapes are validated by the
    /// assignment target.
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Shape name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::U64(_) => "u64",
            Value::Str(_) => "string",
            Value::BoolSlice(_) => "bool slice",
            Value::Pointer(_) => "pointer",
            Value::Record(_) => "record",
            Value::Map(_) => "map",
        }
    }
}

/// Type-erased form of an owned record chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordValue {
    pub text: String,
    pub child: Option<Box<RecordValue>>,
}

impl RecordValue {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            child: None,
        }
    }

    pub fn with_child(text: impl Into<String>, child: RecordValue) -> Self {
        Self {
            text: text.into(),
            child: Some(Box::new(child)),
        }
    }
}

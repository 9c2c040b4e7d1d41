use crate::value::{RecordValue, Value};
use crate::{AssignError, Assignable};

/// A payload record that may own a chain of further records.
///
/// Ownership is single-parent: the child is `Box`-owned, so reference cycles
/// are unrepresentable and deep copy/equality are plain structural derives
/// with no cycle guard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub text: String,
    pub child: Option<Box<Record>>,
}

impl Record {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            child: None,
        }
    }

    pub fn with_child(text: impl Into<String>, child: Record) -> Self {
        Self {
            text: text.into(),
            child: Some(Box::new(child)),
        }
    }

    /// Number of records in the chain, this one included.
    pub fn depth(&self) -> usize {
        1 + self.child.as_ref().map_or(0, |c| c.depth())
    }

    pub fn to_value(&self) -> RecordValue {
        RecordValue {
            text: self.text.clone(),
            child: self.child.as_ref().map(|c| Box::new(c.to_value())),
        }
    }

    pub fn from_value(value: &RecordValue) -> Self {
        Self {
            text: value.text.clone(),
            child: value.child.as_ref().map(|c| Box::new(Record::from_value(c))),
        }
    }
}

impl Assignable for Record {
    fn try_assign(&mut self, source: &Value) -> Result<(), AssignError> {
        match source {
            Value::Record(rv) => {
                *self = Record::from_value(rv);
                Ok(())
            }
            other => Err(AssignError::ShapeMismatch {
                expected: "record",
                actual: other.kind(),
            }),
        }
    }
}

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssignError {
    /// The source value's shape is incompatible with the target container.
    ///
    /// The target is guaranteed untouched when this is returned.
    #[error("shape mismatch: cannot assign {actual} into {expected}")]
    ShapeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("no wire codec registered for {type_name}")]
    NotRegistered { type_name: &'static str },

    #[error("wire codec already registered for {type_name}")]
    AlreadyRegistered { type_name: &'static str },

    #[error(transparent)]
    Assign(#[from] AssignError),

    #[error("malformed wire value: {0}")]
    Malformed(&'static str),
}

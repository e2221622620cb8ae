use std::fmt;

use crate::value::types::ValueType;

pub type ValueResult<T> = Result<T, ValueError>;

/// Failures raised inside the value model: typed access, calls, and
/// record slot writes.
#[derive(Debug)]
pub enum ValueError {
    KindMismatch {
        expected: ValueType,
        found: ValueType,
    },
    NotCallable {
        kind: &'static str,
    },
    ArityMismatch {
        expected: usize,
        found: usize,
    },
    NoSuchField {
        record: String,
        field: String,
    },
    FieldUnbound {
        record: String,
        field: String,
    },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::KindMismatch { expected, found } => {
                write!(f, "expected a value of type {expected}, got {found}")
            }
            ValueError::NotCallable { kind } => {
                write!(f, "{kind} value is not callable")
            }
            ValueError::ArityMismatch { expected, found } => {
                write!(f, "call expects {expected} argument(s), got {found}")
            }
            ValueError::NoSuchField { record, field } => {
                write!(f, "record `{record}` has no field `{field}`")
            }
            ValueError::FieldUnbound { record, field } => {
                write!(f, "field `{field}` of record `{record}` is not bound")
            }
        }
    }
}

impl std::error::Error for ValueError {}

use std::{error::Error, fmt};

use crate::module::loader::LoadError;
use crate::value::types::ValueType;

pub type BindResult<T> = Result<T, BindError>;

/// Failure of a binding call. Any error aborts the call at the failing
/// field; slots assigned by earlier fields keep their values.
#[derive(Debug)]
pub enum BindError {
    InvalidDestination {
        kind: &'static str,
    },
    SymbolNotFound {
        symbol: String,
    },
    TypeMismatch {
        symbol: String,
        found: ValueType,
        field: String,
        expected: ValueType,
    },
    Load(LoadError),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::InvalidDestination { kind } => {
                write!(f, "can bind into a mutable record destination only, got {kind}")
            }
            BindError::SymbolNotFound { symbol } => {
                write!(f, "symbol `{symbol}` not found in module")
            }
            BindError::TypeMismatch {
                symbol,
                found,
                field,
                expected,
            } => write!(
                f,
                "value `{symbol}` of type {found} cannot be assigned to field `{field}` of type {expected}"
            ),
            BindError::Load(err) => write!(f, "{err}"),
        }
    }
}

impl From<LoadError> for BindError {
    fn from(err: LoadError) -> Self {
        BindError::Load(err)
    }
}

impl Error for BindError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BindError::Load(err) => Some(err),
            _ => None,
        }
    }
}

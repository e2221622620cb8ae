//! The dynamically typed value flowing between symbol tables, the binder,
//! and record slots.

use crate::value::func::ModuleFn;
use crate::value::record::RecordValue;
use crate::value::types::ValueType;
use crate::value::var::VarRef;

/// A symbol's resolved value, or a destination record. Cloning a `Func` or
/// `Var` clones the shared handle, not the closure or storage behind it.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Func(ModuleFn),
    Var(VarRef),
    Record(RecordValue),
}

impl Value {
    pub fn str(value: impl Into<String>) -> Self {
        Value::Str(value.into())
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Bool(_) => ValueType::Bool,
            Value::Str(_) => ValueType::Str,
            Value::Func(func) => ValueType::Func(func.sig().clone()),
            Value::Var(var) => ValueType::reference(var.referent_type().clone()),
            Value::Record(record) => ValueType::Record(record.record_type().clone()),
        }
    }

    /// Short kind label used when reporting an unusable destination.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
            Value::Func(_) => "function",
            Value::Var(_) => "variable reference",
            Value::Record(_) => "record",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        if let Value::Int(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        if let Value::Float(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::Str(value) = self {
            Some(value.as_str())
        } else {
            None
        }
    }

    pub fn as_func(&self) -> Option<&ModuleFn> {
        if let Value::Func(func) = self {
            Some(func)
        } else {
            None
        }
    }

    pub fn as_var(&self) -> Option<&VarRef> {
        if let Value::Var(var) = self {
            Some(var)
        } else {
            None
        }
    }

    pub fn as_record(&self) -> Option<&RecordValue> {
        if let Value::Record(record) = self {
            Some(record)
        } else {
            None
        }
    }

    pub fn as_record_mut(&mut self) -> Option<&mut RecordValue> {
        if let Value::Record(record) = self {
            Some(record)
        } else {
            None
        }
    }
}

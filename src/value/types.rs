//! Type tags for declared field types and runtime symbol values, plus the
//! assignability predicate the binder builds on.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::value::record::RecordType;

/// Declared type of a record field or runtime type of a resolved symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueType {
    Int,
    Float,
    Bool,
    Str,
    Func(Arc<FnSig>),
    Ref(Box<ValueType>),
    Record(Arc<RecordType>),
}

impl ValueType {
    pub fn func(params: impl IntoIterator<Item = ValueType>, ret: ValueType) -> Self {
        ValueType::Func(Arc::new(FnSig::new(params, ret)))
    }

    pub fn reference(target: ValueType) -> Self {
        ValueType::Ref(Box::new(target))
    }

    pub fn record(ty: Arc<RecordType>) -> Self {
        ValueType::Record(ty)
    }

    /// Whether a value of this type can be stored into a slot of type `dest`.
    /// Function types compare by signature, references by referent type.
    pub fn assignable_to(&self, dest: &ValueType) -> bool {
        self == dest
    }

    /// Referent type when this is a reference type.
    pub fn referent(&self) -> Option<&ValueType> {
        match self {
            ValueType::Ref(target) => Some(target),
            _ => None,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Int => write!(f, "int"),
            ValueType::Float => write!(f, "float"),
            ValueType::Bool => write!(f, "bool"),
            ValueType::Str => write!(f, "str"),
            ValueType::Func(sig) => write!(f, "{sig}"),
            ValueType::Ref(target) => write!(f, "&{target}"),
            ValueType::Record(ty) => write!(f, "record {}", ty.label()),
        }
    }
}

/// Signature of a callable symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FnSig {
    params: SmallVec<[ValueType; 4]>,
    ret: ValueType,
}

impl FnSig {
    pub fn new(params: impl IntoIterator<Item = ValueType>, ret: ValueType) -> Self {
        Self {
            params: params.into_iter().collect(),
            ret,
        }
    }

    pub fn params(&self) -> &[ValueType] {
        &self.params
    }

    pub fn ret(&self) -> &ValueType {
        &self.ret
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Display for FnSig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ") -> {}", self.ret)
    }
}

#[cfg(test)]
mod tests {
    //! Pins the assignability rules and the type rendering used in errors.
    use super::*;

    #[test]
    fn assignability_is_structural() {
        // scalar tags match themselves only
        assert!(ValueType::Int.assignable_to(&ValueType::Int));
        assert!(
            !ValueType::Int.assignable_to(&ValueType::Str),
            "int must not be assignable to str"
        );
    }

    #[test]
    fn function_types_compare_by_signature() {
        let add = ValueType::func([ValueType::Int, ValueType::Int], ValueType::Int);
        let same = ValueType::func([ValueType::Int, ValueType::Int], ValueType::Int);
        let narrower = ValueType::func([ValueType::Int], ValueType::Int);
        assert!(
            add.assignable_to(&same),
            "identical signatures should be assignable"
        );
        assert!(
            !add.assignable_to(&narrower),
            "differing arity must not be assignable"
        );
    }

    #[test]
    fn reference_is_distinct_from_referent() {
        let str_ref = ValueType::reference(ValueType::Str);
        assert!(
            !str_ref.assignable_to(&ValueType::Str),
            "a reference type is not directly assignable to its referent"
        );
        assert_eq!(str_ref.referent(), Some(&ValueType::Str));
        assert_eq!(ValueType::Str.referent(), None);
    }

    #[test]
    fn display_matches_diagnostic_format() {
        let add = ValueType::func([ValueType::Int, ValueType::Int], ValueType::Int);
        assert_eq!(add.to_string(), "fn(int, int) -> int");
        assert_eq!(ValueType::reference(ValueType::Str).to_string(), "&str");
        assert_eq!(ValueType::Float.to_string(), "float");
    }
}

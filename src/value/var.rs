//! Shared storage cells backing module-level variables. A `VarRef` is the
//! reference a symbol lookup hands out; every clone aliases the same storage.

use std::sync::{Arc, RwLock};

use crate::value::error::{ValueError, ValueResult};
use crate::value::types::ValueType;
use crate::value::value::Value;

/// Reference to a module-level variable. The referent type is fixed at
/// creation and every write must preserve it.
#[derive(Clone, Debug)]
pub struct VarRef {
    ty: ValueType,
    cell: Arc<RwLock<Value>>,
}

/// Two `VarRef`s are equal when they alias the same storage cell.
impl PartialEq for VarRef {
    fn eq(&self, other: &Self) -> bool {
        self.same_referent(other)
    }
}

impl VarRef {
    pub fn new(initial: Value) -> Self {
        let ty = initial.value_type();
        Self {
            ty,
            cell: Arc::new(RwLock::new(initial)),
        }
    }

    pub fn referent_type(&self) -> &ValueType {
        &self.ty
    }

    /// Snapshot of the current referent value.
    pub fn get(&self) -> Value {
        self.cell
            .read()
            .unwrap_or_else(|err| err.into_inner())
            .clone()
    }

    /// Replaces the referent. The new value must keep the referent type.
    pub fn set(&self, value: Value) -> ValueResult<()> {
        let found = value.value_type();
        if !found.assignable_to(&self.ty) {
            return Err(ValueError::KindMismatch {
                expected: self.ty.clone(),
                found,
            });
        }
        *self.cell.write().unwrap_or_else(|err| err.into_inner()) = value;
        Ok(())
    }

    /// Whether both references alias the same storage.
    pub fn same_referent(&self, other: &VarRef) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

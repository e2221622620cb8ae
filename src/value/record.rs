//! Destination records: a field-descriptor table declared once per shape,
//! and instances whose slots the binder populates.

use std::sync::Arc;

use ahash::AHashMap;

use crate::value::error::{ValueError, ValueResult};
use crate::value::types::ValueType;
use crate::value::value::Value;

/// One declared field: name, declared type, and the raw directive string
/// exactly as written in the declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDef {
    name: String,
    ty: ValueType,
    directive: Option<String>,
}

impl FieldDef {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> &ValueType {
        &self.ty
    }

    pub fn directive(&self) -> Option<&str> {
        self.directive.as_deref()
    }
}

/// Shape of a destination record: ordered field descriptors plus a label
/// used in diagnostics. Built once per record shape via [`RecordType::builder`].
#[derive(Debug)]
pub struct RecordType {
    label: String,
    fields: Vec<FieldDef>,
    index: AHashMap<String, usize>,
}

impl RecordType {
    pub fn builder(label: impl Into<String>) -> RecordBuilder {
        RecordBuilder {
            label: label.into(),
            fields: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// The index map is derived from the field list, so equality only considers
// the declared shape.
impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.fields == other.fields
    }
}

impl Eq for RecordType {}

/// Fluent builder for [`RecordType`].
pub struct RecordBuilder {
    label: String,
    fields: Vec<FieldDef>,
}

impl RecordBuilder {
    /// Declares a field bound by its own name.
    pub fn field(mut self, name: impl Into<String>, ty: ValueType) -> Self {
        self.fields.push(FieldDef {
            name: name.into(),
            ty,
            directive: None,
        });
        self
    }

    /// Declares a field carrying a binding directive.
    pub fn tagged(
        mut self,
        name: impl Into<String>,
        ty: ValueType,
        directive: impl Into<String>,
    ) -> Self {
        self.fields.push(FieldDef {
            name: name.into(),
            ty,
            directive: Some(directive.into()),
        });
        self
    }

    pub fn finish(self) -> Arc<RecordType> {
        let mut index = AHashMap::with_capacity(self.fields.len());
        for (i, field) in self.fields.iter().enumerate() {
            index.insert(field.name.clone(), i);
        }
        Arc::new(RecordType {
            label: self.label,
            fields: self.fields,
            index,
        })
    }
}

/// An instance of a record shape. Every slot starts unbound, the model's
/// zero value for all field types.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordValue {
    ty: Arc<RecordType>,
    slots: Vec<Option<Value>>,
}

impl RecordValue {
    pub fn new(ty: Arc<RecordType>) -> Self {
        let slots = vec![None; ty.len()];
        Self { ty, slots }
    }

    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.ty
    }

    /// Current value of the named field; `None` while unbound or when no
    /// such field exists.
    pub fn value(&self, name: &str) -> Option<&Value> {
        let slot = self.ty.field_index(name)?;
        self.slots[slot].as_ref()
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// Stores a value into the named field, checked against the declared type.
    pub fn set(&mut self, name: &str, value: Value) -> ValueResult<()> {
        let Some(slot) = self.ty.field_index(name) else {
            return Err(ValueError::NoSuchField {
                record: self.ty.label().to_string(),
                field: name.to_string(),
            });
        };
        let found = value.value_type();
        let expected = self.ty.fields()[slot].value_type();
        if !found.assignable_to(expected) {
            return Err(ValueError::KindMismatch {
                expected: expected.clone(),
                found,
            });
        }
        self.slots[slot] = Some(value);
        Ok(())
    }

    /// Slot write on the binder's path. The caller has already established
    /// assignability, so no re-check happens here.
    pub(crate) fn write_slot(&mut self, slot: usize, value: Value) {
        self.slots[slot] = Some(value);
    }

    /// Calls the named field, which must be bound to a function value.
    pub fn call(&self, name: &str, args: &[Value]) -> ValueResult<Value> {
        let Some(slot) = self.ty.field_index(name) else {
            return Err(ValueError::NoSuchField {
                record: self.ty.label().to_string(),
                field: name.to_string(),
            });
        };
        let Some(value) = self.slots[slot].as_ref() else {
            return Err(ValueError::FieldUnbound {
                record: self.ty.label().to_string(),
                field: name.to_string(),
            });
        };
        match value {
            Value::Func(func) => func.call(args),
            other => Err(ValueError::NotCallable { kind: other.kind() }),
        }
    }
}

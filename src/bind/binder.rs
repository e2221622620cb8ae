//! The field binder: walks a destination record's declared fields and
//! assigns each one from the matching module symbol.

use crate::bind::directive::Directive;
use crate::bind::error::{BindError, BindResult};
use crate::module::symbols::SymbolTable;
use crate::value::record::{FieldDef, RecordValue};
use crate::value::value::Value;

/// Populates `destination` from `symbols`.
///
/// By default each field binds to the exported symbol with the same name as
/// the field; the field's directive can rename the lookup (`"Other"`), skip
/// the field (`"-"`), or tolerate a missing symbol (`",omitempty"`).
///
/// The symbol's type must be assignable to the field's declared type. A
/// variable reference whose referent type is assignable instead binds a
/// snapshot of the referent; a field declared as a reference type takes the
/// reference itself and stays aliased to the module's storage.
///
/// Fields are processed in declaration order and binding stops at the first
/// failure. Fields already assigned by the same call keep their values; the
/// destination should be considered unusable as a whole after an error.
pub fn bind(destination: &mut Value, symbols: &dyn SymbolTable) -> BindResult<()> {
    match destination {
        Value::Record(record) => bind_record(record, symbols),
        other => Err(BindError::InvalidDestination { kind: other.kind() }),
    }
}

/// [`bind`] for a destination already known to be a record.
pub fn bind_record(record: &mut RecordValue, symbols: &dyn SymbolTable) -> BindResult<()> {
    let ty = record.record_type().clone();
    for (slot, field) in ty.fields().iter().enumerate() {
        let directive = Directive::parse(field.directive());
        if directive.skip {
            continue;
        }
        let name = directive.lookup_name(field.name());
        let Some(resolved) = symbols.lookup(name) else {
            if directive.optional {
                continue;
            }
            return Err(BindError::SymbolNotFound {
                symbol: name.to_string(),
            });
        };
        let value = check_assignable(resolved, field, name)?;
        record.write_slot(slot, value);
    }
    Ok(())
}

fn check_assignable(resolved: Value, field: &FieldDef, symbol: &str) -> BindResult<Value> {
    let found = resolved.value_type();
    if found.assignable_to(field.value_type()) {
        return Ok(resolved);
    }
    // A variable reference may also bind by its referent; the field then
    // receives a snapshot of the variable's current value.
    if let Value::Var(var) = &resolved {
        if var.referent_type().assignable_to(field.value_type()) {
            return Ok(var.get());
        }
    }
    Err(BindError::TypeMismatch {
        symbol: symbol.to_string(),
        found,
        field: field.name().to_string(),
        expected: field.value_type().clone(),
    })
}

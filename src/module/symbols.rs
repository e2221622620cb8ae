//! The symbol lookup capability the binder consumes, and the export table
//! a module populates to expose its symbols.

use ahash::AHashMap;

use crate::value::error::ValueResult;
use crate::value::func::ModuleFn;
use crate::value::types::FnSig;
use crate::value::value::Value;
use crate::value::var::VarRef;

/// Name-keyed lookup over a loaded module's exported symbols. The exported
/// set is fixed after load, so lookups never observe mutation.
pub trait SymbolTable {
    /// Resolves an exported symbol by name. The returned value is a shared
    /// handle for functions and variables, so repeated lookups of a variable
    /// alias the same storage.
    fn lookup(&self, name: &str) -> Option<Value>;
}

/// The exported symbols of one module.
#[derive(Clone, Debug, Default)]
pub struct ExportTable {
    symbols: AHashMap<String, Value>,
}

impl ExportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exports a plain value under `name`.
    pub fn export(&mut self, name: impl Into<String>, value: Value) {
        self.symbols.insert(name.into(), value);
    }

    /// Exports a module-level variable and returns the module's own handle
    /// to its storage, for mutation after load.
    pub fn export_var(&mut self, name: impl Into<String>, initial: Value) -> VarRef {
        let var = VarRef::new(initial);
        self.symbols.insert(name.into(), Value::Var(var.clone()));
        var
    }

    /// Exports a function under `name`.
    pub fn export_fn(
        &mut self,
        name: impl Into<String>,
        sig: FnSig,
        body: impl Fn(&[Value]) -> ValueResult<Value> + Send + Sync + 'static,
    ) {
        self.export(name, Value::Func(ModuleFn::new(sig, body)));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.symbols.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.symbols.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl SymbolTable for ExportTable {
    fn lookup(&self, name: &str) -> Option<Value> {
        self.symbols.get(name).cloned()
    }
}

//! Module-side surface: the symbol table capability, export tables, and the
//! shared-library loader.

pub mod loader;
pub mod symbols;

pub use loader::{LoadError, LoadResult, MODULE_ENTRY_SYMBOL, Module, ModuleEntry, open_and_bind};
pub use symbols::{ExportTable, SymbolTable};

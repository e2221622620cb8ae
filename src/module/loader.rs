//! Thin wrapper over the platform loader: opens a shared library, collects
//! its export table through a well-known entry symbol, and keeps the library
//! alive for as long as its symbols are in use.

use std::path::{Path, PathBuf};
use std::{error::Error, fmt};

use libloading::Library;

use crate::bind::binder::bind;
use crate::bind::error::BindResult;
use crate::module::symbols::{ExportTable, SymbolTable};
use crate::value::value::Value;

/// Entry symbol every loadable module must export.
pub const MODULE_ENTRY_SYMBOL: &str = "plugbind_module_entry";

/// Signature of the function behind [`MODULE_ENTRY_SYMBOL`]. Called once at
/// load to collect the module's exports. Plain Rust ABI: module and host
/// must be built by the same toolchain.
pub type ModuleEntry = fn() -> ExportTable;

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Debug)]
pub enum LoadError {
    Open {
        path: PathBuf,
        source: libloading::Error,
    },
    EntryMissing {
        symbol: &'static str,
        source: libloading::Error,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Open { path, source } => {
                write!(f, "failed to load module `{}`: {source}", path.display())
            }
            LoadError::EntryMissing { symbol, source } => {
                write!(f, "module entry symbol `{symbol}` missing: {source}")
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Open { source, .. } => Some(source),
            LoadError::EntryMissing { source, .. } => Some(source),
        }
    }
}

/// A loaded module: its export table plus the library handle backing it.
/// Dropping the module unloads the library, so exported closures must not
/// outlive it.
#[derive(Debug)]
pub struct Module {
    exports: ExportTable,
    _library: Library,
}

impl Module {
    /// Loads the shared library at `path` and collects its exports by
    /// calling [`MODULE_ENTRY_SYMBOL`].
    pub fn open(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        // SAFETY: loading a library runs its initializers; the caller vouches
        // for the module by naming its path.
        let library = unsafe { Library::new(path) }.map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        // SAFETY: the entry symbol is declared with the ModuleEntry signature
        // by the module side of this crate's load protocol.
        let entry = unsafe { library.get::<ModuleEntry>(MODULE_ENTRY_SYMBOL.as_bytes()) }
            .map_err(|source| LoadError::EntryMissing {
                symbol: MODULE_ENTRY_SYMBOL,
                source,
            })?;
        let exports = entry();
        Ok(Self {
            exports,
            _library: library,
        })
    }

    pub fn exports(&self) -> &ExportTable {
        &self.exports
    }
}

impl SymbolTable for Module {
    fn lookup(&self, name: &str) -> Option<Value> {
        self.exports.lookup(name)
    }
}

/// Loads the module at `path` and binds its symbols into `destination`.
/// A loader failure surfaces unmodified inside [`crate::bind::BindError::Load`].
pub fn open_and_bind(path: impl AsRef<Path>, destination: &mut Value) -> BindResult<()> {
    let module = Module::open(path)?;
    bind(destination, &module)
}

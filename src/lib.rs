//! Binds named symbols exported by a dynamically loaded module into the
//! fields of a declared record, so callers get typed, structured access to
//! a module's exports instead of looking symbols up by string at each use.
//!
//! A destination shape is declared once as a [`value::RecordType`]; each
//! field binds to the exported symbol with the same name unless a directive
//! renames, skips, or relaxes it. [`bind::bind`] resolves and type-checks
//! every field against any [`module::SymbolTable`], and
//! [`module::open_and_bind`] does the same for a module loaded from disk.
//!
//! ```
//! use plugbind::bind::bind;
//! use plugbind::module::ExportTable;
//! use plugbind::value::{FnSig, RecordType, RecordValue, Value, ValueType};
//!
//! let mut exports = ExportTable::new();
//! exports.export_var("Hello", Value::str("Hello from a plugin!"));
//! exports.export_fn(
//!     "Add",
//!     FnSig::new([ValueType::Int, ValueType::Int], ValueType::Int),
//!     |args| {
//!         let a = args[0].as_int().unwrap_or_default();
//!         let b = args[1].as_int().unwrap_or_default();
//!         Ok(Value::Int(a + b))
//!     },
//! );
//!
//! let shape = RecordType::builder("HostApi")
//!     .field("Add", ValueType::func([ValueType::Int, ValueType::Int], ValueType::Int))
//!     .tagged("MyHello", ValueType::Str, "Hello")
//!     .tagged("Ignored", ValueType::Bool, "-")
//!     .finish();
//! let mut destination = Value::Record(RecordValue::new(shape));
//!
//! bind(&mut destination, &exports)?;
//!
//! let record = destination.as_record().unwrap();
//! assert_eq!(record.call("Add", &[Value::Int(2), Value::Int(3)])?.as_int(), Some(5));
//! assert_eq!(record.value("MyHello").and_then(Value::as_str), Some("Hello from a plugin!"));
//! assert!(!record.is_bound("Ignored"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bind;
pub mod module;
pub mod value;

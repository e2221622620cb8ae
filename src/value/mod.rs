//! Dynamic value and type model shared by module export tables and the
//! field binder.

pub mod error;
pub mod func;
pub mod record;
pub mod types;
pub mod value;
pub mod var;

pub use error::{ValueError, ValueResult};
pub use func::ModuleFn;
pub use record::{FieldDef, RecordBuilder, RecordType, RecordValue};
pub use types::{FnSig, ValueType};
pub use value::Value;
pub use var::VarRef;

pub mod binder;
pub mod directive;
pub mod error;

pub use binder::{bind, bind_record};
pub use directive::Directive;
pub use error::{BindError, BindResult};

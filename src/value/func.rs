//! Callable symbol values: a shared closure paired with its signature.

use std::fmt;
use std::sync::Arc;

use crate::value::error::{ValueError, ValueResult};
use crate::value::types::FnSig;
use crate::value::value::Value;

pub type FnBody = dyn Fn(&[Value]) -> ValueResult<Value> + Send + Sync;

/// A function exported by a module. Cloning shares the underlying closure,
/// so every copy is the same symbol.
#[derive(Clone)]
pub struct ModuleFn {
    sig: Arc<FnSig>,
    body: Arc<FnBody>,
}

/// Two `ModuleFn`s are equal when they share the same underlying closure,
/// not merely an equal signature.
impl PartialEq for ModuleFn {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl ModuleFn {
    pub fn new(
        sig: FnSig,
        body: impl Fn(&[Value]) -> ValueResult<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            sig: Arc::new(sig),
            body: Arc::new(body),
        }
    }

    pub fn sig(&self) -> &Arc<FnSig> {
        &self.sig
    }

    /// Invokes the function after checking arity and argument types against
    /// the signature. The result is checked against the declared return type
    /// so a misbehaving module body cannot leak an off-type value.
    pub fn call(&self, args: &[Value]) -> ValueResult<Value> {
        if args.len() != self.sig.arity() {
            return Err(ValueError::ArityMismatch {
                expected: self.sig.arity(),
                found: args.len(),
            });
        }
        for (arg, param) in args.iter().zip(self.sig.params()) {
            let found = arg.value_type();
            if !found.assignable_to(param) {
                return Err(ValueError::KindMismatch {
                    expected: param.clone(),
                    found,
                });
            }
        }
        let out = (self.body)(args)?;
        let found = out.value_type();
        if !found.assignable_to(self.sig.ret()) {
            return Err(ValueError::KindMismatch {
                expected: self.sig.ret().clone(),
                found,
            });
        }
        Ok(out)
    }

    /// Whether both handles refer to the same underlying function.
    pub fn same_fn(&self, other: &ModuleFn) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for ModuleFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleFn")
            .field("sig", &self.sig)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    //! Call-path checks for arity, argument, and return type enforcement.
    use super::*;
    use crate::value::types::ValueType;

    fn add_fn() -> ModuleFn {
        ModuleFn::new(
            FnSig::new([ValueType::Int, ValueType::Int], ValueType::Int),
            |args| {
                let a = args[0].as_int().unwrap_or_default();
                let b = args[1].as_int().unwrap_or_default();
                Ok(Value::Int(a + b))
            },
        )
    }

    #[test]
    fn call_applies_the_body() {
        let add = add_fn();
        let out = add
            .call(&[Value::Int(2), Value::Int(3)])
            .expect("well-typed call should succeed");
        assert_eq!(out.as_int(), Some(5), "Add(2, 3) should produce 5");
    }

    #[test]
    fn call_rejects_wrong_arity() {
        let add = add_fn();
        let err = add.call(&[Value::Int(2)]).expect_err("one arg of two");
        assert!(
            matches!(
                err,
                ValueError::ArityMismatch {
                    expected: 2,
                    found: 1
                }
            ),
            "expected arity mismatch, got {err}"
        );
    }

    #[test]
    fn call_rejects_off_type_argument() {
        let add = add_fn();
        let err = add
            .call(&[Value::Int(2), Value::str("three")])
            .expect_err("str argument for an int parameter");
        assert!(
            matches!(err, ValueError::KindMismatch { .. }),
            "expected kind mismatch, got {err}"
        );
    }

    #[test]
    fn call_rejects_off_type_return() {
        let lying = ModuleFn::new(FnSig::new([], ValueType::Int), |_| Ok(Value::Bool(true)));
        let err = lying.call(&[]).expect_err("body returned bool, not int");
        assert!(
            matches!(err, ValueError::KindMismatch { .. }),
            "expected kind mismatch on return, got {err}"
        );
    }

    #[test]
    fn clones_are_the_same_symbol() {
        let add = add_fn();
        let copy = add.clone();
        assert!(add.same_fn(&copy), "clone should share the closure");
        assert!(
            !add.same_fn(&add_fn()),
            "independently built functions are distinct symbols"
        );
    }
}

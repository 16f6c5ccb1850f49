//! Host-implemented accessor properties.
//!
//! A [`NativeAccessor`] is a pair of independently optional host functions. The
//! "no getter" and "no setter" behaviours live here, in [`NativeAccessor::get`] and
//! [`NativeAccessor::set`], so callers never check for a missing side themselves.
//! Attribute enforcement is the object model's job, not this type's.

use std::fmt;
use std::rc::Rc;

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::value::JsValue;
use crate::runner::plugin::types::EvalContext;

pub type NativeGetter = Rc<dyn Fn(&mut EvalContext, &JsValue) -> Result<JsValue, JErrorType>>;

pub type NativeSetter = Rc<dyn Fn(&mut EvalContext, &JsValue, JsValue) -> Result<(), JErrorType>>;

#[derive(Clone, Default)]
pub struct NativeAccessor {
    getter: Option<NativeGetter>,
    setter: Option<NativeSetter>,
}

impl NativeAccessor {
    pub fn new(getter: Option<NativeGetter>, setter: Option<NativeSetter>) -> Self {
        NativeAccessor { getter, setter }
    }

    pub fn with_getter<G>(getter: G) -> Self
    where
        G: Fn(&mut EvalContext, &JsValue) -> Result<JsValue, JErrorType> + 'static,
    {
        NativeAccessor {
            getter: Some(Rc::new(getter)),
            setter: None,
        }
    }

    pub fn with_setter<S>(setter: S) -> Self
    where
        S: Fn(&mut EvalContext, &JsValue, JsValue) -> Result<(), JErrorType> + 'static,
    {
        NativeAccessor {
            getter: None,
            setter: Some(Rc::new(setter)),
        }
    }

    pub fn has_getter(&self) -> bool {
        self.getter.is_some()
    }

    pub fn has_setter(&self) -> bool {
        self.setter.is_some()
    }

    /// Reads through the getter. Without one the read yields `undefined`; a failure
    /// raised by the getter is returned as is.
    pub fn get(&self, ctx: &mut EvalContext, receiver: &JsValue) -> Result<JsValue, JErrorType> {
        match &self.getter {
            None => Ok(JsValue::Undefined),
            Some(getter) => getter(ctx, receiver),
        }
    }

    /// Writes through the setter. Without one the write is dropped silently.
    pub fn set(
        &self,
        ctx: &mut EvalContext,
        receiver: &JsValue,
        value: JsValue,
    ) -> Result<(), JErrorType> {
        match &self.setter {
            None => Ok(()),
            Some(setter) => setter(ctx, receiver, value),
        }
    }

    /// Identity comparison: both sides must be the very same host functions.
    pub fn same_accessor(&self, other: &NativeAccessor) -> bool {
        fn same<T: ?Sized>(a: &Option<Rc<T>>, b: &Option<Rc<T>>) -> bool {
            match (a, b) {
                (None, None) => true,
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                _ => false,
            }
        }
        same(&self.getter, &other.getter) && same(&self.setter, &other.setter)
    }
}

impl fmt::Debug for NativeAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeAccessor")
            .field("getter", &self.has_getter())
            .field("setter", &self.has_setter())
            .finish()
    }
}

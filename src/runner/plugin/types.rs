//! Core types for built-in definitions.

use std::rc::Rc;

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::native_accessor::{NativeGetter, NativeSetter};
use crate::runner::ds::object::JsObjectType;
use crate::runner::ds::object_property::{PropertyAttributes, PropertyKey};
use crate::runner::ds::operations::object::get;
use crate::runner::ds::realm::{JsCodeRealmType, WellKnownIntrinsics};
use crate::runner::ds::value::JsValue;

/// Execution context passed to native functions.
/// Holds the realm whose global object and intrinsics the running code sees.
pub struct EvalContext {
    realm: JsCodeRealmType,
}

impl EvalContext {
    pub fn new(realm: JsCodeRealmType) -> Self {
        EvalContext { realm }
    }

    pub fn realm(&self) -> &JsCodeRealmType {
        &self.realm
    }

    pub fn global_object(&self) -> JsObjectType {
        self.realm.global_object()
    }

    /// Reads a property of the global object, running accessors if any.
    pub fn get_binding(&mut self, name: &str) -> Result<JsValue, JErrorType> {
        let global = self.global_object();
        get(self, &global, &PropertyKey::from(name))
    }
}

/// Function signature for built-in methods.
/// Native functions receive the evaluation context, `this` value, and arguments.
pub type NativeFn = fn(
    ctx: &mut EvalContext,
    this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType>;

pub type PluginFn = Rc<dyn Fn(&mut EvalContext, JsValue, Vec<JsValue>) -> Result<JsValue, JErrorType>>;

/// Built-in function - either compiled-in or host-provided.
#[derive(Clone)]
pub enum BuiltInFn {
    /// Direct function pointer - zero overhead for compiled-in functions.
    Native(NativeFn),

    /// Host closure, which may capture state.
    Plugin(PluginFn),
}

impl BuiltInFn {
    pub fn plugin<F>(f: F) -> Self
    where
        F: Fn(&mut EvalContext, JsValue, Vec<JsValue>) -> Result<JsValue, JErrorType> + 'static,
    {
        BuiltInFn::Plugin(Rc::new(f))
    }

    /// Execute this built-in function.
    pub fn call(
        &self,
        ctx: &mut EvalContext,
        this: JsValue,
        args: Vec<JsValue>,
    ) -> Result<JsValue, JErrorType> {
        match self {
            BuiltInFn::Native(f) => f(ctx, this, args),
            BuiltInFn::Plugin(f) => f(ctx, this, args),
        }
    }
}

/// One registration on a built-in object, installed in declaration order.
#[derive(Clone)]
pub enum BuiltInMember {
    Method {
        name: String,
        func: BuiltInFn,
        length: u32,
        attributes: PropertyAttributes,
    },
    Property {
        key: PropertyKey,
        value: JsValue,
        attributes: PropertyAttributes,
    },
    Accessor {
        key: PropertyKey,
        getter: Option<NativeGetter>,
        setter: Option<NativeSetter>,
        attributes: PropertyAttributes,
    },
}

impl BuiltInMember {
    pub fn key(&self) -> PropertyKey {
        match self {
            BuiltInMember::Method { name, .. } => PropertyKey::from(name.as_str()),
            BuiltInMember::Property { key, .. } | BuiltInMember::Accessor { key, .. } => key.clone(),
        }
    }
}

/// Where the members of a built-in object end up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InstallTarget {
    /// A fresh object bound on the global object under the built-in's name.
    GlobalBinding(PropertyAttributes),

    /// Straight onto the global object (global value properties and functions).
    GlobalObject,
}

/// Built-in object definition.
/// Represents a JavaScript built-in object like Math.
#[derive(Clone)]
pub struct BuiltInObject {
    /// Name of the object (e.g., "Math").
    pub name: String,

    /// Intrinsic used as the prototype of the created object.
    pub prototype: Option<WellKnownIntrinsics>,

    /// Intrinsic slot the created object fills in its realm, if any.
    pub intrinsic: Option<WellKnownIntrinsics>,

    pub target: InstallTarget,

    members: Vec<BuiltInMember>,
}

impl BuiltInObject {
    /// Create a new built-in object with the given name. It inherits from
    /// `Object.prototype` and is bound writable and configurable on the global object.
    pub fn new(name: impl Into<String>) -> Self {
        BuiltInObject {
            name: name.into(),
            prototype: Some(WellKnownIntrinsics::ObjectPrototype),
            intrinsic: None,
            target: InstallTarget::GlobalBinding(
                PropertyAttributes::WRITABLE | PropertyAttributes::CONFIGURABLE,
            ),
            members: Vec::new(),
        }
    }

    /// Set the prototype chain parent.
    pub fn with_prototype(mut self, prototype: WellKnownIntrinsics) -> Self {
        self.prototype = Some(prototype);
        self
    }

    pub fn as_intrinsic(mut self, intrinsic: WellKnownIntrinsics) -> Self {
        self.intrinsic = Some(intrinsic);
        self
    }

    pub fn on_global_object(mut self) -> Self {
        self.target = InstallTarget::GlobalObject;
        self
    }

    /// Add a native method, writable and configurable but not enumerable.
    pub fn add_method(self, name: impl Into<String>, func: NativeFn, length: u32) -> Self {
        self.add_method_with_attributes(
            name,
            BuiltInFn::Native(func),
            length,
            PropertyAttributes::WRITABLE | PropertyAttributes::CONFIGURABLE,
        )
    }

    pub fn add_method_with_attributes(
        mut self,
        name: impl Into<String>,
        func: BuiltInFn,
        length: u32,
        attributes: PropertyAttributes,
    ) -> Self {
        self.members.push(BuiltInMember::Method {
            name: name.into(),
            func,
            length,
            attributes,
        });
        self
    }

    /// Add an immutable data property.
    pub fn add_property(self, key: impl Into<PropertyKey>, value: JsValue) -> Self {
        self.add_property_with_attributes(key, value, PropertyAttributes::NONE)
    }

    pub fn add_property_with_attributes(
        mut self,
        key: impl Into<PropertyKey>,
        value: JsValue,
        attributes: PropertyAttributes,
    ) -> Self {
        self.members.push(BuiltInMember::Property {
            key: key.into(),
            value,
            attributes,
        });
        self
    }

    pub fn add_accessor(
        mut self,
        key: impl Into<PropertyKey>,
        getter: Option<NativeGetter>,
        setter: Option<NativeSetter>,
        attributes: PropertyAttributes,
    ) -> Self {
        self.members.push(BuiltInMember::Accessor {
            key: key.into(),
            getter,
            setter,
            attributes,
        });
        self
    }

    pub fn members(&self) -> &[BuiltInMember] {
        &self.members
    }

    pub fn get_method(&self, name: &str) -> Option<&BuiltInFn> {
        self.members.iter().find_map(|m| match m {
            BuiltInMember::Method { name: n, func, .. } if n == name => Some(func),
            _ => None,
        })
    }
}

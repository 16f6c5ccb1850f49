//! Built-in registry: the ordered list of built-in objects a realm is populated with.

use log::debug;
use thiserror::Error;

use super::config::BuiltinsConfig;
use super::types::{BuiltInFn, BuiltInMember, BuiltInObject, InstallTarget};
use crate::runner::ds::object::{new_ordinary_object, JsObjectType};
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::realm::{CodeRealm, WellKnownIntrinsics};
use crate::runner::ds::value::JsValue;
use crate::runner::std_lib::{global, math, register_core_builtins};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("built-in object '{0}' is already registered")]
    DuplicateObject(String),
    #[error("built-in object '{0}' declares '{1}' more than once")]
    DuplicateMember(String, String),
}

/// Registry for built-in objects.
/// Registration is final: objects are installed into a realm in registration order,
/// and nothing is ever replaced or removed here.
pub struct BuiltInRegistry {
    objects: Vec<BuiltInObject>,
}

impl BuiltInRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        BuiltInRegistry {
            objects: Vec::new(),
        }
    }

    /// Create a registry with every core built-in.
    pub fn with_core() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        register_core_builtins(&mut registry)?;
        Ok(registry)
    }

    /// Create a registry holding the built-in groups `config` enables.
    pub fn with_config(config: &BuiltinsConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        if config.globals {
            global::register(&mut registry)?;
        }
        if config.math {
            math::register(&mut registry)?;
        }
        Ok(registry)
    }

    /// Register a built-in object (programmatic API).
    pub fn register_object(&mut self, obj: BuiltInObject) -> Result<(), RegistryError> {
        if self.has_object(&obj.name) {
            return Err(RegistryError::DuplicateObject(obj.name));
        }
        let mut seen: Vec<PropertyKey> = Vec::with_capacity(obj.members().len());
        for member in obj.members() {
            let key = member.key();
            if seen.contains(&key) {
                return Err(RegistryError::DuplicateMember(obj.name.clone(), key.to_string()));
            }
            seen.push(key);
        }
        debug!(
            "registered built-in object '{}' with {} member(s)",
            obj.name,
            obj.members().len()
        );
        self.objects.push(obj);
        Ok(())
    }

    /// Get a registered object by name.
    pub fn get_object(&self, name: &str) -> Option<&BuiltInObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Get a built-in function for execution.
    pub fn get_method(&self, object: &str, method: &str) -> Option<&BuiltInFn> {
        self.get_object(object).and_then(|obj| obj.get_method(method))
    }

    /// Check if an object exists in the registry.
    pub fn has_object(&self, name: &str) -> bool {
        self.get_object(name).is_some()
    }

    /// Check if a method exists on an object.
    pub fn has_method(&self, object: &str, method: &str) -> bool {
        self.get_method(object, method).is_some()
    }

    /// Names of all registered objects, in registration order.
    pub fn object_names(&self) -> Vec<&str> {
        self.objects.iter().map(|o| o.name.as_str()).collect()
    }

    /// Materialises every registered object into `realm`.
    pub fn install(&self, realm: &mut CodeRealm) {
        let global = realm.global_object();
        let function_prototype = realm.get_intrinsic(WellKnownIntrinsics::FunctionPrototype);
        for obj in &self.objects {
            match obj.target {
                InstallTarget::GlobalObject => {
                    install_members(&global, obj, &function_prototype);
                }
                InstallTarget::GlobalBinding(attributes) => {
                    let prototype = obj.prototype.and_then(|p| realm.get_intrinsic(p));
                    let target = new_ordinary_object(prototype);
                    install_members(&target, obj, &function_prototype);
                    (*global).borrow_mut().as_js_object_mut().define_direct_property(
                        PropertyKey::from(obj.name.as_str()),
                        JsValue::Object(target.clone()),
                        attributes,
                    );
                    if let Some(intrinsic) = obj.intrinsic {
                        realm.add_intrinsic(intrinsic, target);
                    }
                }
            }
            debug!("installed built-in object '{}'", obj.name);
        }
    }
}

fn install_members(
    target: &JsObjectType,
    obj: &BuiltInObject,
    function_prototype: &Option<JsObjectType>,
) {
    let mut target = (**target).borrow_mut();
    let target = target.as_js_object_mut();
    for member in obj.members() {
        match member {
            BuiltInMember::Method {
                name,
                func,
                length,
                attributes,
            } => {
                target.define_native_function(
                    function_prototype.clone(),
                    name,
                    func.clone(),
                    *length,
                    *attributes,
                );
            }
            BuiltInMember::Property {
                key,
                value,
                attributes,
            } => target.define_direct_property(key.clone(), value.clone(), *attributes),
            BuiltInMember::Accessor {
                key,
                getter,
                setter,
                attributes,
            } => target.define_native_accessor(
                key.clone(),
                getter.clone(),
                setter.clone(),
                *attributes,
            ),
        }
    }
}

impl Default for BuiltInRegistry {
    fn default() -> Self {
        Self::new()
    }
}

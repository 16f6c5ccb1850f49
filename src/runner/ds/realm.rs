use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

use crate::runner::ds::object::{new_ordinary_object, JsObjectType};
use crate::runner::plugin::config::RuntimeConfig;
use crate::runner::plugin::registry::{BuiltInRegistry, RegistryError};
use crate::runner::std_lib::math::seed_random_source;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WellKnownIntrinsics {
    FunctionPrototype,
    Math,
    ObjectPrototype,
}

pub type JsCodeRealmType = Rc<CodeRealm>;

/// One execution realm: a global object plus the intrinsic objects its built-ins
/// were created against. Realms share nothing except the process-wide random source.
pub struct CodeRealm {
    intrinsics: HashMap<WellKnownIntrinsics, JsObjectType>,
    global_this: JsObjectType,
}
impl CodeRealm {
    /// A realm with every built-in installed.
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(&RuntimeConfig::default())
    }

    pub fn with_config(config: &RuntimeConfig) -> Result<Self, RegistryError> {
        let registry = BuiltInRegistry::with_config(&config.builtins)?;
        let realm = Self::with_registry(&registry);
        if let Some(seed) = config.random.seed {
            seed_random_source(seed);
        }
        Ok(realm)
    }

    /// A realm populated from an already-built registry.
    pub fn with_registry(registry: &BuiltInRegistry) -> Self {
        let mut realm = Self::bare();
        registry.install(&mut realm);
        debug!(
            "realm initialised with built-ins {:?}",
            registry.object_names()
        );
        realm
    }

    fn bare() -> Self {
        let object_prototype = new_ordinary_object(None);
        let function_prototype = new_ordinary_object(Some(object_prototype.clone()));
        let global_this = new_ordinary_object(Some(object_prototype.clone()));
        let mut intrinsics = HashMap::new();
        intrinsics.insert(WellKnownIntrinsics::ObjectPrototype, object_prototype);
        intrinsics.insert(WellKnownIntrinsics::FunctionPrototype, function_prototype);
        CodeRealm {
            intrinsics,
            global_this,
        }
    }

    pub fn get_intrinsic(&self, intrinsic: WellKnownIntrinsics) -> Option<JsObjectType> {
        self.intrinsics.get(&intrinsic).cloned()
    }

    pub(crate) fn add_intrinsic(&mut self, intrinsic: WellKnownIntrinsics, value: JsObjectType) {
        self.intrinsics.insert(intrinsic, value);
    }

    pub fn global_object(&self) -> JsObjectType {
        self.global_this.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ds::object_property::PropertyKey;
    use crate::runner::plugin::config::BuiltinsConfig;

    #[test]
    fn realms_own_distinct_math_objects() {
        let a = CodeRealm::new().unwrap();
        let b = CodeRealm::new().unwrap();
        let math_a = a.get_intrinsic(WellKnownIntrinsics::Math).unwrap();
        let math_b = b.get_intrinsic(WellKnownIntrinsics::Math).unwrap();
        assert!(!Rc::ptr_eq(&math_a, &math_b));
    }

    #[test]
    fn math_inherits_from_object_prototype() {
        let realm = CodeRealm::new().unwrap();
        let math = realm.get_intrinsic(WellKnownIntrinsics::Math).unwrap();
        let proto = (*math).borrow().as_js_object().get_prototype_of().unwrap();
        let object_prototype = realm.get_intrinsic(WellKnownIntrinsics::ObjectPrototype).unwrap();
        assert!(Rc::ptr_eq(&proto, &object_prototype));
    }

    #[test]
    fn disabled_math_leaves_no_binding() {
        let config = RuntimeConfig {
            builtins: BuiltinsConfig {
                math: false,
                globals: true,
            },
            ..RuntimeConfig::default()
        };
        let realm = CodeRealm::with_config(&config).unwrap();
        assert!(realm.get_intrinsic(WellKnownIntrinsics::Math).is_none());
        let global = realm.global_object();
        let global = (*global).borrow();
        assert!(!global.as_js_object().has_own_property(&PropertyKey::from("Math")));
        assert!(global.as_js_object().has_own_property(&PropertyKey::from("NaN")));
    }
}

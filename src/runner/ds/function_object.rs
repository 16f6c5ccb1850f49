use crate::runner::ds::object::{JsObject, JsObjectType, ObjectBase};
use crate::runner::ds::object_property::{PropertyAttributes, PropertyKey};
use crate::runner::ds::value::{JsNumber, JsValue};
use crate::runner::plugin::types::BuiltInFn;

pub trait JsFunctionObject: JsObject {
    fn name(&self) -> &str;

    /// Declared arity. Informational only: calls never check it.
    fn length(&self) -> u32;

    fn behaviour(&self) -> &BuiltInFn;
}

/// A callable object backed by a host callback.
pub struct NativeFunctionObject {
    name: String,
    length: u32,
    behaviour: BuiltInFn,
    object_base: ObjectBase,
}
impl NativeFunctionObject {
    pub fn new(
        name: &str,
        behaviour: BuiltInFn,
        length: u32,
        prototype: Option<JsObjectType>,
    ) -> Self {
        let mut f = NativeFunctionObject {
            name: name.to_string(),
            length,
            behaviour,
            object_base: ObjectBase::with_prototype(prototype),
        };
        f.define_direct_property(
            PropertyKey::from("length"),
            JsValue::Number(JsNumber::from(length)),
            PropertyAttributes::CONFIGURABLE,
        );
        f.define_direct_property(
            PropertyKey::from("name"),
            JsValue::from(name),
            PropertyAttributes::CONFIGURABLE,
        );
        f
    }
}

impl JsObject for NativeFunctionObject {
    fn get_object_base_mut(&mut self) -> &mut ObjectBase {
        &mut self.object_base
    }

    fn get_object_base(&self) -> &ObjectBase {
        &self.object_base
    }

    fn as_super_trait(&self) -> &dyn JsObject {
        self
    }

    fn as_super_trait_mut(&mut self) -> &mut dyn JsObject {
        self
    }

    fn to_string(&self) -> String {
        format!("function {}() {{ [native code] }}", self.name)
    }
}

impl JsFunctionObject for NativeFunctionObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn length(&self) -> u32 {
        self.length
    }

    fn behaviour(&self) -> &BuiltInFn {
        &self.behaviour
    }
}

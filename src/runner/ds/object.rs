use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::runner::ds::function_object::{JsFunctionObject, NativeFunctionObject};
use crate::runner::ds::native_accessor::{NativeAccessor, NativeGetter, NativeSetter};
use crate::runner::ds::object_property::{PropertyAttributes, PropertyDescriptor, PropertyKey};
use crate::runner::ds::operations::test_and_comparison::same_value;
use crate::runner::ds::value::JsValue;
use crate::runner::plugin::types::BuiltInFn;

pub type JsObjectType = Rc<RefCell<ObjectType>>;

pub enum ObjectType {
    Ordinary(Box<dyn JsObject>),
    Function(Box<dyn JsFunctionObject>),
}
impl ObjectType {
    pub fn is_callable(&self) -> bool {
        matches!(self, ObjectType::Function(_))
    }

    pub fn as_js_object(&self) -> &dyn JsObject {
        match self {
            ObjectType::Ordinary(o) => o.as_super_trait(),
            ObjectType::Function(o) => o.as_super_trait(),
        }
    }

    pub fn as_js_object_mut(&mut self) -> &mut dyn JsObject {
        match self {
            ObjectType::Ordinary(o) => o.as_super_trait_mut(),
            ObjectType::Function(o) => o.as_super_trait_mut(),
        }
    }

    pub fn as_function_object(&self) -> Option<&dyn JsFunctionObject> {
        match self {
            ObjectType::Function(f) => Some(f.as_ref()),
            ObjectType::Ordinary(_) => None,
        }
    }
}

/// Own-property storage. Keys remember their first insertion so enumeration
/// order is deterministic.
pub struct ObjectBase {
    properties: HashMap<PropertyKey, PropertyDescriptor>,
    property_order: Vec<PropertyKey>,
    is_extensible: bool,
    prototype: Option<JsObjectType>,
}
impl ObjectBase {
    pub fn new() -> Self {
        ObjectBase {
            properties: HashMap::new(),
            property_order: Vec::new(),
            is_extensible: true,
            prototype: None,
        }
    }

    pub fn with_prototype(prototype: Option<JsObjectType>) -> Self {
        ObjectBase {
            prototype,
            ..ObjectBase::new()
        }
    }

    fn put(&mut self, property: PropertyKey, descriptor: PropertyDescriptor) {
        if !self.properties.contains_key(&property) {
            self.property_order.push(property.clone());
        }
        self.properties.insert(property, descriptor);
    }

    fn remove(&mut self, property: &PropertyKey) {
        if self.properties.remove(property).is_some() {
            self.property_order.retain(|k| k != property);
        }
    }
}
impl Default for ObjectBase {
    fn default() -> Self {
        Self::new()
    }
}

pub trait JsObject {
    fn get_object_base_mut(&mut self) -> &mut ObjectBase;

    fn get_object_base(&self) -> &ObjectBase;

    fn as_super_trait(&self) -> &dyn JsObject;

    fn as_super_trait_mut(&mut self) -> &mut dyn JsObject;

    fn get_prototype_of(&self) -> Option<JsObjectType> {
        self.get_object_base().prototype.clone()
    }

    fn is_extensible(&self) -> bool {
        self.get_object_base().is_extensible
    }

    fn prevent_extensions(&mut self) -> bool {
        self.get_object_base_mut().is_extensible = false;
        true
    }

    fn get_own_property(&self, property: &PropertyKey) -> Option<&PropertyDescriptor> {
        self.get_object_base().properties.get(property)
    }

    fn define_own_property(&mut self, property: PropertyKey, descriptor: PropertyDescriptor) -> bool {
        ordinary_define_own_property(self, property, descriptor)
    }

    fn has_own_property(&self, property: &PropertyKey) -> bool {
        self.get_object_base().properties.contains_key(property)
    }

    fn has_property(&self, property: &PropertyKey) -> bool {
        if self.has_own_property(property) {
            true
        } else {
            match &self.get_object_base().prototype {
                None => false,
                Some(o) => (**o).borrow().as_js_object().has_property(property),
            }
        }
    }

    fn delete(&mut self, property: &PropertyKey) -> bool {
        match self.get_own_property(property) {
            None => true,
            Some(pd) => {
                if pd.is_configurable() {
                    self.get_object_base_mut().remove(property);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// String keys in insertion order, then symbol keys in insertion order.
    fn own_property_keys(&self) -> Vec<PropertyKey> {
        let order = &self.get_object_base().property_order;
        let str_keys = order.iter().filter(|k| matches!(k, PropertyKey::Str(_)));
        let sym_keys = order.iter().filter(|k| matches!(k, PropertyKey::Sym(_)));
        str_keys.chain(sym_keys).cloned().collect()
    }

    fn to_string(&self) -> String {
        "object".to_string()
    }

    /// Installs a data property without validation. Used while a realm is being
    /// initialised, when the object is known to be fresh.
    fn define_direct_property(
        &mut self,
        property: PropertyKey,
        value: JsValue,
        attributes: PropertyAttributes,
    ) {
        self.get_object_base_mut()
            .put(property, PropertyDescriptor::data(value, attributes));
    }

    fn define_native_accessor(
        &mut self,
        property: PropertyKey,
        getter: Option<NativeGetter>,
        setter: Option<NativeSetter>,
        attributes: PropertyAttributes,
    ) {
        self.get_object_base_mut().put(
            property,
            PropertyDescriptor::accessor(NativeAccessor::new(getter, setter), attributes),
        );
    }

    /// Creates a native function object and installs it under `name`.
    fn define_native_function(
        &mut self,
        function_prototype: Option<JsObjectType>,
        name: &str,
        behaviour: BuiltInFn,
        length: u32,
        attributes: PropertyAttributes,
    ) -> JsObjectType {
        let function = Rc::new(RefCell::new(ObjectType::Function(Box::new(
            NativeFunctionObject::new(name, behaviour, length, function_prototype),
        ))));
        self.define_direct_property(
            PropertyKey::from(name),
            JsValue::Object(function.clone()),
            attributes,
        );
        function
    }
}

pub fn ordinary_define_own_property<J: JsObject + ?Sized>(
    o: &mut J,
    property: PropertyKey,
    descriptor: PropertyDescriptor,
) -> bool {
    match o.get_own_property(&property) {
        None => {
            if !o.is_extensible() {
                return false;
            }
        }
        Some(current) => {
            if current == &descriptor {
                return true;
            }
            if !current.is_configurable() {
                if descriptor.is_configurable() || descriptor.is_enumerable() != current.is_enumerable()
                {
                    return false;
                }
                match (current, &descriptor) {
                    (
                        PropertyDescriptor::Data {
                            value: current_value,
                            writable: current_writable,
                            ..
                        },
                        PropertyDescriptor::Data {
                            value: desc_value,
                            writable: desc_writable,
                            ..
                        },
                    ) => {
                        if !*current_writable && (*desc_writable || !same_value(current_value, desc_value))
                        {
                            return false;
                        }
                    }
                    (
                        PropertyDescriptor::Accessor {
                            accessor: current_accessor,
                            ..
                        },
                        PropertyDescriptor::Accessor {
                            accessor: desc_accessor,
                            ..
                        },
                    ) => {
                        if !current_accessor.same_accessor(desc_accessor) {
                            return false;
                        }
                    }
                    _ => return false,
                }
            }
        }
    }
    o.get_object_base_mut().put(property, descriptor);
    true
}

pub struct OrdinaryObject {
    object_base: ObjectBase,
}
impl JsObject for OrdinaryObject {
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
}

pub fn object_create(prototype: Option<JsObjectType>) -> OrdinaryObject {
    OrdinaryObject {
        object_base: ObjectBase::with_prototype(prototype),
    }
}

pub fn new_ordinary_object(prototype: Option<JsObjectType>) -> JsObjectType {
    Rc::new(RefCell::new(ObjectType::Ordinary(Box::new(object_create(
        prototype,
    )))))
}

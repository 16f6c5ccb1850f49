use crate::runner::ds::error::JErrorType;
use crate::runner::ds::native_accessor::NativeAccessor;
use crate::runner::ds::object::JsObjectType;
use crate::runner::ds::object_property::{PropertyAttributes, PropertyDescriptor, PropertyKey};
use crate::runner::ds::value::JsValue;
use crate::runner::plugin::types::EvalContext;

const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_GROWTH: usize = 1024 * 1024;

/// What a property lookup found, copied out so that no borrow of the object is
/// held while user or host code runs.
enum Lookup {
    Value(JsValue, bool),
    Accessor(NativeAccessor),
    Missing(Option<JsObjectType>),
}

fn lookup_own(o: &JsObjectType, p: &PropertyKey) -> Lookup {
    let o = (**o).borrow();
    let o = o.as_js_object();
    match o.get_own_property(p) {
        Some(PropertyDescriptor::Data {
            value, writable, ..
        }) => Lookup::Value(value.clone(), *writable),
        Some(PropertyDescriptor::Accessor { accessor, .. }) => Lookup::Accessor(accessor.clone()),
        None => Lookup::Missing(o.get_prototype_of()),
    }
}

pub fn get(ctx: &mut EvalContext, o: &JsObjectType, p: &PropertyKey) -> Result<JsValue, JErrorType> {
    get_with_receiver(ctx, o, p, &JsValue::Object(o.clone()))
}

pub fn get_with_receiver(
    ctx: &mut EvalContext,
    o: &JsObjectType,
    p: &PropertyKey,
    receiver: &JsValue,
) -> Result<JsValue, JErrorType> {
    let mut current = o.clone();
    loop {
        match lookup_own(&current, p) {
            Lookup::Value(value, _) => return Ok(value),
            Lookup::Accessor(accessor) => return accessor.get(ctx, receiver),
            Lookup::Missing(None) => return Ok(JsValue::Undefined),
            Lookup::Missing(Some(proto)) => current = proto,
        }
    }
}

/// Ordinary [[Set]]. Returns `Ok(false)` when the write is refused (non-writable
/// data property, accessor without setter, non-extensible receiver); reporting that
/// as an error is up to the caller.
pub fn set(
    ctx: &mut EvalContext,
    o: &JsObjectType,
    p: PropertyKey,
    value: JsValue,
) -> Result<bool, JErrorType> {
    let receiver = JsValue::Object(o.clone());
    let mut current = o.clone();
    loop {
        match lookup_own(&current, &p) {
            Lookup::Value(_, false) => return Ok(false),
            Lookup::Value(_, true) | Lookup::Missing(None) => break,
            Lookup::Accessor(accessor) => {
                accessor.set(ctx, &receiver, value)?;
                return Ok(accessor.has_setter());
            }
            Lookup::Missing(Some(proto)) => current = proto,
        }
    }

    let mut target = (**o).borrow_mut();
    let target = target.as_js_object_mut();
    let descriptor = match target.get_own_property(&p) {
        Some(PropertyDescriptor::Data {
            writable: true,
            enumerable,
            configurable,
            ..
        }) => PropertyDescriptor::Data {
            value,
            writable: true,
            enumerable: *enumerable,
            configurable: *configurable,
        },
        Some(_) => return Ok(false),
        None => PropertyDescriptor::data(
            value,
            PropertyAttributes::WRITABLE | PropertyAttributes::ENUMERABLE | PropertyAttributes::CONFIGURABLE,
        ),
    };
    Ok(target.define_own_property(p, descriptor))
}

pub fn delete(o: &JsObjectType, p: &PropertyKey) -> bool {
    (**o).borrow_mut().as_js_object_mut().delete(p)
}

/// Returns the callable at `p`, `None` when it is undefined or null, and a
/// TypeError for anything else.
pub fn get_method(
    ctx: &mut EvalContext,
    o: &JsObjectType,
    p: &PropertyKey,
) -> Result<Option<JsValue>, JErrorType> {
    let f = get(ctx, o, p)?;
    match &f {
        JsValue::Undefined | JsValue::Null => Ok(None),
        JsValue::Object(fo) if (**fo).borrow().is_callable() => Ok(Some(f)),
        _ => Err(JErrorType::TypeError(format!("'{}' is not a function", p))),
    }
}

pub fn is_callable(v: &JsValue) -> bool {
    match v {
        JsValue::Object(o) => (**o).borrow().is_callable(),
        _ => false,
    }
}

/// Invokes a function object. The callback is cloned out of the object first, so
/// the callee may freely touch the function object or re-enter this call path.
pub fn call_function(
    ctx: &mut EvalContext,
    f: &JsValue,
    this: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    let (name, behaviour) = match f {
        JsValue::Object(o) => match (**o).borrow().as_function_object() {
            Some(function) => (function.name().to_string(), function.behaviour().clone()),
            None => return Err(JErrorType::TypeError(format!("{} is not a function", f))),
        },
        _ => return Err(JErrorType::TypeError(format!("{} is not a function", f))),
    };
    log::trace!("calling native function '{}' with {} argument(s)", name, args.len());
    stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || {
        behaviour.call(ctx, this, args)
    })
}

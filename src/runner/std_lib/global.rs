//! Value properties and functions of the global object.

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::operations::type_conversion::to_number;
use crate::runner::ds::value::{JsNumber, JsValue};
use crate::runner::plugin::registry::{BuiltInRegistry, RegistryError};
use crate::runner::plugin::types::{BuiltInObject, EvalContext};

/// Register the global value properties. They land on the global object itself.
pub fn register(registry: &mut BuiltInRegistry) -> Result<(), RegistryError> {
    let global = BuiltInObject::new("global")
        .on_global_object()
        .add_property("NaN", JsValue::nan())
        .add_property("Infinity", JsValue::from(JsNumber::POSITIVE_INFINITY))
        .add_property("undefined", JsValue::Undefined)
        .add_method("isNaN", global_is_nan, 1)
        .add_method("isFinite", global_is_finite, 1);

    registry.register_object(global)
}

fn first_arg_as_number(ctx: &mut EvalContext, args: &[JsValue]) -> Result<JsNumber, JErrorType> {
    match args.first() {
        Some(v) => to_number(ctx, v),
        None => Ok(JsNumber::NAN),
    }
}

/// isNaN
fn global_is_nan(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    Ok(JsValue::Boolean(first_arg_as_number(ctx, &args)?.is_nan()))
}

/// isFinite
fn global_is_finite(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    Ok(JsValue::Boolean(first_arg_as_number(ctx, &args)?.is_finite_number()))
}

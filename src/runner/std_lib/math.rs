//! Math built-in object.
//!
//! Provides mathematical constants and functions. Each function coerces its
//! arguments left to right, stops at the first coercion failure, and hands the
//! coerced numbers to the case tables in [`numeric`].

use log::debug;
use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::object_property::PropertyAttributes;
use crate::runner::ds::operations::numeric;
use crate::runner::ds::operations::type_conversion::{to_number, to_uint32};
use crate::runner::ds::realm::WellKnownIntrinsics;
use crate::runner::ds::symbol::SYMBOL_TO_STRING_TAG;
use crate::runner::ds::value::{JsNumber, JsValue};
use crate::runner::plugin::registry::{BuiltInRegistry, RegistryError};
use crate::runner::plugin::types::{BuiltInObject, EvalContext};

lazy_static! {
    static ref RANDOM_SOURCE: Mutex<SmallRng> = Mutex::new(SmallRng::from_entropy());
}

/// Reseeds the process-wide source behind `Math.random`. Every realm draws from it.
pub fn seed_random_source(seed: u64) {
    *RANDOM_SOURCE.lock() = SmallRng::seed_from_u64(seed);
    debug!("random source reseeded with {}", seed);
}

/// Register the Math object with the registry.
pub fn register(registry: &mut BuiltInRegistry) -> Result<(), RegistryError> {
    let math = BuiltInObject::new("Math")
        .as_intrinsic(WellKnownIntrinsics::Math)
        // Methods
        .add_method("abs", math_abs, 1)
        .add_method("random", math_random, 0)
        .add_method("sqrt", math_sqrt, 1)
        .add_method("floor", math_floor, 1)
        .add_method("ceil", math_ceil, 1)
        .add_method("round", math_round, 1)
        .add_method("max", math_max, 2)
        .add_method("min", math_min, 2)
        .add_method("trunc", math_trunc, 1)
        .add_method("sin", math_sin, 1)
        .add_method("cos", math_cos, 1)
        .add_method("tan", math_tan, 1)
        .add_method("pow", math_pow, 2)
        .add_method("exp", math_exp, 1)
        .add_method("expm1", math_expm1, 1)
        .add_method("sign", math_sign, 1)
        .add_method("clz32", math_clz32, 1)
        .add_method("acos", math_acos, 1)
        .add_method("acosh", math_acosh, 1)
        .add_method("asin", math_asin, 1)
        .add_method("asinh", math_asinh, 1)
        .add_method("atan", math_atan, 1)
        .add_method("atanh", math_atanh, 1)
        .add_method("log1p", math_log1p, 1)
        .add_method("cbrt", math_cbrt, 1)
        .add_method("atan2", math_atan2, 2)
        .add_method("fround", math_fround, 1)
        .add_method("hypot", math_hypot, 2)
        .add_method("imul", math_imul, 2)
        .add_method("log", math_log, 1)
        .add_method("log2", math_log2, 1)
        .add_method("log10", math_log10, 1)
        .add_method("sinh", math_sinh, 1)
        .add_method("cosh", math_cosh, 1)
        .add_method("tanh", math_tanh, 1)
        // Constants
        .add_property("E", JsValue::from(std::f64::consts::E))
        .add_property("LN10", JsValue::from(std::f64::consts::LN_10))
        .add_property("LN2", JsValue::from(std::f64::consts::LN_2))
        .add_property("LOG10E", JsValue::from(std::f64::consts::LOG10_E))
        .add_property("LOG2E", JsValue::from(std::f64::consts::LOG2_E))
        .add_property("PI", JsValue::from(std::f64::consts::PI))
        .add_property("SQRT1_2", JsValue::from(std::f64::consts::FRAC_1_SQRT_2))
        .add_property("SQRT2", JsValue::from(std::f64::consts::SQRT_2))
        .add_property_with_attributes(
            SYMBOL_TO_STRING_TAG.clone(),
            JsValue::from("Math"),
            PropertyAttributes::CONFIGURABLE,
        );

    registry.register_object(math)
}

/// ToNumber of the argument at `index`; a missing argument is `undefined`, hence NaN.
fn number_arg(ctx: &mut EvalContext, args: &[JsValue], index: usize) -> Result<JsNumber, JErrorType> {
    match args.get(index) {
        Some(v) => to_number(ctx, v),
        None => Ok(JsNumber::NAN),
    }
}

fn uint32_arg(ctx: &mut EvalContext, args: &[JsValue], index: usize) -> Result<u32, JErrorType> {
    match args.get(index) {
        Some(v) => to_uint32(ctx, v),
        None => Ok(0),
    }
}

/// Coerces every argument, in order, stopping at the first failure.
fn number_args(ctx: &mut EvalContext, args: &[JsValue]) -> Result<Vec<JsNumber>, JErrorType> {
    args.iter().map(|v| to_number(ctx, v)).collect()
}

fn apply_unary(
    ctx: &mut EvalContext,
    args: &[JsValue],
    op: fn(JsNumber) -> JsNumber,
) -> Result<JsValue, JErrorType> {
    let x = number_arg(ctx, args, 0)?;
    Ok(JsValue::Number(op(x)))
}

fn apply_binary(
    ctx: &mut EvalContext,
    args: &[JsValue],
    op: fn(JsNumber, JsNumber) -> JsNumber,
) -> Result<JsValue, JErrorType> {
    let a = number_arg(ctx, args, 0)?;
    let b = number_arg(ctx, args, 1)?;
    Ok(JsValue::Number(op(a, b)))
}

/// Math.abs
fn math_abs(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::abs)
}

/// Math.random
fn math_random(_ctx: &mut EvalContext, _this: JsValue, _args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    let draw: u32 = RANDOM_SOURCE.lock().gen();
    Ok(JsValue::Number(numeric::random_from_u32(draw)))
}

/// Math.sqrt
fn math_sqrt(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::sqrt)
}

/// Math.floor
fn math_floor(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::floor)
}

/// Math.ceil
fn math_ceil(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::ceil)
}

/// Math.round
fn math_round(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::round)
}

/// Math.max
fn math_max(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    let values = number_args(ctx, &args)?;
    Ok(JsValue::Number(numeric::max(&values)))
}

/// Math.min
fn math_min(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    let values = number_args(ctx, &args)?;
    Ok(JsValue::Number(numeric::min(&values)))
}

/// Math.trunc
fn math_trunc(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::trunc)
}

/// Math.sin
fn math_sin(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::sin)
}

/// Math.cos
fn math_cos(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::cos)
}

/// Math.tan
fn math_tan(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::tan)
}

/// Math.pow
fn math_pow(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_binary(ctx, &args, numeric::exponentiate)
}

/// Math.exp
fn math_exp(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::exp)
}

/// Math.expm1
fn math_expm1(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::expm1)
}

/// Math.sign
fn math_sign(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::sign)
}

/// Math.clz32
fn math_clz32(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    let x = uint32_arg(ctx, &args, 0)?;
    Ok(JsValue::Number(numeric::clz32(x)))
}

/// Math.acos
fn math_acos(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::acos)
}

/// Math.acosh
fn math_acosh(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::acosh)
}

/// Math.asin
fn math_asin(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::asin)
}

/// Math.asinh
fn math_asinh(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::asinh)
}

/// Math.atan
fn math_atan(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::atan)
}

/// Math.atanh
fn math_atanh(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::atanh)
}

/// Math.log1p
fn math_log1p(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::log1p)
}

/// Math.cbrt
fn math_cbrt(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::cbrt)
}

/// Math.atan2
fn math_atan2(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_binary(ctx, &args, numeric::atan2)
}

/// Math.fround
fn math_fround(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::fround)
}

/// Math.hypot
fn math_hypot(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    let values = number_args(ctx, &args)?;
    Ok(JsValue::Number(numeric::hypot(&values)))
}

/// Math.imul
fn math_imul(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    let a = uint32_arg(ctx, &args, 0)?;
    let b = uint32_arg(ctx, &args, 1)?;
    Ok(JsValue::Number(numeric::imul(a, b)))
}

/// Math.log (natural logarithm)
fn math_log(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::log)
}

/// Math.log2
fn math_log2(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::log2)
}

/// Math.log10
fn math_log10(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::log10)
}

/// Math.sinh
fn math_sinh(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::sinh)
}

/// Math.cosh
fn math_cosh(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::cosh)
}

/// Math.tanh
fn math_tanh(ctx: &mut EvalContext, _this: JsValue, args: Vec<JsValue>) -> Result<JsValue, JErrorType> {
    apply_unary(ctx, &args, numeric::tanh)
}

//! Tests for standard library built-in functions.
//!
//! These tests go through the realm's global object, the way script code
//! reaches Math, and call the bound function objects.

extern crate just_builtins;

use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use just_builtins::runner::ds::error::JErrorType;
use just_builtins::runner::ds::object::{new_ordinary_object, JsObjectType};
use just_builtins::runner::ds::object_property::{PropertyAttributes, PropertyDescriptor, PropertyKey};
use just_builtins::runner::ds::operations::object::{call_function, delete, get, set};
use just_builtins::runner::ds::realm::CodeRealm;
use just_builtins::runner::ds::symbol::SYMBOL_TO_STRING_TAG;
use just_builtins::runner::ds::value::{JsNumber, JsValue};
use just_builtins::runner::plugin::types::{BuiltInFn, EvalContext};

fn new_context() -> EvalContext {
    EvalContext::new(Rc::new(CodeRealm::new().expect("realm should initialise")))
}

fn math_object(ctx: &mut EvalContext) -> JsObjectType {
    match ctx.get_binding("Math").expect("Math should be readable") {
        JsValue::Object(o) => o,
        other => panic!("Math should be an object, got {:?}", other),
    }
}

fn try_call_math_method(
    ctx: &mut EvalContext,
    method: &str,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    let math = math_object(ctx);
    let f = get(ctx, &math, &PropertyKey::from(method))?;
    call_function(ctx, &f, JsValue::Object(math), args)
}

fn call_math_method(ctx: &mut EvalContext, method: &str, args: Vec<JsValue>) -> JsNumber {
    try_call_math_method(ctx, method, args)
        .unwrap_or_else(|e| panic!("Math.{} should succeed: {}", method, e))
        .as_number()
        .unwrap_or_else(|| panic!("Math.{} should return a number", method))
}

fn num(n: f64) -> JsValue {
    JsValue::from(n)
}

fn own_descriptor(o: &JsObjectType, key: impl Into<PropertyKey>) -> PropertyDescriptor {
    (**o)
        .borrow()
        .as_js_object()
        .get_own_property(&key.into())
        .cloned()
        .expect("property should exist")
}

type CoercionLog = Rc<RefCell<Vec<&'static str>>>;

/// An object whose `valueOf` records `tag` and then yields `result`.
fn tracked_value(log: &CoercionLog, tag: &'static str, result: Result<JsValue, JErrorType>) -> JsValue {
    let log = log.clone();
    let o = new_ordinary_object(None);
    (*o).borrow_mut().as_js_object_mut().define_native_function(
        None,
        "valueOf",
        BuiltInFn::plugin(move |_ctx, _this, _args| {
            log.borrow_mut().push(tag);
            result.clone()
        }),
        0,
        PropertyAttributes::WRITABLE | PropertyAttributes::CONFIGURABLE,
    );
    JsValue::Object(o)
}

fn thrown(message: &str) -> JErrorType {
    JErrorType::Thrown(JsValue::from(message))
}

// ============================================================================
// Math tests
// ============================================================================

mod math_tests {
    use super::*;

    #[test]
    fn test_math_nan_passthrough() {
        let mut ctx = new_context();
        for method in [
            "abs", "sqrt", "floor", "ceil", "round", "trunc", "sign", "sin", "cos", "tan", "exp",
            "expm1", "acos", "acosh", "asin", "asinh", "atan", "atanh", "log1p", "cbrt", "fround",
            "log", "log2", "log10", "sinh", "cosh", "tanh",
        ]
        .iter()
        {
            assert!(
                call_math_method(&mut ctx, method, vec![JsValue::nan()]).is_nan(),
                "Math.{}(NaN)",
                method
            );
            assert!(
                call_math_method(&mut ctx, method, vec![JsValue::from("not a number")]).is_nan(),
                "Math.{}('not a number')",
                method
            );
        }
    }

    #[test]
    fn test_math_floor_ceil_zero_signs() {
        let mut ctx = new_context();
        assert!(call_math_method(&mut ctx, "ceil", vec![num(-0.5)]).is_negative_zero());
        assert!(call_math_method(&mut ctx, "floor", vec![num(0.5)]).is_positive_zero());
        assert_eq!(call_math_method(&mut ctx, "floor", vec![num(3.7)]).as_double(), 3.0);
        assert_eq!(call_math_method(&mut ctx, "ceil", vec![num(3.2)]).as_double(), 4.0);
    }

    #[test]
    fn test_math_round() {
        let mut ctx = new_context();
        assert!(call_math_method(&mut ctx, "round", vec![num(-0.5)]).is_negative_zero());
        assert!(call_math_method(&mut ctx, "round", vec![num(0.4)]).is_positive_zero());
        assert_eq!(call_math_method(&mut ctx, "round", vec![num(3.4)]).as_double(), 3.0);
        assert_eq!(call_math_method(&mut ctx, "round", vec![num(3.5)]).as_double(), 4.0);
        assert_eq!(call_math_method(&mut ctx, "round", vec![num(-3.5)]).as_double(), -3.0);
    }

    #[test]
    fn test_math_trunc() {
        let mut ctx = new_context();
        assert_eq!(call_math_method(&mut ctx, "trunc", vec![num(4.7)]).as_double(), 4.0);
        assert_eq!(call_math_method(&mut ctx, "trunc", vec![num(-4.7)]).as_double(), -5.0);
        assert_eq!(call_math_method(&mut ctx, "trunc", vec![num(-4.0)]).as_double(), -4.0);
        assert!(call_math_method(&mut ctx, "trunc", vec![num(-0.7)]).is_negative_zero());
        assert!(call_math_method(&mut ctx, "trunc", vec![num(0.7)]).is_positive_zero());
    }

    #[test]
    fn test_math_max_min_empty_and_zeros() {
        let mut ctx = new_context();
        assert!(call_math_method(&mut ctx, "max", vec![]).is_negative_infinity());
        assert!(call_math_method(&mut ctx, "min", vec![]).is_positive_infinity());
        let zeros = vec![num(0.0), num(-0.0)];
        assert!(call_math_method(&mut ctx, "max", zeros.clone()).is_positive_zero());
        assert!(call_math_method(&mut ctx, "min", zeros).is_negative_zero());
        let values = vec![num(5.0), num(3.0), num(8.0)];
        assert_eq!(call_math_method(&mut ctx, "max", values.clone()).as_double(), 8.0);
        assert_eq!(call_math_method(&mut ctx, "min", values).as_double(), 3.0);
    }

    #[test]
    fn test_math_pow() {
        let mut ctx = new_context();
        let ninf = JsValue::from(JsNumber::NEGATIVE_INFINITY);
        let pinf = JsValue::from(JsNumber::POSITIVE_INFINITY);
        assert!(call_math_method(&mut ctx, "pow", vec![ninf.clone(), num(3.0)]).is_negative_infinity());
        assert!(call_math_method(&mut ctx, "pow", vec![ninf, num(2.0)]).is_positive_infinity());
        assert!(call_math_method(&mut ctx, "pow", vec![num(0.0), num(-1.0)]).is_positive_infinity());
        assert!(call_math_method(&mut ctx, "pow", vec![num(-1.0), pinf]).is_nan());
        assert_eq!(call_math_method(&mut ctx, "pow", vec![num(2.0), num(10.0)]).as_double(), 1024.0);
    }

    #[test]
    fn test_math_atan2_zero_quadrants() {
        let mut ctx = new_context();
        assert!(call_math_method(&mut ctx, "atan2", vec![num(0.0), num(0.0)]).is_positive_zero());
        assert!(call_math_method(&mut ctx, "atan2", vec![num(-0.0), num(0.0)]).is_negative_zero());
        assert_eq!(call_math_method(&mut ctx, "atan2", vec![num(0.0), num(-0.0)]).as_double(), PI);
        assert_eq!(call_math_method(&mut ctx, "atan2", vec![num(-0.0), num(-0.0)]).as_double(), -PI);
    }

    #[test]
    fn test_math_hypot() {
        let mut ctx = new_context();
        let pinf = JsValue::from(JsNumber::POSITIVE_INFINITY);
        assert!(call_math_method(&mut ctx, "hypot", vec![pinf, JsValue::nan()]).is_positive_infinity());
        assert!(call_math_method(&mut ctx, "hypot", vec![]).is_positive_zero());
        assert_eq!(call_math_method(&mut ctx, "hypot", vec![num(3.0), num(4.0)]).as_double(), 5.0);
    }

    #[test]
    fn test_math_integer_helpers() {
        let mut ctx = new_context();
        let r = call_math_method(&mut ctx, "imul", vec![num(4294967295.0), num(5.0)]);
        assert_eq!(r.as_double(), -5.0);
        assert_eq!(call_math_method(&mut ctx, "clz32", vec![num(0.0)]).as_double(), 32.0);
        assert_eq!(call_math_method(&mut ctx, "clz32", vec![num(1.0)]).as_double(), 31.0);
        assert_eq!(call_math_method(&mut ctx, "clz32", vec![num(-1.0)]).as_double(), 0.0);
    }

    #[test]
    fn test_math_sign() {
        let mut ctx = new_context();
        assert_eq!(call_math_method(&mut ctx, "sign", vec![num(42.0)]).as_double(), 1.0);
        assert_eq!(call_math_method(&mut ctx, "sign", vec![num(-42.0)]).as_double(), -1.0);
        assert!(call_math_method(&mut ctx, "sign", vec![num(-0.0)]).is_negative_zero());
    }

    #[test]
    fn test_math_random() {
        let mut ctx = new_context();
        let mut sum = 0.0;
        let draws = 20_000;
        for _ in 0..draws {
            let r = call_math_method(&mut ctx, "random", vec![]).as_double();
            assert!((0.0..1.0).contains(&r), "Math.random() returned {}", r);
            sum += r;
        }
        let mean = sum / draws as f64;
        assert!((mean - 0.5).abs() < 0.05, "mean of draws was {}", mean);
    }

    #[test]
    fn test_math_random_ignores_arguments() {
        let mut ctx = new_context();
        let log: CoercionLog = Rc::new(RefCell::new(Vec::new()));
        let arg = tracked_value(&log, "a", Ok(num(1.0)));
        let r = call_math_method(&mut ctx, "random", vec![arg]).as_double();
        assert!((0.0..1.0).contains(&r));
        assert!(log.borrow().is_empty());
    }
}

// ============================================================================
// Coercion order and failure propagation
// ============================================================================

mod coercion_tests {
    use super::*;

    #[test]
    fn test_max_coerces_every_argument_before_deciding() {
        let mut ctx = new_context();
        let log: CoercionLog = Rc::new(RefCell::new(Vec::new()));
        let args = vec![
            tracked_value(&log, "a", Ok(JsValue::nan())),
            tracked_value(&log, "b", Ok(num(1.0))),
            tracked_value(&log, "c", Ok(num(2.0))),
        ];
        assert!(call_math_method(&mut ctx, "max", args).is_nan());
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_hypot_still_coerces_after_infinity() {
        let mut ctx = new_context();
        let log: CoercionLog = Rc::new(RefCell::new(Vec::new()));
        let args = vec![
            JsValue::from(JsNumber::POSITIVE_INFINITY),
            tracked_value(&log, "b", Ok(JsValue::nan())),
        ];
        assert!(call_math_method(&mut ctx, "hypot", args).is_positive_infinity());
        assert_eq!(*log.borrow(), vec!["b"]);
    }

    #[test]
    fn test_failure_stops_remaining_coercions() {
        let mut ctx = new_context();
        let log: CoercionLog = Rc::new(RefCell::new(Vec::new()));
        let args = vec![
            tracked_value(&log, "a", Ok(num(1.0))),
            tracked_value(&log, "b", Err(thrown("boom"))),
            tracked_value(&log, "c", Ok(num(2.0))),
        ];
        assert_eq!(try_call_math_method(&mut ctx, "min", args), Err(thrown("boom")));
        assert_eq!(*log.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_binary_operations_coerce_left_to_right() {
        for method in ["pow", "atan2", "imul"].iter() {
            let mut ctx = new_context();
            let log: CoercionLog = Rc::new(RefCell::new(Vec::new()));
            let args = vec![
                tracked_value(&log, "first", Ok(num(2.0))),
                tracked_value(&log, "second", Ok(num(3.0))),
            ];
            try_call_math_method(&mut ctx, method, args).unwrap();
            assert_eq!(*log.borrow(), vec!["first", "second"], "Math.{}", method);
        }
    }

    #[test]
    fn test_binary_operation_failure_skips_second_argument() {
        let mut ctx = new_context();
        let log: CoercionLog = Rc::new(RefCell::new(Vec::new()));
        let args = vec![
            tracked_value(&log, "base", Err(thrown("bad base"))),
            tracked_value(&log, "exponent", Ok(num(0.0))),
        ];
        assert_eq!(try_call_math_method(&mut ctx, "pow", args), Err(thrown("bad base")));
        assert_eq!(*log.borrow(), vec!["base"]);
    }

    #[test]
    fn test_non_primitive_value_of_falls_back_to_to_string() {
        let mut ctx = new_context();
        let o = new_ordinary_object(None);
        {
            let mut o = (*o).borrow_mut();
            let o = o.as_js_object_mut();
            o.define_native_function(
                None,
                "valueOf",
                BuiltInFn::plugin(|_ctx, this, _args| Ok(this)),
                0,
                PropertyAttributes::WRITABLE,
            );
            o.define_native_function(
                None,
                "toString",
                BuiltInFn::plugin(|_ctx, _this, _args| Ok(JsValue::from("-9"))),
                0,
                PropertyAttributes::WRITABLE,
            );
        }
        let r = call_math_method(&mut ctx, "abs", vec![JsValue::Object(o)]);
        assert_eq!(r.as_double(), 9.0);
    }

    #[test]
    fn test_object_without_conversion_methods_is_a_type_error() {
        let mut ctx = new_context();
        let o = new_ordinary_object(None);
        let result = try_call_math_method(&mut ctx, "sqrt", vec![JsValue::Object(o)]);
        assert!(matches!(result, Err(JErrorType::TypeError(_))));
    }

    #[test]
    fn test_value_of_may_reenter_math() {
        let mut ctx = new_context();
        let o = new_ordinary_object(None);
        (*o).borrow_mut().as_js_object_mut().define_native_function(
            None,
            "valueOf",
            BuiltInFn::plugin(|ctx, _this, _args| {
                try_call_math_method(ctx, "min", vec![num(-3.0), num(4.0)])
            }),
            0,
            PropertyAttributes::WRITABLE,
        );
        let r = call_math_method(&mut ctx, "abs", vec![JsValue::Object(o)]);
        assert_eq!(r.as_double(), 3.0);
    }

    #[test]
    fn test_deeply_nested_reentrancy() {
        fn nested(depth: u32) -> JsValue {
            let o = new_ordinary_object(None);
            (*o).borrow_mut().as_js_object_mut().define_native_function(
                None,
                "valueOf",
                BuiltInFn::plugin(move |ctx, _this, _args| {
                    if depth == 0 {
                        Ok(num(1.0))
                    } else {
                        try_call_math_method(ctx, "abs", vec![nested(depth - 1)])
                    }
                }),
                0,
                PropertyAttributes::WRITABLE,
            );
            JsValue::Object(o)
        }
        let mut ctx = new_context();
        let r = call_math_method(&mut ctx, "abs", vec![nested(500)]);
        assert_eq!(r.as_double(), 1.0);
    }
}

// ============================================================================
// Installation and attributes
// ============================================================================

mod install_tests {
    use super::*;

    #[test]
    fn test_math_members_in_registration_order() {
        let mut ctx = new_context();
        let math = math_object(&mut ctx);
        let keys = (*math).borrow().as_js_object().own_property_keys();
        let names: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(names.len(), 35 + 8 + 1);
        assert_eq!(&names[..5], &["abs", "random", "sqrt", "floor", "ceil"]);
        assert_eq!(names[34], "tanh");
        assert_eq!(names[35], "E");
        assert_eq!(names[42], "SQRT2");
        assert_eq!(keys[43], PropertyKey::from(SYMBOL_TO_STRING_TAG.clone()));
    }

    #[test]
    fn test_math_functions_are_writable_configurable_not_enumerable() {
        let mut ctx = new_context();
        let math = math_object(&mut ctx);
        let d = own_descriptor(&math, "abs");
        assert_eq!(
            d.attributes(),
            PropertyAttributes::WRITABLE | PropertyAttributes::CONFIGURABLE
        );
    }

    #[test]
    fn test_math_function_name_and_length() {
        let mut ctx = new_context();
        let math = math_object(&mut ctx);
        for (method, arity) in [("abs", 1.0), ("random", 0.0), ("max", 2.0), ("hypot", 2.0), ("imul", 2.0)].iter() {
            let f = match get(&mut ctx, &math, &PropertyKey::from(*method)).unwrap() {
                JsValue::Object(f) => f,
                other => panic!("Math.{} should be a function, got {:?}", method, other),
            };
            assert_eq!(get(&mut ctx, &f, &PropertyKey::from("length")), Ok(num(*arity)));
            assert_eq!(get(&mut ctx, &f, &PropertyKey::from("name")), Ok(JsValue::from(*method)));
            let d = own_descriptor(&f, "length");
            assert_eq!(d.attributes(), PropertyAttributes::CONFIGURABLE);
        }
    }

    #[test]
    fn test_math_constants_are_immutable() {
        let mut ctx = new_context();
        let math = math_object(&mut ctx);
        let d = own_descriptor(&math, "PI");
        assert_eq!(d.attributes(), PropertyAttributes::NONE);
        assert_eq!(set(&mut ctx, &math, PropertyKey::from("PI"), num(3.0)), Ok(false));
        assert!(!delete(&math, &PropertyKey::from("PI")));
        assert_eq!(get(&mut ctx, &math, &PropertyKey::from("PI")), Ok(num(PI)));
        assert_eq!(get(&mut ctx, &math, &PropertyKey::from("SQRT1_2")), Ok(num(std::f64::consts::FRAC_1_SQRT_2)));
    }

    #[test]
    fn test_math_to_string_tag() {
        let mut ctx = new_context();
        let math = math_object(&mut ctx);
        let d = own_descriptor(&math, SYMBOL_TO_STRING_TAG.clone());
        assert_eq!(d.attributes(), PropertyAttributes::CONFIGURABLE);
        match d {
            PropertyDescriptor::Data { value, .. } => assert_eq!(value, JsValue::from("Math")),
            _ => panic!("@@toStringTag should be a data property"),
        }
    }

    #[test]
    fn test_math_function_can_be_replaced_and_deleted() {
        let mut ctx = new_context();
        let math = math_object(&mut ctx);
        assert_eq!(set(&mut ctx, &math, PropertyKey::from("abs"), num(1.0)), Ok(true));
        assert_eq!(get(&mut ctx, &math, &PropertyKey::from("abs")), Ok(num(1.0)));
        assert!(delete(&math, &PropertyKey::from("floor")));
        assert_eq!(get(&mut ctx, &math, &PropertyKey::from("floor")), Ok(JsValue::Undefined));
        assert!(matches!(
            try_call_math_method(&mut ctx, "floor", vec![num(1.5)]),
            Err(JErrorType::TypeError(_))
        ));
    }

    #[test]
    fn test_realms_do_not_share_math_changes() {
        let mut first = new_context();
        let mut second = new_context();
        let math = math_object(&mut first);
        assert!(delete(&math, &PropertyKey::from("sqrt")));
        assert_eq!(call_math_method(&mut second, "sqrt", vec![num(9.0)]).as_double(), 3.0);
    }

    #[test]
    fn test_global_value_properties() {
        let mut ctx = new_context();
        let global = ctx.global_object();
        for name in ["NaN", "Infinity", "undefined"].iter() {
            assert_eq!(own_descriptor(&global, *name).attributes(), PropertyAttributes::NONE);
        }
        assert!(ctx.get_binding("NaN").unwrap().as_number().unwrap().is_nan());
        assert!(ctx.get_binding("Infinity").unwrap().as_number().unwrap().is_positive_infinity());
        assert_eq!(set(&mut ctx, &global, PropertyKey::from("undefined"), num(1.0)), Ok(false));
        assert_eq!(ctx.get_binding("undefined"), Ok(JsValue::Undefined));
        assert_eq!(
            own_descriptor(&global, "Math").attributes(),
            PropertyAttributes::WRITABLE | PropertyAttributes::CONFIGURABLE
        );
        assert_eq!(
            own_descriptor(&global, "isNaN").attributes(),
            PropertyAttributes::WRITABLE | PropertyAttributes::CONFIGURABLE
        );
    }

    #[test]
    fn test_global_is_nan_and_is_finite() {
        let mut ctx = new_context();
        let global = ctx.global_object();
        let is_nan = get(&mut ctx, &global, &PropertyKey::from("isNaN")).unwrap();
        let is_finite = get(&mut ctx, &global, &PropertyKey::from("isFinite")).unwrap();
        let r = call_function(&mut ctx, &is_nan, JsValue::Undefined, vec![JsValue::from("x")]);
        assert_eq!(r, Ok(JsValue::Boolean(true)));
        let r = call_function(&mut ctx, &is_finite, JsValue::Undefined, vec![num(5.0)]);
        assert_eq!(r, Ok(JsValue::Boolean(true)));
    }
}

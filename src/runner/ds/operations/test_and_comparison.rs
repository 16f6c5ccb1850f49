use std::rc::Rc;

use crate::runner::ds::value::{JsNumber, JsValue};

fn number_same_value(a: &JsNumber, b: &JsNumber) -> bool {
    if a.is_nan() && b.is_nan() {
        true
    } else if a.is_zero() && b.is_zero() {
        a.is_negative_zero() == b.is_negative_zero()
    } else {
        a.as_double() == b.as_double()
    }
}

/// SameValue: NaN equals NaN, and +0 differs from -0.
pub fn same_value(a: &JsValue, b: &JsValue) -> bool {
    match (a, b) {
        (JsValue::Number(na), JsValue::Number(nb)) => number_same_value(na, nb),
        (JsValue::Object(oa), JsValue::Object(ob)) => Rc::ptr_eq(oa, ob),
        _ => a == b,
    }
}

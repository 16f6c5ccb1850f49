use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::runner::ds::object::JsObjectType;
use crate::runner::ds::operations::type_conversion::{TYPE_STR_NULL, TYPE_STR_UNDEFINED};
use crate::runner::ds::symbol::SymbolData;

/// Largest integer `n` such that every integer in `[-n, n]` is exactly representable.
pub const MAX_SAFE_INTEGER: f64 = 9007199254740991.0;

#[derive(Clone)]
pub enum JsValue {
    Undefined,
    Null,
    Boolean(bool),
    String(String),
    Symbol(SymbolData),
    Number(JsNumber),
    Object(JsObjectType),
}
impl JsValue {
    pub fn nan() -> Self {
        JsValue::Number(JsNumber::NAN)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, JsValue::Undefined)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsValue::Object(_))
    }

    pub fn as_number(&self) -> Option<JsNumber> {
        match self {
            JsValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}
impl Display for JsValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => write!(f, "{}", TYPE_STR_UNDEFINED),
            JsValue::Null => write!(f, "{}", TYPE_STR_NULL),
            JsValue::Boolean(b) => write!(f, "bool({})", b),
            JsValue::String(s) => write!(f, "\"{}\"", s),
            JsValue::Symbol(s) => write!(f, "{}", s),
            JsValue::Number(n) => write!(f, "{}", n),
            JsValue::Object(o) => write!(f, "{}", (**o).borrow().as_js_object().to_string()),
        }
    }
}

impl fmt::Debug for JsValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => write!(f, "JsValue::Undefined"),
            JsValue::Null => write!(f, "JsValue::Null"),
            JsValue::Boolean(b) => write!(f, "JsValue::Boolean({})", b),
            JsValue::String(s) => write!(f, "JsValue::String({:?})", s),
            JsValue::Symbol(s) => write!(f, "JsValue::Symbol({})", s),
            JsValue::Number(n) => write!(f, "JsValue::Number({:?})", n),
            JsValue::Object(_) => write!(f, "JsValue::Object(...)"),
        }
    }
}

impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) => true,
            (JsValue::Null, JsValue::Null) => true,
            (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Number(a), JsValue::Number(b)) => a == b,
            (JsValue::Object(a), JsValue::Object(b)) => Rc::ptr_eq(a, b),
            (JsValue::Symbol(a), JsValue::Symbol(b)) => a == b,
            _ => false,
        }
    }
}

impl From<JsNumber> for JsValue {
    fn from(n: JsNumber) -> Self {
        JsValue::Number(n)
    }
}

impl From<f64> for JsValue {
    fn from(n: f64) -> Self {
        JsValue::Number(JsNumber::new(n))
    }
}

impl From<bool> for JsValue {
    fn from(b: bool) -> Self {
        JsValue::Boolean(b)
    }
}

impl From<&str> for JsValue {
    fn from(s: &str) -> Self {
        JsValue::String(s.to_string())
    }
}

/// An IEEE-754 double as the language sees it. The sign of zero is significant
/// and is never normalised away by this type; `==` is still IEEE equality, so use
/// [`same_value`](crate::runner::ds::operations::test_and_comparison::same_value)
/// or the predicates below when the distinction matters.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct JsNumber(f64);

impl JsNumber {
    pub const NAN: JsNumber = JsNumber(f64::NAN);
    pub const POSITIVE_ZERO: JsNumber = JsNumber(0.0);
    pub const NEGATIVE_ZERO: JsNumber = JsNumber(-0.0);
    pub const POSITIVE_INFINITY: JsNumber = JsNumber(f64::INFINITY);
    pub const NEGATIVE_INFINITY: JsNumber = JsNumber(f64::NEG_INFINITY);

    pub const fn new(value: f64) -> Self {
        JsNumber(value)
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    pub fn is_positive_zero(&self) -> bool {
        self.0 == 0.0 && self.0.is_sign_positive()
    }

    pub fn is_negative_zero(&self) -> bool {
        self.0 == 0.0 && self.0.is_sign_negative()
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    pub fn is_positive_infinity(&self) -> bool {
        self.0 == f64::INFINITY
    }

    pub fn is_negative_infinity(&self) -> bool {
        self.0 == f64::NEG_INFINITY
    }

    pub fn is_infinity(&self) -> bool {
        self.0.is_infinite()
    }

    pub fn is_finite_number(&self) -> bool {
        self.0.is_finite()
    }

    pub fn is_integral_number(&self) -> bool {
        self.0.is_finite() && self.0.trunc() == self.0
    }

    pub fn as_double(&self) -> f64 {
        self.0
    }

    /// The integer value, when the number is integral and within the safe integer range.
    pub fn as_integer(&self) -> Option<i64> {
        if self.is_integral_number() && self.0.abs() <= MAX_SAFE_INTEGER {
            Some(self.0 as i64)
        } else {
            None
        }
    }
}

impl Display for JsNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            write!(f, "NaN")
        } else if self.is_positive_infinity() {
            write!(f, "Infinity")
        } else if self.is_negative_infinity() {
            write!(f, "-Infinity")
        } else if self.is_zero() {
            write!(f, "0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<f64> for JsNumber {
    fn from(value: f64) -> Self {
        JsNumber(value)
    }
}

impl From<f32> for JsNumber {
    fn from(value: f32) -> Self {
        JsNumber(value as f64)
    }
}

impl From<i32> for JsNumber {
    fn from(value: i32) -> Self {
        JsNumber(value as f64)
    }
}

impl From<u32> for JsNumber {
    fn from(value: u32) -> Self {
        JsNumber(value as f64)
    }
}

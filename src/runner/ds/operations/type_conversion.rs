use crate::runner::ds::error::JErrorType;
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::operations::object::{call_function, get_method};
use crate::runner::ds::symbol::SYMBOL_TO_PRIMITIVE;
use crate::runner::ds::value::{JsNumber, JsValue};
use crate::runner::plugin::types::EvalContext;

pub const TYPE_STR_UNDEFINED: &str = "undefined";
pub const TYPE_STR_NULL: &str = "null";

const TWO_POW_32: f64 = 4294967296.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PreferredType {
    Default,
    String,
    Number,
}
impl PreferredType {
    fn hint(&self) -> &'static str {
        match self {
            PreferredType::Default => "default",
            PreferredType::String => "string",
            PreferredType::Number => "number",
        }
    }
}

/// ToPrimitive. For objects this may run user code (`@@toPrimitive`, `valueOf`,
/// `toString`), and whatever that code throws is returned unchanged.
pub fn to_primitive(
    ctx: &mut EvalContext,
    v: &JsValue,
    preferred_type: PreferredType,
) -> Result<JsValue, JErrorType> {
    let o = match v {
        JsValue::Object(o) => o,
        _ => return Ok(v.clone()),
    };
    let exotic = get_method(ctx, o, &PropertyKey::Sym(SYMBOL_TO_PRIMITIVE.clone()))?;
    if let Some(exotic) = exotic {
        let result = call_function(
            ctx,
            &exotic,
            v.clone(),
            vec![JsValue::from(preferred_type.hint())],
        )?;
        if result.is_object() {
            return Err(JErrorType::TypeError(
                "Cannot convert object to primitive value".to_string(),
            ));
        }
        return Ok(result);
    }
    let method_names = match preferred_type {
        PreferredType::String => ["toString", "valueOf"],
        PreferredType::Default | PreferredType::Number => ["valueOf", "toString"],
    };
    for name in method_names.iter() {
        if let Some(method) = get_method(ctx, o, &PropertyKey::from(*name))? {
            let result = call_function(ctx, &method, v.clone(), Vec::new())?;
            if !result.is_object() {
                return Ok(result);
            }
        }
    }
    Err(JErrorType::TypeError(
        "Cannot convert object to primitive value".to_string(),
    ))
}

pub fn to_number(ctx: &mut EvalContext, v: &JsValue) -> Result<JsNumber, JErrorType> {
    match v {
        JsValue::Undefined => Ok(JsNumber::NAN),
        JsValue::Null => Ok(JsNumber::POSITIVE_ZERO),
        JsValue::Boolean(b) => Ok(JsNumber::new(if *b { 1.0 } else { 0.0 })),
        JsValue::String(s) => Ok(string_to_number(s)),
        JsValue::Symbol(s) => Err(JErrorType::TypeError(format!(
            "'{}' symbol cannot be converted to number",
            s
        ))),
        JsValue::Number(n) => Ok(*n),
        JsValue::Object(_) => {
            let pv = to_primitive(ctx, v, PreferredType::Number)?;
            to_number(ctx, &pv)
        }
    }
}

pub fn to_uint32(ctx: &mut EvalContext, v: &JsValue) -> Result<u32, JErrorType> {
    Ok(number_to_uint32(to_number(ctx, v)?))
}

pub fn number_to_uint32(n: JsNumber) -> u32 {
    if !n.is_finite_number() || n.is_zero() {
        return 0;
    }
    n.as_double().trunc().rem_euclid(TWO_POW_32) as u32
}

fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// StringToNumber over the StringNumericLiteral grammar.
pub fn string_to_number(s: &str) -> JsNumber {
    let trimmed = s.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return JsNumber::POSITIVE_ZERO;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return JsNumber::POSITIVE_INFINITY,
        "-Infinity" => return JsNumber::NEGATIVE_INFINITY,
        _ => {}
    }
    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_non_decimal(&trimmed[2..], radix);
    }
    if is_str_decimal_literal(trimmed) {
        trimmed
            .parse::<f64>()
            .map(JsNumber::from)
            .unwrap_or(JsNumber::NAN)
    } else {
        JsNumber::NAN
    }
}

fn parse_non_decimal(digits: &str, radix: u32) -> JsNumber {
    if digits.is_empty() {
        return JsNumber::NAN;
    }
    let mut value = 0f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * radix as f64 + d as f64,
            None => return JsNumber::NAN,
        }
    }
    JsNumber::from(value)
}

fn is_str_decimal_literal(s: &str) -> bool {
    let body = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
        Some(i) => (&body[..i], Some(&body[i + 1..])),
        None => (body, None),
    };
    let mut parts = mantissa.splitn(2, '.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next().unwrap_or("");
    let all_digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }
    match exponent {
        None => true,
        Some(e) => {
            let e = e.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(e);
            !e.is_empty() && all_digits(e)
        }
    }
}

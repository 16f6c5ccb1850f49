//! The numeric case tables behind the Math builtins.
//!
//! Every function here works on already-coerced numbers and has no side effects,
//! so the ordering of argument coercion is entirely the caller's concern. Inputs
//! outside a function's domain produce NaN, never an error.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::runner::ds::value::JsNumber;

const THREE_QUARTERS_PI: f64 = FRAC_PI_4 + FRAC_PI_2;

/// 2^32 rather than `u32::MAX`: dividing by `u32::MAX` maps the top draw to exactly 1.
const RANDOM_DIVISOR: f64 = 4294967296.0;

fn n(value: f64) -> JsNumber {
    JsNumber::new(value)
}

pub fn abs(x: JsNumber) -> JsNumber {
    if x.is_nan() {
        return JsNumber::NAN;
    }
    if x.is_negative_zero() {
        return JsNumber::POSITIVE_ZERO;
    }
    if x.is_negative_infinity() {
        return JsNumber::POSITIVE_INFINITY;
    }
    if x.as_double() < 0.0 {
        return n(-x.as_double());
    }
    x
}

pub fn sqrt(x: JsNumber) -> JsNumber {
    if x.is_nan() || x.is_zero() || x.is_positive_infinity() {
        return x;
    }
    if x.as_double() < 0.0 {
        return JsNumber::NAN;
    }
    n(x.as_double().sqrt())
}

pub fn floor(x: JsNumber) -> JsNumber {
    if x.is_nan() || x.is_zero() || x.is_infinity() {
        return x;
    }
    let d = x.as_double();
    if d < 1.0 && d > 0.0 {
        return JsNumber::POSITIVE_ZERO;
    }
    if x.is_integral_number() {
        return x;
    }
    n(d.floor())
}

pub fn ceil(x: JsNumber) -> JsNumber {
    if x.is_nan() || x.is_zero() || x.is_infinity() {
        return x;
    }
    let d = x.as_double();
    if d < 0.0 && d > -1.0 {
        return JsNumber::NEGATIVE_ZERO;
    }
    if x.is_integral_number() {
        return x;
    }
    n(d.ceil())
}

/// Ties go toward +∞: `round(2.5)` is 3, `round(-2.5)` is -2.
pub fn round(x: JsNumber) -> JsNumber {
    if x.is_nan() || x.is_infinity() || x.is_integral_number() {
        return x;
    }
    let d = x.as_double();
    if d < 0.5 && d > 0.0 {
        return JsNumber::POSITIVE_ZERO;
    }
    if d < 0.0 && d >= -0.5 {
        return JsNumber::NEGATIVE_ZERO;
    }
    let mut integer = d.ceil();
    if integer - 0.5 > d {
        integer -= 1.0;
    }
    n(integer)
}

/// Sub-unit magnitudes collapse to a zero of the input's sign; everything else
/// is handed to `floor` unchanged.
pub fn trunc(x: JsNumber) -> JsNumber {
    if x.is_nan() || x.is_zero() || x.is_infinity() {
        return x;
    }
    let d = x.as_double();
    if d < 1.0 && d > 0.0 {
        return JsNumber::POSITIVE_ZERO;
    }
    if d < 0.0 && d > -1.0 {
        return JsNumber::NEGATIVE_ZERO;
    }
    floor(x)
}

pub fn sign(x: JsNumber) -> JsNumber {
    if x.is_nan() || x.is_zero() {
        return x;
    }
    if x.as_double() < 0.0 {
        n(-1.0)
    } else {
        n(1.0)
    }
}

/// Greatest of `values`; -∞ when empty. Any NaN wins, and +0 beats -0.
pub fn max(values: &[JsNumber]) -> JsNumber {
    let mut highest = JsNumber::NEGATIVE_INFINITY;
    for number in values {
        if number.is_nan() {
            return JsNumber::NAN;
        }
        if (number.is_positive_zero() && highest.is_negative_zero())
            || number.as_double() > highest.as_double()
        {
            highest = *number;
        }
    }
    highest
}

/// Least of `values`; +∞ when empty. Any NaN wins, and -0 beats +0.
pub fn min(values: &[JsNumber]) -> JsNumber {
    let mut lowest = JsNumber::POSITIVE_INFINITY;
    for number in values {
        if number.is_nan() {
            return JsNumber::NAN;
        }
        if (number.is_negative_zero() && lowest.is_positive_zero())
            || number.as_double() < lowest.as_double()
        {
            lowest = *number;
        }
    }
    lowest
}

fn is_odd_integral_number(x: JsNumber) -> bool {
    x.as_integer().map_or(false, |i| i % 2 != 0)
}

/// Number::exponentiate.
pub fn exponentiate(base: JsNumber, exponent: JsNumber) -> JsNumber {
    if exponent.is_nan() {
        return JsNumber::NAN;
    }
    if exponent.is_zero() {
        return n(1.0);
    }
    if base.is_nan() {
        return JsNumber::NAN;
    }
    let exponent_positive = exponent.as_double() > 0.0;
    if base.is_positive_infinity() {
        return if exponent_positive {
            JsNumber::POSITIVE_INFINITY
        } else {
            JsNumber::POSITIVE_ZERO
        };
    }
    if base.is_negative_infinity() {
        let odd = is_odd_integral_number(exponent);
        return match (exponent_positive, odd) {
            (true, true) => JsNumber::NEGATIVE_INFINITY,
            (true, false) => JsNumber::POSITIVE_INFINITY,
            (false, true) => JsNumber::NEGATIVE_ZERO,
            (false, false) => JsNumber::POSITIVE_ZERO,
        };
    }
    if base.is_positive_zero() {
        return if exponent_positive {
            JsNumber::POSITIVE_ZERO
        } else {
            JsNumber::POSITIVE_INFINITY
        };
    }
    if base.is_negative_zero() {
        let odd = is_odd_integral_number(exponent);
        return match (exponent_positive, odd) {
            (true, true) => JsNumber::NEGATIVE_ZERO,
            (true, false) => JsNumber::POSITIVE_ZERO,
            (false, true) => JsNumber::NEGATIVE_INFINITY,
            (false, false) => JsNumber::POSITIVE_INFINITY,
        };
    }

    assert!(
        base.is_finite_number() && !base.is_zero(),
        "exponentiate: base {:?} should be finite and non-zero here",
        base
    );

    if exponent.is_infinity() {
        let absolute_base = base.as_double().abs();
        let magnitude_grows = exponent.is_positive_infinity();
        return if absolute_base == 1.0 {
            JsNumber::NAN
        } else if (absolute_base > 1.0) == magnitude_grows {
            JsNumber::POSITIVE_INFINITY
        } else {
            JsNumber::POSITIVE_ZERO
        };
    }

    assert!(
        exponent.is_finite_number() && !exponent.is_zero(),
        "exponentiate: exponent {:?} should be finite and non-zero here",
        exponent
    );

    if base.as_double() < 0.0 && !exponent.is_integral_number() {
        return JsNumber::NAN;
    }
    n(base.as_double().powf(exponent.as_double()))
}

pub fn atan2(y: JsNumber, x: JsNumber) -> JsNumber {
    if y.is_nan() || x.is_nan() {
        return JsNumber::NAN;
    }
    if y.is_positive_infinity() {
        return if x.is_positive_infinity() {
            n(FRAC_PI_4)
        } else if x.is_negative_infinity() {
            n(THREE_QUARTERS_PI)
        } else {
            n(FRAC_PI_2)
        };
    }
    if y.is_negative_infinity() {
        return if x.is_positive_infinity() {
            n(-FRAC_PI_4)
        } else if x.is_negative_infinity() {
            n(-THREE_QUARTERS_PI)
        } else {
            n(-FRAC_PI_2)
        };
    }
    if y.is_positive_zero() {
        return if x.as_double() > 0.0 || x.is_positive_zero() {
            JsNumber::POSITIVE_ZERO
        } else {
            n(PI)
        };
    }
    if y.is_negative_zero() {
        return if x.as_double() > 0.0 || x.is_positive_zero() {
            JsNumber::NEGATIVE_ZERO
        } else {
            n(-PI)
        };
    }

    assert!(
        y.is_finite_number() && !y.is_zero(),
        "atan2: y {:?} should be finite and non-zero here",
        y
    );

    if y.as_double() > 0.0 {
        if x.is_positive_infinity() {
            return JsNumber::POSITIVE_ZERO;
        } else if x.is_negative_infinity() {
            return n(PI);
        } else if x.is_zero() {
            return n(FRAC_PI_2);
        }
    }
    if y.as_double() < 0.0 {
        if x.is_positive_infinity() {
            return JsNumber::NEGATIVE_ZERO;
        } else if x.is_negative_infinity() {
            return n(-PI);
        } else if x.is_zero() {
            return n(-FRAC_PI_2);
        }
    }

    assert!(
        x.is_finite_number() && !x.is_zero(),
        "atan2: x {:?} should be finite and non-zero here",
        x
    );
    n(y.as_double().atan2(x.as_double()))
}

/// Square root of the sum of squares. An infinite operand wins even over NaN.
pub fn hypot(values: &[JsNumber]) -> JsNumber {
    if values.iter().any(|v| v.is_infinity()) {
        return JsNumber::POSITIVE_INFINITY;
    }
    if values.iter().any(|v| v.is_nan()) {
        return JsNumber::NAN;
    }
    if values.iter().all(|v| v.is_zero()) {
        return JsNumber::POSITIVE_ZERO;
    }
    let sum_of_squares: f64 = values.iter().map(|v| v.as_double() * v.as_double()).sum();
    n(sum_of_squares.sqrt())
}

pub fn imul(a: u32, b: u32) -> JsNumber {
    JsNumber::from(a.wrapping_mul(b) as i32)
}

pub fn clz32(x: u32) -> JsNumber {
    if x == 0 {
        return n(32.0);
    }
    JsNumber::from(x.leading_zeros())
}

pub fn fround(x: JsNumber) -> JsNumber {
    if x.is_nan() {
        return JsNumber::NAN;
    }
    JsNumber::from(x.as_double() as f32)
}

/// Maps one uniform `u32` draw onto `[0, 1)`.
pub fn random_from_u32(draw: u32) -> JsNumber {
    n(draw as f64 / RANDOM_DIVISOR)
}

pub fn log(x: JsNumber) -> JsNumber {
    if x.as_double() < 0.0 {
        return JsNumber::NAN;
    }
    n(x.as_double().ln())
}

pub fn log2(x: JsNumber) -> JsNumber {
    if x.as_double() < 0.0 {
        return JsNumber::NAN;
    }
    n(x.as_double().log2())
}

pub fn log10(x: JsNumber) -> JsNumber {
    if x.as_double() < 0.0 {
        return JsNumber::NAN;
    }
    n(x.as_double().log10())
}

pub fn log1p(x: JsNumber) -> JsNumber {
    if x.as_double() < -1.0 {
        return JsNumber::NAN;
    }
    n(x.as_double().ln_1p())
}

pub fn atanh(x: JsNumber) -> JsNumber {
    let d = x.as_double();
    if d > 1.0 || d < -1.0 {
        return JsNumber::NAN;
    }
    n(d.atanh())
}

pub fn sinh(x: JsNumber) -> JsNumber {
    if x.is_nan() {
        return JsNumber::NAN;
    }
    n(x.as_double().sinh())
}

pub fn cosh(x: JsNumber) -> JsNumber {
    if x.is_nan() {
        return JsNumber::NAN;
    }
    n(x.as_double().cosh())
}

pub fn tanh(x: JsNumber) -> JsNumber {
    if x.is_nan() {
        return JsNumber::NAN;
    }
    if x.is_positive_infinity() {
        return n(1.0);
    }
    if x.is_negative_infinity() {
        return n(-1.0);
    }
    n(x.as_double().tanh())
}

pub fn sin(x: JsNumber) -> JsNumber {
    if x.is_nan() || x.is_zero() {
        return x;
    }
    if x.is_infinity() {
        return JsNumber::NAN;
    }
    n(x.as_double().sin())
}

pub fn cos(x: JsNumber) -> JsNumber {
    if x.is_nan() || x.is_infinity() {
        return JsNumber::NAN;
    }
    if x.is_zero() {
        return n(1.0);
    }
    n(x.as_double().cos())
}

pub fn tan(x: JsNumber) -> JsNumber {
    if x.is_nan() || x.is_zero() {
        return x;
    }
    if x.is_infinity() {
        return JsNumber::NAN;
    }
    n(x.as_double().tan())
}

pub fn exp(x: JsNumber) -> JsNumber {
    if x.is_nan() || x.is_positive_infinity() {
        return x;
    }
    if x.is_zero() {
        return n(1.0);
    }
    if x.is_negative_infinity() {
        return JsNumber::POSITIVE_ZERO;
    }
    n(x.as_double().exp())
}

pub fn expm1(x: JsNumber) -> JsNumber {
    if x.is_nan() || x.is_zero() || x.is_positive_infinity() {
        return x;
    }
    if x.is_negative_infinity() {
        return n(-1.0);
    }
    n(x.as_double().exp_m1())
}

pub fn acos(x: JsNumber) -> JsNumber {
    let d = x.as_double();
    if x.is_nan() || d > 1.0 || d < -1.0 {
        return JsNumber::NAN;
    }
    if d == 1.0 {
        return JsNumber::POSITIVE_ZERO;
    }
    n(d.acos())
}

pub fn acosh(x: JsNumber) -> JsNumber {
    if x.is_nan() || x.is_positive_infinity() {
        return x;
    }
    let d = x.as_double();
    if d == 1.0 {
        return JsNumber::POSITIVE_ZERO;
    }
    if d < 1.0 {
        return JsNumber::NAN;
    }
    n(d.acosh())
}

pub fn asin(x: JsNumber) -> JsNumber {
    if x.is_nan() || x.is_zero() {
        return x;
    }
    let d = x.as_double();
    if d > 1.0 || d < -1.0 {
        return JsNumber::NAN;
    }
    n(d.asin())
}

pub fn asinh(x: JsNumber) -> JsNumber {
    if x.is_nan() || x.is_zero() || x.is_infinity() {
        return x;
    }
    n(x.as_double().asinh())
}

pub fn atan(x: JsNumber) -> JsNumber {
    if x.is_nan() || x.is_zero() {
        return x;
    }
    if x.is_positive_infinity() {
        return n(FRAC_PI_2);
    }
    if x.is_negative_infinity() {
        return n(-FRAC_PI_2);
    }
    n(x.as_double().atan())
}

pub fn cbrt(x: JsNumber) -> JsNumber {
    n(x.as_double().cbrt())
}

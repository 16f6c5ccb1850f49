use thiserror::Error;

use crate::runner::ds::value::JsValue;

/// A script-level failure. Coercion failures raised by user code travel as `Thrown`
/// and are propagated verbatim by every builtin.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JErrorType {
    #[error("Uncaught reference error: {0}.")]
    ReferenceError(String),
    #[error("Uncaught type error: {0}.")]
    TypeError(String),
    #[error("Uncaught range error: {0}.")]
    RangeError(String),
    #[error("Uncaught syntax error: {0}.")]
    SyntaxError(String),
    #[error("Uncaught {0}")]
    Thrown(JsValue),
}

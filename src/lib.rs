//! # just_builtins - native bindings and Math for a JavaScript runtime
//!
//! The layer through which host-implemented functions and accessor properties
//! are exposed to script code, plus a Math library that reproduces the
//! language's exact rules for NaN, signed zero and infinities.
//!
//! - Native functions and accessors installed through the object model's
//!   binding calls, with writable/enumerable/configurable attributes
//! - Realm-scoped built-in registry: every realm owns its own Math object
//! - Argument coercion that may run user code, in strict left-to-right order
//! - Pure numeric case tables, testable without any coercion plumbing
//!
//! ## Quick Start
//!
//! ```
//! use std::rc::Rc;
//! use just_builtins::runner::ds::object_property::PropertyKey;
//! use just_builtins::runner::ds::operations::object::{call_function, get};
//! use just_builtins::runner::ds::realm::CodeRealm;
//! use just_builtins::runner::ds::value::JsValue;
//! use just_builtins::runner::plugin::types::EvalContext;
//!
//! let realm = Rc::new(CodeRealm::new().unwrap());
//! let mut ctx = EvalContext::new(realm);
//!
//! let math = match ctx.get_binding("Math").unwrap() {
//!     JsValue::Object(o) => o,
//!     _ => unreachable!(),
//! };
//! let ceil = get(&mut ctx, &math, &PropertyKey::from("ceil")).unwrap();
//! let result = call_function(&mut ctx, &ceil, JsValue::Undefined, vec![JsValue::from(-0.5)]).unwrap();
//! assert!(result.as_number().unwrap().is_negative_zero());
//! ```
//!
//! ## Configuration
//!
//! ```
//! use just_builtins::runner::ds::realm::CodeRealm;
//! use just_builtins::runner::plugin::config::RuntimeConfig;
//!
//! let config = RuntimeConfig::parse("[builtins]\nmath = false\n").unwrap();
//! let realm = CodeRealm::with_config(&config).unwrap();
//! ```
//!
//! ## Architecture
//!
//! - **[`runner::ds`]** - Data structures (values, property descriptors, objects, realms)
//!   - **[`runner::ds::operations`]** - Abstract operations and the numeric case tables
//! - **[`runner::plugin`]** - Built-in definitions, registry, evaluation context, config
//! - **[`runner::std_lib`]** - Math and the global value properties

#[macro_use]
extern crate lazy_static;

pub mod runner;

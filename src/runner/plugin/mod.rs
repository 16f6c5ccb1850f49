//! Built-in definitions and the realm-scoped registry that installs them.
//!
//! Built-ins are declared as [`BuiltInObject`]s: an ordered list of methods,
//! data properties and accessors. A [`BuiltInRegistry`] collects them once and
//! installs them into each new realm through the object model's binding calls,
//! so every realm gets its own objects and no realm sees another's changes.
//!
//! ```
//! use std::rc::Rc;
//! use just_builtins::runner::ds::realm::CodeRealm;
//! use just_builtins::runner::plugin::registry::BuiltInRegistry;
//! use just_builtins::runner::plugin::types::{BuiltInFn, BuiltInObject, EvalContext};
//! use just_builtins::runner::ds::object_property::PropertyAttributes;
//! use just_builtins::runner::ds::value::JsValue;
//!
//! let mut registry = BuiltInRegistry::with_core().unwrap();
//! let utils = BuiltInObject::new("Utils").add_method_with_attributes(
//!     "answer",
//!     BuiltInFn::plugin(|_ctx, _this, _args| Ok(JsValue::from(42.0))),
//!     0,
//!     PropertyAttributes::WRITABLE | PropertyAttributes::CONFIGURABLE,
//! );
//! registry.register_object(utils).unwrap();
//!
//! let mut ctx = EvalContext::new(Rc::new(CodeRealm::with_registry(&registry)));
//! assert!(ctx.get_binding("Utils").unwrap().is_object());
//! ```

pub mod config;
pub mod registry;
pub mod types;

pub use config::RuntimeConfig;
pub use registry::{BuiltInRegistry, RegistryError};
pub use types::{BuiltInFn, BuiltInObject, EvalContext, NativeFn};

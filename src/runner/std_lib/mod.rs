//! Standard library built-in objects.
//!
//! This module contains the Math object and the value properties of the
//! global object.

pub mod core;
pub mod global;
pub mod math;

pub use self::core::register_core_builtins;

//! Data structures: values, property keys and descriptors, objects and realms.

pub mod error;
pub mod function_object;
pub mod native_accessor;
pub mod object;
pub mod object_property;
pub mod operations;
pub mod realm;
pub mod symbol;
pub mod value;

//! Core built-ins registration.
//!
//! This module provides the function to register all core built-in objects
//! with the BuiltInRegistry.

use crate::runner::plugin::registry::{BuiltInRegistry, RegistryError};

use super::global;
use super::math;

/// Register all core built-in objects with the registry.
pub fn register_core_builtins(registry: &mut BuiltInRegistry) -> Result<(), RegistryError> {
    global::register(registry)?;
    math::register(registry)?;
    Ok(())
}

//! Type resolution.
//!
//! Every mapped value gets a [`TypeDescriptor`] whose [`TypeMapping`] is
//! resolved from an explicit type name, the declared class, or the
//! collection nature.

mod descriptor;
mod mapping;
mod registry;
mod resolver;

pub use descriptor::TypeDescriptor;
pub use mapping::{BasicType, CollectionType, ComponentType, EntityType, TypeMapping};
pub use registry::TypeRegistry;
pub use resolver::TypeResolver;

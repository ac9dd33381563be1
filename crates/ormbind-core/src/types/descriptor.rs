//! Per-value type descriptors.

use super::TypeMapping;
use indexmap::IndexMap;

/// Everything known about the type of one mapped value.
///
/// Descriptors are only produced by [`TypeResolver`](super::TypeResolver), so
/// a descriptor always carries a resolved mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    explicit_type_name: Option<String>,
    java_type_name: String,
    type_parameters: IndexMap<String, String>,
    resolved_type_mapping: TypeMapping,
    to_one: bool,
}

impl TypeDescriptor {
    pub(crate) fn new(
        explicit_type_name: Option<String>,
        java_type_name: String,
        type_parameters: IndexMap<String, String>,
        resolved_type_mapping: TypeMapping,
    ) -> Self {
        let to_one = resolved_type_mapping.is_entity_type();
        Self {
            explicit_type_name,
            java_type_name,
            type_parameters,
            resolved_type_mapping,
            to_one,
        }
    }

    /// Type name given in the mapping, if any.
    pub fn explicit_type_name(&self) -> Option<&str> {
        self.explicit_type_name.as_deref()
    }

    /// Host-language class of the value.
    pub fn java_type_name(&self) -> &str {
        &self.java_type_name
    }

    /// Type parameters in declaration order.
    pub fn type_parameters(&self) -> &IndexMap<String, String> {
        &self.type_parameters
    }

    /// The resolved type handler.
    pub fn resolved_type_mapping(&self) -> &TypeMapping {
        &self.resolved_type_mapping
    }

    /// Whether the value is a reference to a single entity.
    pub fn is_to_one(&self) -> bool {
        self.to_one
    }
}

//! Type descriptor resolution.

use super::{CollectionType, ComponentType, EntityType, TypeDescriptor, TypeMapping, TypeRegistry};
use crate::binding::PluralAttributeNature;
use crate::error::{BindingError, Result};
use indexmap::IndexMap;

/// Turns declared type information into resolved [`TypeDescriptor`]s.
pub struct TypeResolver<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> TypeResolver<'a> {
    /// Create a resolver backed by a registry.
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Resolve a single-column value.
    ///
    /// An explicit type name must be registered. Without one, the declared
    /// class must map to a registered type.
    pub fn resolve_basic(
        &self,
        context: &str,
        explicit_type_name: Option<&str>,
        java_type_name: Option<&str>,
        type_parameters: &IndexMap<String, String>,
    ) -> Result<TypeDescriptor> {
        let basic = match (explicit_type_name, java_type_name) {
            (Some(type_name), _) => {
                self.registry
                    .lookup(type_name)
                    .ok_or_else(|| BindingError::UnknownType {
                        type_name: type_name.to_string(),
                        context: context.to_string(),
                    })?
            }
            (None, Some(class_name)) => self.registry.by_class(class_name).ok_or_else(|| {
                BindingError::UnresolvedType {
                    context: context.to_string(),
                    reason: format!("no type registered for class '{class_name}'"),
                }
            })?,
            (None, None) => {
                return Err(BindingError::UnresolvedType {
                    context: context.to_string(),
                    reason: "neither a type name nor a class was declared".to_string(),
                });
            }
        };

        let java_type_name = java_type_name.unwrap_or(basic.returned_class()).to_string();

        Ok(TypeDescriptor::new(
            explicit_type_name.map(str::to_string),
            java_type_name,
            type_parameters.clone(),
            TypeMapping::Basic(basic.clone()),
        ))
    }

    /// Resolve the type of a collection attribute.
    ///
    /// The collection mapping is derived from the nature and bound to `role`.
    pub fn resolve_collection(
        &self,
        role: &str,
        nature: PluralAttributeNature,
        explicit_type_name: Option<&str>,
        java_type_name: Option<&str>,
        type_parameters: &IndexMap<String, String>,
    ) -> Result<TypeDescriptor> {
        if let Some(type_name) = explicit_type_name {
            let known = [
                PluralAttributeNature::Bag,
                PluralAttributeNature::Set,
                PluralAttributeNature::List,
                PluralAttributeNature::Map,
            ]
            .iter()
            .any(|n| n.type_name() == type_name);

            if !known {
                return Err(BindingError::UnknownType {
                    type_name: type_name.to_string(),
                    context: role.to_string(),
                });
            }
            if type_name != nature.type_name() {
                return Err(BindingError::invalid(
                    role,
                    format!("collection type '{type_name}' declared on a {nature} mapping"),
                ));
            }
        }

        let java_type_name = match java_type_name {
            Some(class_name) if nature.accepts_class(class_name) => class_name,
            Some(class_name) => {
                return Err(BindingError::UnresolvedType {
                    context: role.to_string(),
                    reason: format!("class '{class_name}' cannot hold a {nature}"),
                });
            }
            None => nature.interface_class(),
        };

        Ok(TypeDescriptor::new(
            explicit_type_name.map(str::to_string),
            java_type_name.to_string(),
            type_parameters.clone(),
            TypeMapping::Collection(CollectionType::new(nature, role)),
        ))
    }

    /// Resolve an embedded value object.
    pub fn resolve_component(&self, role: &str, class_name: &str) -> TypeDescriptor {
        TypeDescriptor::new(
            None,
            class_name.to_string(),
            IndexMap::new(),
            TypeMapping::Component(ComponentType::new(class_name, role)),
        )
    }

    /// Resolve a reference to an entity.
    pub fn resolve_entity(&self, entity_name: &str) -> TypeDescriptor {
        TypeDescriptor::new(
            None,
            entity_name.to_string(),
            IndexMap::new(),
            TypeMapping::Entity(EntityType::new(entity_name)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relational::JdbcType;

    fn no_params() -> IndexMap<String, String> {
        IndexMap::new()
    }

    #[test]
    fn test_basic_from_class() {
        let registry = TypeRegistry::default();
        let resolver = TypeResolver::new(&registry);

        let descriptor = resolver
            .resolve_basic("Person.name", None, Some("java.lang.String"), &no_params())
            .unwrap();

        assert!(descriptor.explicit_type_name().is_none());
        assert_eq!(descriptor.java_type_name(), "java.lang.String");
        assert_eq!(
            descriptor.resolved_type_mapping().jdbc_type(),
            Some(JdbcType::Varchar)
        );
        assert!(!descriptor.is_to_one());
    }

    #[test]
    fn test_basic_from_explicit_name() {
        let registry = TypeRegistry::default();
        let resolver = TypeResolver::new(&registry);
        let mut params = IndexMap::new();
        params.insert("precision".to_string(), "10".to_string());

        let descriptor = resolver
            .resolve_basic("Order.total", Some("big_decimal"), None, &params)
            .unwrap();

        assert_eq!(descriptor.explicit_type_name(), Some("big_decimal"));
        assert_eq!(descriptor.java_type_name(), "java.math.BigDecimal");
        assert_eq!(descriptor.type_parameters().get("precision").map(String::as_str), Some("10"));
    }

    #[test]
    fn test_unknown_explicit_type() {
        let registry = TypeRegistry::default();
        let resolver = TypeResolver::new(&registry);

        let err = resolver
            .resolve_basic("Order.total", Some("money"), None, &no_params())
            .unwrap_err();
        assert!(
            matches!(err, BindingError::UnknownType { ref type_name, .. } if type_name == "money")
        );
    }

    #[test]
    fn test_unresolved_class() {
        let registry = TypeRegistry::default();
        let resolver = TypeResolver::new(&registry);

        let err = resolver
            .resolve_basic("Person.avatar", None, Some("com.example.Image"), &no_params())
            .unwrap_err();
        assert!(matches!(err, BindingError::UnresolvedType { .. }));

        let err = resolver
            .resolve_basic("Person.avatar", None, None, &no_params())
            .unwrap_err();
        assert!(matches!(err, BindingError::UnresolvedType { .. }));
    }

    #[test]
    fn test_collection_defaults_to_interface() {
        let registry = TypeRegistry::default();
        let resolver = TypeResolver::new(&registry);

        let descriptor = resolver
            .resolve_collection("Person.tags", PluralAttributeNature::Bag, None, None, &no_params())
            .unwrap();

        assert_eq!(descriptor.java_type_name(), "java.util.Collection");
        assert_eq!(descriptor.resolved_type_mapping().role(), Some("Person.tags"));
        assert!(descriptor.type_parameters().is_empty());
    }

    #[test]
    fn test_collection_class_must_fit_nature() {
        let registry = TypeRegistry::default();
        let resolver = TypeResolver::new(&registry);

        let err = resolver
            .resolve_collection(
                "Person.tags",
                PluralAttributeNature::Set,
                None,
                Some("java.util.List"),
                &no_params(),
            )
            .unwrap_err();
        assert!(matches!(err, BindingError::UnresolvedType { .. }));
    }

    #[test]
    fn test_collection_explicit_names() {
        let registry = TypeRegistry::default();
        let resolver = TypeResolver::new(&registry);

        assert!(resolver
            .resolve_collection("P.t", PluralAttributeNature::Set, Some("set"), None, &no_params())
            .is_ok());

        let err = resolver
            .resolve_collection("P.t", PluralAttributeNature::Set, Some("bag"), None, &no_params())
            .unwrap_err();
        assert!(matches!(err, BindingError::InvalidDescriptor { .. }));

        let err = resolver
            .resolve_collection("P.t", PluralAttributeNature::Set, Some("tree"), None, &no_params())
            .unwrap_err();
        assert!(matches!(err, BindingError::UnknownType { .. }));
    }

    #[test]
    fn test_entity_reference_is_to_one() {
        let registry = TypeRegistry::default();
        let resolver = TypeResolver::new(&registry);

        let descriptor = resolver.resolve_entity("Tag");
        assert!(descriptor.is_to_one());
        assert!(descriptor.resolved_type_mapping().is_entity_type());

        let component = resolver.resolve_component("Person.addresses", "Address");
        assert!(!component.is_to_one());
        assert!(component.resolved_type_mapping().is_component_type());
    }
}

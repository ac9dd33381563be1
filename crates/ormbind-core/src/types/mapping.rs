//! Resolved type mappings.

use crate::binding::PluralAttributeNature;
use crate::relational::JdbcType;

/// A single-column value type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicType {
    name: String,
    returned_class: String,
    jdbc_type: JdbcType,
}

impl BasicType {
    /// Create a basic type.
    pub fn new(
        name: impl Into<String>,
        returned_class: impl Into<String>,
        jdbc_type: JdbcType,
    ) -> Self {
        Self {
            name: name.into(),
            returned_class: returned_class.into(),
            jdbc_type,
        }
    }

    /// Registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class of the values this type produces.
    pub fn returned_class(&self) -> &str {
        &self.returned_class
    }

    /// Column type used for values of this type.
    pub fn jdbc_type(&self) -> JdbcType {
        self.jdbc_type
    }
}

/// Type of a collection attribute, bound to one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionType {
    nature: PluralAttributeNature,
    role: String,
}

impl CollectionType {
    /// Create a collection type for a role.
    pub fn new(nature: PluralAttributeNature, role: impl Into<String>) -> Self {
        Self {
            nature,
            role: role.into(),
        }
    }

    /// Bag, set, list or map.
    pub fn nature(&self) -> PluralAttributeNature {
        self.nature
    }

    /// `<owningEntityName>.<attributeName>`.
    pub fn role(&self) -> &str {
        &self.role
    }
}

/// Type of an embedded value object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentType {
    class_name: String,
    role: String,
}

impl ComponentType {
    /// Create a component type.
    pub fn new(class_name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            role: role.into(),
        }
    }

    /// The value object's class.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Path of the component within its owner.
    pub fn role(&self) -> &str {
        &self.role
    }
}

/// Type of a reference to another entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityType {
    entity_name: String,
}

impl EntityType {
    /// Create an entity reference type.
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
        }
    }

    /// The referenced entity.
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }
}

/// The type handler a value resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeMapping {
    /// Single-column value.
    Basic(BasicType),
    /// Collection attribute.
    Collection(CollectionType),
    /// Embedded value object.
    Component(ComponentType),
    /// Entity reference.
    Entity(EntityType),
}

impl TypeMapping {
    /// Display name of the mapping.
    pub fn name(&self) -> &str {
        match self {
            TypeMapping::Basic(basic) => basic.name(),
            TypeMapping::Collection(collection) => collection.nature().type_name(),
            TypeMapping::Component(_) => "component",
            TypeMapping::Entity(_) => "entity",
        }
    }

    /// Class of the values produced by this mapping.
    pub fn returned_class(&self) -> &str {
        match self {
            TypeMapping::Basic(basic) => basic.returned_class(),
            TypeMapping::Collection(collection) => collection.nature().interface_class(),
            TypeMapping::Component(component) => component.class_name(),
            TypeMapping::Entity(entity) => entity.entity_name(),
        }
    }

    /// Column type, for basic mappings.
    pub fn jdbc_type(&self) -> Option<JdbcType> {
        match self {
            TypeMapping::Basic(basic) => Some(basic.jdbc_type()),
            _ => None,
        }
    }

    /// Role of a collection or component mapping.
    pub fn role(&self) -> Option<&str> {
        match self {
            TypeMapping::Collection(collection) => Some(collection.role()),
            TypeMapping::Component(component) => Some(component.role()),
            _ => None,
        }
    }

    /// Collection view of this mapping.
    pub fn as_collection(&self) -> Option<&CollectionType> {
        match self {
            TypeMapping::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    /// Basic view of this mapping.
    pub fn as_basic(&self) -> Option<&BasicType> {
        match self {
            TypeMapping::Basic(basic) => Some(basic),
            _ => None,
        }
    }

    pub fn is_component_type(&self) -> bool {
        matches!(self, TypeMapping::Component(_))
    }

    pub fn is_collection_type(&self) -> bool {
        matches!(self, TypeMapping::Collection(_))
    }

    pub fn is_entity_type(&self) -> bool {
        matches!(self, TypeMapping::Entity(_))
    }
}

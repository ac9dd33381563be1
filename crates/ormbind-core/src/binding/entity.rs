//! Entity bindings.

use super::{AttributeBinding, PluralAttributeBinding, SingularAttributeBinding};
use crate::error::{BindingError, Result};
use crate::relational::TableId;
use indexmap::IndexMap;

/// Names the identifying attribute of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityIdentifier {
    attribute_name: String,
}

impl EntityIdentifier {
    pub(crate) fn new(attribute_name: impl Into<String>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
        }
    }

    /// Name of the identifier attribute.
    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }
}

/// Binding of one mapped entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityBinding {
    entity_name: String,
    primary_table: TableId,
    identifier: EntityIdentifier,
    attributes: IndexMap<String, AttributeBinding>,
}

impl EntityBinding {
    /// Create an entity binding holding only its identifier.
    pub(crate) fn new(
        entity_name: impl Into<String>,
        primary_table: TableId,
        identifier: SingularAttributeBinding,
    ) -> Self {
        let identifier_name = identifier.attribute_name().to_string();
        let mut attributes = IndexMap::new();
        attributes.insert(identifier_name.clone(), AttributeBinding::Singular(identifier));

        Self {
            entity_name: entity_name.into(),
            primary_table,
            identifier: EntityIdentifier::new(identifier_name),
            attributes,
        }
    }

    /// Entity name.
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Table holding the entity's rows.
    pub fn primary_table(&self) -> TableId {
        self.primary_table
    }

    /// The identifier.
    pub fn entity_identifier(&self) -> &EntityIdentifier {
        &self.identifier
    }

    /// Binding of the identifier attribute.
    pub fn identifier_attribute_binding(&self) -> &SingularAttributeBinding {
        self.attributes
            .get(self.identifier.attribute_name())
            .and_then(AttributeBinding::as_singular)
            .expect("identifier binding is registered when the entity binding is created")
    }

    /// Find an attribute binding by name.
    pub fn locate_attribute_binding(&self, name: &str) -> Option<&AttributeBinding> {
        self.attributes.get(name)
    }

    /// All attribute bindings, identifier first.
    pub fn attribute_bindings(&self) -> impl Iterator<Item = &AttributeBinding> {
        self.attributes.values()
    }

    /// Number of attribute bindings, identifier included.
    pub fn attribute_binding_count(&self) -> usize {
        self.attributes.len()
    }

    /// Collection attribute bindings.
    pub fn plural_attribute_bindings(&self) -> impl Iterator<Item = &PluralAttributeBinding> {
        self.attributes.values().filter_map(AttributeBinding::as_plural)
    }

    pub(crate) fn plural_attribute_bindings_mut(
        &mut self,
    ) -> impl Iterator<Item = &mut PluralAttributeBinding> {
        self.attributes.values_mut().filter_map(|binding| match binding {
            AttributeBinding::Plural(plural) => Some(plural),
            AttributeBinding::Singular(_) => None,
        })
    }

    pub(crate) fn add_attribute_binding(&mut self, binding: AttributeBinding) -> Result<()> {
        let name = binding.attribute_name().to_string();
        if self.attributes.contains_key(&name) {
            return Err(BindingError::DuplicateAttribute {
                entity: self.entity_name.clone(),
                attribute: name,
            });
        }
        self.attributes.insert(name, binding);
        Ok(())
    }
}

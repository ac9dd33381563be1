//! Published binding metadata.

use crate::binding::{EntityBinding, PluralAttributeBinding};
use crate::error::{BindingError, LookupKind, Result};
use crate::relational::{Column, ColumnId, Schema, Table, TableId};
use indexmap::IndexMap;

/// The immutable result of a successful build.
///
/// Owns the schema and every entity binding. Collection bindings live inside
/// their owning entity; the role index only points at them.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    schema: Schema,
    entities: IndexMap<String, EntityBinding>,
    collections: IndexMap<String, (String, String)>,
}

impl Metadata {
    pub(crate) fn new(
        schema: Schema,
        entities: IndexMap<String, EntityBinding>,
        collections: IndexMap<String, (String, String)>,
    ) -> Self {
        Self {
            schema,
            entities,
            collections,
        }
    }

    /// Get an entity binding by entity name.
    pub fn get_entity_binding(&self, entity_name: &str) -> Result<&EntityBinding> {
        self.entities
            .get(entity_name)
            .ok_or_else(|| BindingError::not_found(LookupKind::Entity, entity_name))
    }

    /// Get a collection binding by role.
    ///
    /// Returns the binding stored in the owning entity, not a copy.
    pub fn get_collection(&self, role: &str) -> Result<&PluralAttributeBinding> {
        let (entity_name, attribute_name) = self
            .collections
            .get(role)
            .ok_or_else(|| BindingError::not_found(LookupKind::Collection, role))?;

        self.get_entity_binding(entity_name)?
            .locate_attribute_binding(attribute_name)
            .and_then(|binding| binding.as_plural())
            .ok_or_else(|| BindingError::not_found(LookupKind::Attribute, role))
    }

    /// The relational model.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Get a table.
    pub fn table(&self, id: TableId) -> &Table {
        self.schema.table(id)
    }

    /// Get a column.
    pub fn column(&self, id: ColumnId) -> &Column {
        self.schema.column(id)
    }

    /// Entity bindings in source order.
    pub fn entity_bindings(&self) -> impl Iterator<Item = &EntityBinding> {
        self.entities.values()
    }

    /// Collection bindings in binding order.
    pub fn collection_bindings(&self) -> impl Iterator<Item = &PluralAttributeBinding> {
        self.collections
            .keys()
            .filter_map(move |role| self.get_collection(role).ok())
    }

    /// Every collection role.
    pub fn collection_roles(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{
        ElementSource, EntitySource, MetadataSources, PluralAttributeSource,
        SingularAttributeSource,
    };
    use crate::MetadataBuilder;

    fn metadata() -> Metadata {
        let sources = MetadataSources::new().with_entity(
            EntitySource::new("Person", SingularAttributeSource::new("id", "long")).with_attribute(
                PluralAttributeSource::bag("nicknames", ElementSource::basic("java.lang.String")),
            ),
        );
        MetadataBuilder::new(sources).build().unwrap()
    }

    #[test]
    fn test_lookups() {
        let metadata = metadata();

        let person = metadata.get_entity_binding("Person").unwrap();
        let collection = metadata.get_collection("Person.nicknames").unwrap();
        let stored = person
            .locate_attribute_binding("nicknames")
            .and_then(|b| b.as_plural())
            .unwrap();
        assert!(std::ptr::eq(collection, stored));

        assert_eq!(metadata.collection_roles().collect::<Vec<_>>(), vec!["Person.nicknames"]);
        assert_eq!(metadata.collection_bindings().count(), 1);
        assert_eq!(metadata.table(person.primary_table()).logical_name().text(), "Person");
    }

    #[test]
    fn test_not_found() {
        let metadata = metadata();

        let err = metadata.get_entity_binding("Nobody").unwrap_err();
        assert!(matches!(err, BindingError::NotFound { kind: LookupKind::Entity, .. }));

        let err = metadata.get_collection("Person.missing").unwrap_err();
        assert!(matches!(
            err,
            BindingError::NotFound { kind: LookupKind::Collection, ref name }
                if name == "Person.missing"
        ));
    }

    #[test]
    fn test_metadata_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Metadata>();
    }
}

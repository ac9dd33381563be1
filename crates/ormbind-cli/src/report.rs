//! Printable summaries of bound metadata.

use ormbind_core::relational::ColumnId;
use ormbind_core::{EntityBinding, ForeignKey, Metadata, PluralAttributeBinding};
use serde::Serialize;

/// One entity and its collections.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EntityReport {
    pub name: String,
    pub table: String,
    pub identifier: String,
    pub attributes: usize,
    pub collections: Vec<CollectionReport>,
}

/// One collection binding.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CollectionReport {
    pub role: String,
    pub nature: String,
    pub table: String,
    pub element: String,
    pub element_type: String,
    pub key_columns: Vec<String>,
    pub index_column: Option<String>,
    pub primary_key: Vec<String>,
    pub fetch_timing: String,
    pub lazy: bool,
    pub foreign_keys: Vec<ForeignKeyReport>,
}

/// One foreign key of a collection table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ForeignKeyReport {
    pub name: Option<String>,
    pub columns: Vec<String>,
    pub references: String,
    pub target_columns: Vec<String>,
    pub on_delete: String,
}

/// Summarize every entity.
pub fn build(metadata: &Metadata) -> Vec<EntityReport> {
    metadata
        .entity_bindings()
        .map(|entity| EntityReport::new(metadata, entity))
        .collect()
}

impl EntityReport {
    pub fn new(metadata: &Metadata, entity: &EntityBinding) -> Self {
        Self {
            name: entity.entity_name().to_string(),
            table: metadata.table(entity.primary_table()).logical_name().to_string(),
            identifier: entity.entity_identifier().attribute_name().to_string(),
            attributes: entity.attribute_binding_count(),
            collections: entity
                .plural_attribute_bindings()
                .map(|collection| CollectionReport::new(metadata, collection))
                .collect(),
        }
    }
}

impl CollectionReport {
    fn new(metadata: &Metadata, collection: &PluralAttributeBinding) -> Self {
        let table = metadata.table(collection.collection_table());
        let element = collection.plural_attribute_element_binding();

        Self {
            role: collection.role().to_string(),
            nature: collection.nature().to_string(),
            table: table.logical_name().to_string(),
            element: format!("{:?}", element.plural_attribute_element_nature()).to_lowercase(),
            element_type: element.type_descriptor().java_type_name().to_string(),
            key_columns: column_names(
                metadata,
                collection.plural_attribute_key_binding().foreign_key().source_columns(),
            ),
            index_column: collection
                .plural_attribute_index_binding()
                .and_then(|index| index.column())
                .map(|column| metadata.column(column).name().to_string()),
            primary_key: column_names(metadata, table.primary_key().columns()),
            fetch_timing: collection.fetch_timing().to_string(),
            lazy: collection.is_lazy(),
            foreign_keys: collection
                .foreign_keys()
                .map(|fk| ForeignKeyReport::new(metadata, fk))
                .collect(),
        }
    }
}

impl ForeignKeyReport {
    fn new(metadata: &Metadata, fk: &ForeignKey) -> Self {
        Self {
            name: fk.name().map(str::to_string),
            columns: column_names(metadata, fk.source_columns()),
            references: metadata.table(fk.target_table()).logical_name().to_string(),
            target_columns: column_names(metadata, fk.target_columns()),
            on_delete: format!("{:?}", fk.delete_rule()),
        }
    }
}

fn column_names(metadata: &Metadata, columns: &[ColumnId]) -> Vec<String> {
    columns
        .iter()
        .map(|column| metadata.column(*column).name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ormbind_core::{
        ElementSource, EntitySource, FetchTiming, KeySource, MetadataBuilder, MetadataSources,
        PluralAttributeSource, SingularAttributeSource,
    };
    use pretty_assertions::assert_eq;

    fn metadata() -> Metadata {
        let sources = MetadataSources::new().with_entity(
            EntitySource::new("org.example.Person", SingularAttributeSource::new("id", "long"))
                .with_attribute(
                    PluralAttributeSource::set(
                        "nicknames",
                        ElementSource::basic("java.lang.String").with_nullable(false),
                    )
                    .with_key(KeySource::column("pid"))
                    .with_fetch_timing(FetchTiming::ExtraDelayed),
                ),
        );
        MetadataBuilder::new(sources).build().unwrap()
    }

    #[test]
    fn test_collection_report() {
        let reports = build(&metadata());
        assert_eq!(reports.len(), 1);

        let person = &reports[0];
        assert_eq!(person.table, "Person");
        assert_eq!(person.identifier, "id");
        assert_eq!(person.attributes, 2);

        let nicknames = &person.collections[0];
        assert_eq!(nicknames.role, "org.example.Person.nicknames");
        assert_eq!(nicknames.table, "Person_nicknames");
        assert_eq!(nicknames.element, "basic");
        assert_eq!(nicknames.key_columns, vec!["pid"]);
        assert_eq!(nicknames.primary_key, vec!["pid", "elt"]);
        assert_eq!(nicknames.index_column, None);
        assert!(nicknames.lazy);
        assert_eq!(nicknames.foreign_keys.len(), 1);
        assert_eq!(nicknames.foreign_keys[0].references, "Person");
        assert_eq!(nicknames.foreign_keys[0].name, None);
    }
}

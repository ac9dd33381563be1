//! Conventional names for tables, columns and constraints.

use crate::binding::PluralAttributeNature;
use crate::config::BinderConfig;

/// Produces names the mapping sources leave out.
pub trait NamingStrategy {
    /// Primary table of an entity.
    fn entity_table_name(&self, entity_name: &str) -> String;

    /// Column of a singular attribute.
    fn attribute_column_name(&self, attribute_name: &str) -> String;

    /// Table of a collection.
    fn collection_table_name(&self, owner_entity_name: &str, attribute_name: &str) -> String;

    /// Key column of a collection table referencing `target_column` of the owner.
    fn key_column_name(&self, owner_table: &str, target_column: &str) -> String;

    /// Column of a basic collection element.
    fn element_column_name(&self, attribute_name: &str) -> String;

    /// List index or map key column.
    fn index_column_name(&self, attribute_name: &str, nature: PluralAttributeNature) -> String;

    /// Column of a many-to-many element referencing `target_column` of `target_table`.
    fn many_to_many_column_name(&self, target_table: &str, target_column: &str) -> String;

    /// Column of a many-to-many element whose target is the owning entity.
    ///
    /// The key column already carries the owner table's name, so the element
    /// column is named after the collection attribute instead.
    fn self_reference_column_name(&self, attribute_name: &str, target_column: &str) -> String {
        format!("{attribute_name}_{target_column}")
    }

    /// Name of a foreign-key constraint.
    fn foreign_key_name(&self, source_table: &str, source_columns: &[&str]) -> String;
}

/// Unqualified part of a dotted class name.
pub fn unqualify(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// The naming conventions used when none are supplied.
#[derive(Debug, Clone)]
pub struct DefaultNamingStrategy {
    element_column: String,
    foreign_key_prefix: String,
}

impl DefaultNamingStrategy {
    /// Create from binder settings.
    pub fn new(config: &BinderConfig) -> Self {
        Self {
            element_column: config.element_column.clone(),
            foreign_key_prefix: config.foreign_key_prefix.clone(),
        }
    }
}

impl Default for DefaultNamingStrategy {
    fn default() -> Self {
        Self::new(&BinderConfig::default())
    }
}

impl NamingStrategy for DefaultNamingStrategy {
    fn entity_table_name(&self, entity_name: &str) -> String {
        unqualify(entity_name).to_string()
    }

    fn attribute_column_name(&self, attribute_name: &str) -> String {
        attribute_name.to_string()
    }

    fn collection_table_name(&self, owner_entity_name: &str, attribute_name: &str) -> String {
        format!("{}_{}", unqualify(owner_entity_name), attribute_name)
    }

    fn key_column_name(&self, owner_table: &str, target_column: &str) -> String {
        format!("{owner_table}_{target_column}")
    }

    fn element_column_name(&self, _attribute_name: &str) -> String {
        self.element_column.clone()
    }

    fn index_column_name(&self, attribute_name: &str, nature: PluralAttributeNature) -> String {
        match nature {
            PluralAttributeNature::Map => format!("{attribute_name}_KEY"),
            _ => format!("{attribute_name}_ORDER"),
        }
    }

    fn many_to_many_column_name(&self, target_table: &str, target_column: &str) -> String {
        format!("{target_table}_{target_column}")
    }

    fn foreign_key_name(&self, source_table: &str, source_columns: &[&str]) -> String {
        format!(
            "{}_{}_{}",
            self.foreign_key_prefix,
            source_table,
            source_columns.join("_")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unqualify() {
        assert_eq!(
            unqualify("org.example.EntityWithBasicCollections"),
            "EntityWithBasicCollections"
        );
        assert_eq!(unqualify("Plain"), "Plain");
    }

    #[test]
    fn test_default_names() {
        let naming = DefaultNamingStrategy::default();

        assert_eq!(naming.entity_table_name("org.example.Person"), "Person");
        assert_eq!(
            naming.collection_table_name("org.example.Person", "nicknames"),
            "Person_nicknames"
        );
        assert_eq!(naming.key_column_name("Person", "id"), "Person_id");
        assert_eq!(naming.element_column_name("nicknames"), "elt");
        assert_eq!(
            naming.index_column_name("lines", PluralAttributeNature::List),
            "lines_ORDER"
        );
        assert_eq!(
            naming.index_column_name("prices", PluralAttributeNature::Map),
            "prices_KEY"
        );
        assert_eq!(naming.many_to_many_column_name("Tag", "id"), "Tag_id");
        assert_eq!(naming.self_reference_column_name("friends", "id"), "friends_id");
        assert_eq!(
            naming.foreign_key_name("Person_nicknames", &["Person_id"]),
            "FK_Person_nicknames_Person_id"
        );
    }

    #[test]
    fn test_configured_names() {
        let config = BinderConfig::new()
            .with_element_column("value")
            .with_foreign_key_prefix("fk");
        let naming = DefaultNamingStrategy::new(&config);

        assert_eq!(naming.element_column_name("anything"), "value");
        assert_eq!(naming.foreign_key_name("t", &["a", "b"]), "fk_t_a_b");
    }
}

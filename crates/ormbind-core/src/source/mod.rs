//! Mapping sources: the already-parsed descriptor tree the binder consumes.
//!
//! Sources are plain data. Defaults (column names, nullability, fetch timing)
//! are applied by the binder, not here.

mod attribute;
mod entity;
mod plural;

pub use attribute::{ColumnSource, SingularAttributeSource};
pub use entity::{AttributeSource, EntitySource};
pub use plural::{
    BasicElementSource, CompositeElementSource, ElementSource, IndexSource, KeySource,
    ManyToManyElementSource, PluralAttributeSource,
};

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// The complete set of entity sources for one build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataSources {
    /// Entities in declaration order.
    #[serde(default)]
    pub entities: Vec<EntitySource>,
}

impl MetadataSources {
    /// Create an empty source set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity.
    pub fn with_entity(mut self, entity: EntitySource) -> Self {
        self.entities.push(entity);
        self
    }

    /// Add an entity in place.
    pub fn add_entity(&mut self, entity: EntitySource) {
        self.entities.push(entity);
    }

    /// Read sources from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BindingError;

    #[test]
    fn test_from_json() {
        let json = r#"{
            "entities": [
                {
                    "name": "User",
                    "identifier": { "name": "id", "java_type": "long" },
                    "attributes": [
                        { "kind": "singular", "name": "email", "java_type": "java.lang.String", "unique": true }
                    ]
                }
            ]
        }"#;
        let sources = MetadataSources::from_json(json).unwrap();

        assert_eq!(sources.len(), 1);
        assert_eq!(sources.entities[0].singular_attributes().count(), 1);
    }

    #[test]
    fn test_from_invalid_json() {
        let err = MetadataSources::from_json("{ \"entities\": 3 }").unwrap_err();
        assert!(matches!(err, BindingError::Source(_)));
    }
}

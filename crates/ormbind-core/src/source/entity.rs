//! Entity sources.

use super::{PluralAttributeSource, SingularAttributeSource};
use serde::{Deserialize, Serialize};

/// Any attribute of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttributeSource {
    /// Single-valued attribute.
    Singular(SingularAttributeSource),
    /// Collection attribute.
    Plural(PluralAttributeSource),
}

impl AttributeSource {
    /// Attribute name.
    pub fn name(&self) -> &str {
        match self {
            AttributeSource::Singular(source) => &source.name,
            AttributeSource::Plural(source) => &source.name,
        }
    }
}

impl From<SingularAttributeSource> for AttributeSource {
    fn from(source: SingularAttributeSource) -> Self {
        AttributeSource::Singular(source)
    }
}

impl From<PluralAttributeSource> for AttributeSource {
    fn from(source: PluralAttributeSource) -> Self {
        AttributeSource::Plural(source)
    }
}

/// A mapped entity as handed over by the descriptor reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySource {
    /// Entity name, usually the fully qualified class name.
    pub name: String,
    /// Primary table; derived from the unqualified name when absent.
    #[serde(default)]
    pub table: Option<String>,
    /// Identifier attribute.
    pub identifier: SingularAttributeSource,
    /// All other attributes.
    #[serde(default)]
    pub attributes: Vec<AttributeSource>,
}

impl EntitySource {
    /// Create an entity with its identifier.
    pub fn new(name: impl Into<String>, identifier: SingularAttributeSource) -> Self {
        Self {
            name: name.into(),
            table: None,
            identifier,
            attributes: Vec::new(),
        }
    }

    /// Set the primary table.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, attribute: impl Into<AttributeSource>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// Singular attributes, identifier excluded.
    pub fn singular_attributes(&self) -> impl Iterator<Item = &SingularAttributeSource> {
        self.attributes.iter().filter_map(|a| match a {
            AttributeSource::Singular(source) => Some(source),
            AttributeSource::Plural(_) => None,
        })
    }

    /// Collection attributes.
    pub fn plural_attributes(&self) -> impl Iterator<Item = &PluralAttributeSource> {
        self.attributes.iter().filter_map(|a| match a {
            AttributeSource::Plural(source) => Some(source),
            AttributeSource::Singular(_) => None,
        })
    }

    /// All attribute names, identifier first.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.identifier.name.as_str())
            .chain(self.attributes.iter().map(AttributeSource::name))
    }
}

//! Collection sources.

use super::SingularAttributeSource;
use crate::binding::{FetchTiming, PluralAttributeNature};
use crate::relational::ReferentialAction;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The owning-side key of a collection table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySource {
    /// Key column names; derived from the referenced columns when empty.
    #[serde(default)]
    pub columns: Vec<String>,
    /// Owner attribute the key references instead of the identifier.
    #[serde(default)]
    pub property_ref: Option<String>,
    /// ON DELETE action.
    #[serde(default)]
    pub on_delete: ReferentialAction,
    /// ON UPDATE action.
    #[serde(default)]
    pub on_update: ReferentialAction,
}

impl KeySource {
    /// Key with a single explicit column.
    pub fn column(name: impl Into<String>) -> Self {
        Self {
            columns: vec![name.into()],
            ..Default::default()
        }
    }

    /// Reference a unique owner attribute instead of the identifier.
    pub fn with_property_ref(mut self, attribute: impl Into<String>) -> Self {
        self.property_ref = Some(attribute.into());
        self
    }

    /// Set the ON DELETE action.
    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = action;
        self
    }

    /// Set the ON UPDATE action.
    pub fn on_update(mut self, action: ReferentialAction) -> Self {
        self.on_update = action;
        self
    }
}

/// Element holding one basic value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicElementSource {
    /// Declared element class.
    #[serde(default)]
    pub java_type: Option<String>,
    /// Explicit element type name.
    #[serde(default)]
    pub type_name: Option<String>,
    /// Type parameters.
    #[serde(default)]
    pub type_parameters: IndexMap<String, String>,
    /// Element column name.
    #[serde(default)]
    pub column: Option<String>,
    /// Element nullability; nullable when absent.
    #[serde(default)]
    pub nullable: Option<bool>,
}

/// Element holding an embedded value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeElementSource {
    /// Value object class.
    pub class: String,
    /// Component attributes, each bound to collection-table columns.
    pub attributes: Vec<SingularAttributeSource>,
}

/// Element referencing another entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManyToManyElementSource {
    /// Referenced entity name.
    pub entity: String,
    /// Element column names; derived from the target identifier when empty.
    #[serde(default)]
    pub columns: Vec<String>,
}

/// What a collection holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "nature", rename_all = "snake_case")]
pub enum ElementSource {
    /// Basic values.
    Basic(BasicElementSource),
    /// Embedded value objects.
    Composite(CompositeElementSource),
    /// Entity references.
    ManyToMany(ManyToManyElementSource),
}

impl ElementSource {
    /// Basic element of the given class.
    pub fn basic(java_type: impl Into<String>) -> Self {
        ElementSource::Basic(BasicElementSource {
            java_type: Some(java_type.into()),
            ..Default::default()
        })
    }

    /// Basic element of the given class with an explicit column.
    pub fn basic_column(java_type: impl Into<String>, column: impl Into<String>) -> Self {
        ElementSource::Basic(BasicElementSource {
            java_type: Some(java_type.into()),
            column: Some(column.into()),
            ..Default::default()
        })
    }

    /// Composite element.
    pub fn composite(
        class: impl Into<String>,
        attributes: impl IntoIterator<Item = SingularAttributeSource>,
    ) -> Self {
        ElementSource::Composite(CompositeElementSource {
            class: class.into(),
            attributes: attributes.into_iter().collect(),
        })
    }

    /// Many-to-many element referencing `entity`.
    pub fn many_to_many(entity: impl Into<String>) -> Self {
        ElementSource::ManyToMany(ManyToManyElementSource {
            entity: entity.into(),
            columns: Vec::new(),
        })
    }

    /// Set basic element nullability. No effect on other element kinds.
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        if let ElementSource::Basic(basic) = &mut self {
            basic.nullable = Some(nullable);
        }
        self
    }
}

/// List index or map key column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSource {
    /// Column name.
    #[serde(default)]
    pub column: Option<String>,
    /// Declared class of map keys.
    #[serde(default)]
    pub java_type: Option<String>,
    /// Explicit key type name.
    #[serde(default)]
    pub type_name: Option<String>,
    /// First list index value.
    #[serde(default)]
    pub base: u32,
}

impl IndexSource {
    /// Index with an explicit column name.
    pub fn column(name: impl Into<String>) -> Self {
        Self {
            column: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set the declared key class.
    pub fn with_java_type(mut self, java_type: impl Into<String>) -> Self {
        self.java_type = Some(java_type.into());
        self
    }

    /// Set the list base.
    pub fn with_base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }
}

/// A collection attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluralAttributeSource {
    /// Attribute name, unique within its entity.
    pub name: String,
    /// Bag, set, list or map.
    pub nature: PluralAttributeNature,
    /// Declared collection class.
    #[serde(default)]
    pub java_type: Option<String>,
    /// Explicit collection type name.
    #[serde(default)]
    pub type_name: Option<String>,
    /// Type parameters.
    #[serde(default)]
    pub type_parameters: IndexMap<String, String>,
    /// Collection table name; derived when absent.
    #[serde(default)]
    pub table: Option<String>,
    /// Key back to the owner.
    #[serde(default)]
    pub key: KeySource,
    /// Element mapping.
    pub element: ElementSource,
    /// Index or map key mapping.
    #[serde(default)]
    pub index: Option<IndexSource>,
    /// Fetch timing; the configured default when absent.
    #[serde(default)]
    pub fetch_timing: Option<FetchTiming>,
    /// Whether the other side maintains the association.
    #[serde(default)]
    pub inverse: bool,
}

impl PluralAttributeSource {
    /// Create a collection attribute.
    pub fn new(
        name: impl Into<String>,
        nature: PluralAttributeNature,
        element: ElementSource,
    ) -> Self {
        Self {
            name: name.into(),
            nature,
            java_type: None,
            type_name: None,
            type_parameters: IndexMap::new(),
            table: None,
            key: KeySource::default(),
            element,
            index: None,
            fetch_timing: None,
            inverse: false,
        }
    }

    /// Bag of `element`.
    pub fn bag(name: impl Into<String>, element: ElementSource) -> Self {
        Self::new(name, PluralAttributeNature::Bag, element)
    }

    /// Set of `element`.
    pub fn set(name: impl Into<String>, element: ElementSource) -> Self {
        Self::new(name, PluralAttributeNature::Set, element)
    }

    /// List of `element`.
    pub fn list(name: impl Into<String>, element: ElementSource) -> Self {
        Self::new(name, PluralAttributeNature::List, element)
    }

    /// Map to `element`.
    pub fn map(name: impl Into<String>, element: ElementSource) -> Self {
        Self::new(name, PluralAttributeNature::Map, element)
    }

    /// Set the declared collection class.
    pub fn with_java_type(mut self, java_type: impl Into<String>) -> Self {
        self.java_type = Some(java_type.into());
        self
    }

    /// Set the explicit collection type name.
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Set the collection table.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Set the key mapping.
    pub fn with_key(mut self, key: KeySource) -> Self {
        self.key = key;
        self
    }

    /// Set the index mapping.
    pub fn with_index(mut self, index: IndexSource) -> Self {
        self.index = Some(index);
        self
    }

    /// Set the fetch timing.
    pub fn with_fetch_timing(mut self, timing: FetchTiming) -> Self {
        self.fetch_timing = Some(timing);
        self
    }

    /// Mark the collection inverse.
    pub fn inverse(mut self) -> Self {
        self.inverse = true;
        self
    }
}

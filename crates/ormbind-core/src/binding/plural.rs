//! Collection bindings.

use super::{
    FetchTiming, PluralAttributeElementNature, PluralAttributeNature, RelationalValueBinding,
};
use crate::relational::{ColumnId, ForeignKey, TableId};
use crate::types::TypeDescriptor;
use std::ops::Range;

/// The owning-side key of a collection table.
#[derive(Debug, Clone, PartialEq)]
pub struct PluralAttributeKeyBinding {
    role: String,
    collection_table: TableId,
    foreign_key: ForeignKey,
    inverse: bool,
    referenced_attribute: String,
    type_descriptor: TypeDescriptor,
}

impl PluralAttributeKeyBinding {
    pub(crate) fn new(
        role: impl Into<String>,
        collection_table: TableId,
        foreign_key: ForeignKey,
        inverse: bool,
        referenced_attribute: impl Into<String>,
        type_descriptor: TypeDescriptor,
    ) -> Self {
        Self {
            role: role.into(),
            collection_table,
            foreign_key,
            inverse,
            referenced_attribute: referenced_attribute.into(),
            type_descriptor,
        }
    }

    /// Role of the collection this key belongs to.
    pub fn plural_attribute_role(&self) -> &str {
        &self.role
    }

    /// The collection table.
    pub fn collection_table(&self) -> TableId {
        self.collection_table
    }

    /// Key from the collection table to the owner.
    pub fn foreign_key(&self) -> &ForeignKey {
        &self.foreign_key
    }

    /// Whether the other side maintains the association.
    pub fn is_inverse(&self) -> bool {
        self.inverse
    }

    /// Owner attribute the key references.
    pub fn referenced_attribute_name(&self) -> &str {
        &self.referenced_attribute
    }

    /// Type of the key, equal to the referenced attribute's type.
    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.type_descriptor
    }

    pub(crate) fn foreign_key_mut(&mut self) -> &mut ForeignKey {
        &mut self.foreign_key
    }
}

/// One attribute of a composite element.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentAttribute {
    name: String,
    type_descriptor: TypeDescriptor,
    values: Range<usize>,
}

impl ComponentAttribute {
    pub(crate) fn new(
        name: impl Into<String>,
        type_descriptor: TypeDescriptor,
        values: Range<usize>,
    ) -> Self {
        Self {
            name: name.into(),
            type_descriptor,
            values,
        }
    }

    /// Attribute name within the component.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved type.
    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.type_descriptor
    }

    /// Positions of this attribute's values in the element's value list.
    pub fn value_range(&self) -> Range<usize> {
        self.values.clone()
    }
}

/// Element-nature specific parts of an element binding.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// Single basic value.
    Basic,
    /// Embedded value object.
    Composite(Vec<ComponentAttribute>),
    /// Reference to another entity.
    ManyToMany {
        /// Referenced entity.
        entity_name: String,
        /// Key from the collection table to the referenced entity's table.
        foreign_key: ForeignKey,
    },
}

/// What a collection row stores.
#[derive(Debug, Clone, PartialEq)]
pub struct PluralAttributeElementBinding {
    type_descriptor: TypeDescriptor,
    relational_value_bindings: Vec<RelationalValueBinding>,
    kind: ElementKind,
}

impl PluralAttributeElementBinding {
    pub(crate) fn new(
        type_descriptor: TypeDescriptor,
        relational_value_bindings: Vec<RelationalValueBinding>,
        kind: ElementKind,
    ) -> Self {
        Self {
            type_descriptor,
            relational_value_bindings,
            kind,
        }
    }

    /// Basic, composite or many-to-many.
    pub fn plural_attribute_element_nature(&self) -> PluralAttributeElementNature {
        match self.kind {
            ElementKind::Basic => PluralAttributeElementNature::Basic,
            ElementKind::Composite(_) => PluralAttributeElementNature::Composite,
            ElementKind::ManyToMany { .. } => PluralAttributeElementNature::ManyToMany,
        }
    }

    /// Element type.
    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.type_descriptor
    }

    /// Element values in column order.
    pub fn relational_value_bindings(&self) -> &[RelationalValueBinding] {
        &self.relational_value_bindings
    }

    /// Nature-specific details.
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Component attributes; empty unless the element is composite.
    pub fn component_attributes(&self) -> &[ComponentAttribute] {
        match &self.kind {
            ElementKind::Composite(attributes) => attributes,
            _ => &[],
        }
    }

    /// Key to the referenced entity of a many-to-many element.
    pub fn many_to_many_foreign_key(&self) -> Option<&ForeignKey> {
        match &self.kind {
            ElementKind::ManyToMany { foreign_key, .. } => Some(foreign_key),
            _ => None,
        }
    }

    pub(crate) fn many_to_many_foreign_key_mut(&mut self) -> Option<&mut ForeignKey> {
        match &mut self.kind {
            ElementKind::ManyToMany { foreign_key, .. } => Some(foreign_key),
            _ => None,
        }
    }
}

/// List index or map key.
#[derive(Debug, Clone, PartialEq)]
pub struct PluralAttributeIndexBinding {
    type_descriptor: TypeDescriptor,
    relational_value_binding: RelationalValueBinding,
    base: u32,
}

impl PluralAttributeIndexBinding {
    pub(crate) fn new(
        type_descriptor: TypeDescriptor,
        relational_value_binding: RelationalValueBinding,
        base: u32,
    ) -> Self {
        Self {
            type_descriptor,
            relational_value_binding,
            base,
        }
    }

    /// Index type.
    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.type_descriptor
    }

    /// Index column.
    pub fn relational_value_binding(&self) -> &RelationalValueBinding {
        &self.relational_value_binding
    }

    /// Index column handle.
    pub fn column(&self) -> Option<ColumnId> {
        self.relational_value_binding.value().as_column()
    }

    /// First list index value.
    pub fn base(&self) -> u32 {
        self.base
    }
}

/// Binding of a collection attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct PluralAttributeBinding {
    pub(crate) attribute_name: String,
    pub(crate) role: String,
    pub(crate) nature: PluralAttributeNature,
    pub(crate) owner_entity_name: String,
    pub(crate) type_descriptor: TypeDescriptor,
    pub(crate) key: PluralAttributeKeyBinding,
    pub(crate) element: PluralAttributeElementBinding,
    pub(crate) index: Option<PluralAttributeIndexBinding>,
    pub(crate) fetch_timing: FetchTiming,
}

impl PluralAttributeBinding {
    /// Attribute name.
    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    /// `<owningEntityName>.<attributeName>`.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Bag, set, list or map.
    pub fn nature(&self) -> PluralAttributeNature {
        self.nature
    }

    /// Name of the entity that contains this attribute.
    pub fn owner_entity_name(&self) -> &str {
        &self.owner_entity_name
    }

    /// Collection type.
    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.type_descriptor
    }

    /// The owning-side key.
    pub fn plural_attribute_key_binding(&self) -> &PluralAttributeKeyBinding {
        &self.key
    }

    /// The element.
    pub fn plural_attribute_element_binding(&self) -> &PluralAttributeElementBinding {
        &self.element
    }

    /// The index, for lists and maps.
    pub fn plural_attribute_index_binding(&self) -> Option<&PluralAttributeIndexBinding> {
        self.index.as_ref()
    }

    /// The collection table.
    pub fn collection_table(&self) -> TableId {
        self.key.collection_table()
    }

    /// When the contents are loaded.
    pub fn fetch_timing(&self) -> FetchTiming {
        self.fetch_timing
    }

    /// Whether loading is deferred.
    pub fn is_lazy(&self) -> bool {
        self.fetch_timing.is_lazy()
    }

    /// Every foreign key owned by this collection.
    pub fn foreign_keys(&self) -> impl Iterator<Item = &ForeignKey> {
        std::iter::once(self.key.foreign_key()).chain(self.element.many_to_many_foreign_key())
    }

    pub(crate) fn foreign_keys_mut(&mut self) -> impl Iterator<Item = &mut ForeignKey> {
        std::iter::once(self.key.foreign_key_mut())
            .chain(self.element.many_to_many_foreign_key_mut())
    }
}

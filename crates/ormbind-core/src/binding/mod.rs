//! The binding graph.
//!
//! Bindings connect entities and attributes to the relational model. They
//! refer to tables and columns by handle and to other entities by name; they
//! never copy relational objects.

mod attribute;
mod entity;
mod nature;
mod plural;

pub use attribute::{
    AttributeBinding, RelationalValueBinding, SingularAttributeBinding, ValueOwnership,
};
pub use entity::{EntityBinding, EntityIdentifier};
pub use nature::{FetchTiming, PluralAttributeElementNature, PluralAttributeNature};
pub use plural::{
    ComponentAttribute, ElementKind, PluralAttributeBinding, PluralAttributeElementBinding,
    PluralAttributeIndexBinding, PluralAttributeKeyBinding,
};

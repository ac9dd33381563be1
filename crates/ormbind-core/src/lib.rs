//! ORMBIND Core - mapping binder and relational binding graph.
//!
//! This crate resolves entity and collection mapping sources into a graph of
//! bindings over a relational model: tables, columns, primary keys and
//! foreign keys, with every attribute carrying a resolved type descriptor.

pub mod binder;
pub mod binding;
pub mod config;
pub mod error;
pub mod metadata;
pub mod relational;
pub mod source;
pub mod types;

pub use binder::{DefaultNamingStrategy, MetadataBuilder, NamingStrategy};
pub use binding::{
    AttributeBinding, EntityBinding, FetchTiming, PluralAttributeBinding,
    PluralAttributeElementBinding, PluralAttributeElementNature, PluralAttributeIndexBinding,
    PluralAttributeKeyBinding, PluralAttributeNature, SingularAttributeBinding,
};
pub use config::BinderConfig;
pub use error::{BindingError, LookupKind, Result};
pub use metadata::Metadata;
pub use relational::{ForeignKey, Identifier, JdbcType, ReferentialAction, Schema};
pub use source::{
    ColumnSource, ElementSource, EntitySource, IndexSource, KeySource, MetadataSources,
    PluralAttributeSource, SingularAttributeSource,
};
pub use types::{TypeDescriptor, TypeMapping, TypeRegistry};

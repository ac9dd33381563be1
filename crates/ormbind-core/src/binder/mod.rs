//! Binders that turn mapping sources into the binding graph.
//!
//! [`MetadataBuilder`] drives the whole pass. The individual binders are
//! public so custom assemblers can reuse them:
//!
//! - [`AttributeBinder`] binds identifiers and basic properties
//! - [`PluralAttributeBinder`] binds collections once every identifier exists
//! - [`ForeignKeyResolver`] validates key arity and propagates column types
//!
//! # Example
//!
//! ```
//! use ormbind_core::{ElementSource, EntitySource, MetadataBuilder, MetadataSources};
//! use ormbind_core::{PluralAttributeSource, SingularAttributeSource};
//!
//! let sources = MetadataSources::new().with_entity(
//!     EntitySource::new("Person", SingularAttributeSource::new("id", "long"))
//!         .with_attribute(PluralAttributeSource::bag(
//!             "nicknames",
//!             ElementSource::basic("java.lang.String"),
//!         )),
//! );
//!
//! let metadata = MetadataBuilder::new(sources).build()?;
//! let nicknames = metadata.get_collection("Person.nicknames")?;
//! let table = metadata.table(nicknames.collection_table());
//! assert_eq!(table.logical_name().text(), "Person_nicknames");
//! # Ok::<(), ormbind_core::BindingError>(())
//! ```

mod attribute;
mod builder;
mod foreign_key;
mod naming;
mod plural;

pub use attribute::AttributeBinder;
pub use builder::MetadataBuilder;
pub use foreign_key::{ForeignKeyResolver, KeyTarget};
pub use naming::{unqualify, DefaultNamingStrategy, NamingStrategy};
pub use plural::PluralAttributeBinder;

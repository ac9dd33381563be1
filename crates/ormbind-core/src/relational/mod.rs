//! Relational model: tables, columns, keys.
//!
//! Everything here is owned by a single [`Schema`]; bindings refer to tables
//! and columns through [`TableId`] and [`ColumnId`] handles so that two
//! references to the same table always resolve to the same object.

mod datatype;
mod foreign_key;
mod identifier;
mod schema;
mod table;

pub use datatype::JdbcType;
pub use foreign_key::{ForeignKey, ReferentialAction};
pub use identifier::Identifier;
pub use schema::Schema;
pub use table::{Column, ColumnId, DerivedValue, PrimaryKey, Table, TableId, UniqueKey, Value};

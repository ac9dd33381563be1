//! Tables, columns, and keys.

use super::{Identifier, JdbcType};
use indexmap::IndexMap;

/// Handle to a table in a [`Schema`](super::Schema).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(pub(crate) usize);

/// Handle to a column: its table plus its position in that table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnId {
    pub(crate) table: TableId,
    pub(crate) position: usize,
}

impl ColumnId {
    /// The table that owns the column.
    pub fn table(&self) -> TableId {
        self.table
    }

    /// Position of the column in its table, in insertion order.
    pub fn position(&self) -> usize {
        self.position
    }
}

/// A physical column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    id: ColumnId,
    name: Identifier,
    data_type: Option<JdbcType>,
    nullable: bool,
    unique: bool,
}

impl Column {
    fn new(id: ColumnId, name: Identifier) -> Self {
        Self {
            id,
            name,
            data_type: None,
            nullable: true,
            unique: false,
        }
    }

    /// Column handle.
    pub fn id(&self) -> ColumnId {
        self.id
    }

    /// Column name.
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    /// Data type, if one has been assigned yet.
    pub fn data_type(&self) -> Option<JdbcType> {
        self.data_type
    }

    /// Whether the column accepts NULL.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Whether the column alone is unique.
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    pub(crate) fn set_data_type(&mut self, data_type: JdbcType) {
        self.data_type = Some(data_type);
    }

    pub(crate) fn set_nullable(&mut self, nullable: bool) {
        self.nullable = nullable;
    }

    pub(crate) fn set_unique(&mut self, unique: bool) {
        self.unique = unique;
    }
}

/// A SQL expression evaluated in place of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedValue {
    /// The table the expression is evaluated against.
    pub table: TableId,
    /// The SQL fragment.
    pub expression: String,
}

/// Something an attribute can be mapped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A physical column.
    Column(ColumnId),
    /// A formula.
    Derived(DerivedValue),
}

impl Value {
    /// The table the value lives in.
    pub fn table(&self) -> TableId {
        match self {
            Value::Column(column) => column.table,
            Value::Derived(derived) => derived.table,
        }
    }

    /// The column, if this value is one.
    pub fn as_column(&self) -> Option<ColumnId> {
        match self {
            Value::Column(column) => Some(*column),
            Value::Derived(_) => None,
        }
    }
}

/// Primary key of a table. An empty key (span 0) means no key columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimaryKey {
    columns: Vec<ColumnId>,
}

impl PrimaryKey {
    /// Ordered key columns.
    pub fn columns(&self) -> &[ColumnId] {
        &self.columns
    }

    /// Number of key columns.
    pub fn column_span(&self) -> usize {
        self.columns.len()
    }

    /// Whether a column is part of the key.
    pub fn contains(&self, column: ColumnId) -> bool {
        self.columns.contains(&column)
    }
}

/// A uniqueness constraint over one or more columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueKey {
    columns: Vec<ColumnId>,
}

impl UniqueKey {
    /// Ordered constrained columns.
    pub fn columns(&self) -> &[ColumnId] {
        &self.columns
    }
}

/// A logical table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    id: TableId,
    logical_name: Identifier,
    columns: IndexMap<Identifier, Column>,
    primary_key: PrimaryKey,
    unique_keys: Vec<UniqueKey>,
}

impl Table {
    pub(crate) fn new(id: TableId, logical_name: Identifier) -> Self {
        Self {
            id,
            logical_name,
            columns: IndexMap::new(),
            primary_key: PrimaryKey::default(),
            unique_keys: Vec::new(),
        }
    }

    /// Table handle.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Table name.
    pub fn logical_name(&self) -> &Identifier {
        &self.logical_name
    }

    /// Columns in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Find a column by name.
    pub fn locate_column(&self, name: impl Into<Identifier>) -> Option<&Column> {
        self.columns.get(&name.into())
    }

    /// The primary key.
    pub fn primary_key(&self) -> &PrimaryKey {
        &self.primary_key
    }

    /// Unique constraints.
    pub fn unique_keys(&self) -> &[UniqueKey] {
        &self.unique_keys
    }

    pub(crate) fn locate_or_create_column(&mut self, name: Identifier) -> ColumnId {
        if let Some(position) = self.columns.get_index_of(&name) {
            return ColumnId {
                table: self.id,
                position,
            };
        }

        let id = ColumnId {
            table: self.id,
            position: self.columns.len(),
        };
        self.columns.insert(name.clone(), Column::new(id, name));
        id
    }

    pub(crate) fn column(&self, position: usize) -> Option<&Column> {
        self.columns.get_index(position).map(|(_, column)| column)
    }

    pub(crate) fn column_mut(&mut self, position: usize) -> Option<&mut Column> {
        self.columns.get_index_mut(position).map(|(_, column)| column)
    }

    pub(crate) fn set_primary_key(&mut self, columns: Vec<ColumnId>) {
        self.primary_key = PrimaryKey { columns };
    }

    pub(crate) fn add_unique_key(&mut self, columns: Vec<ColumnId>) {
        let key = UniqueKey { columns };
        if !self.unique_keys.contains(&key) {
            self.unique_keys.push(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_identity_by_name() {
        let mut table = Table::new(TableId(0), Identifier::new("Person"));
        let id = table.locate_or_create_column(Identifier::new("name"));
        let again = table.locate_or_create_column(Identifier::new("NAME"));
        let other = table.locate_or_create_column(Identifier::new("age"));

        assert_eq!(id, again);
        assert_ne!(id, other);
        assert_eq!(table.column_count(), 2);
        assert_eq!(other.position(), 1);
        assert!(table.locate_column("Name").is_some());
    }

    #[test]
    fn test_columns_keep_insertion_order() {
        let mut table = Table::new(TableId(3), Identifier::new("t"));
        for name in ["c", "a", "b"] {
            table.locate_or_create_column(Identifier::new(name));
        }
        let names: Vec<_> = table.columns().map(|c| c.name().text().to_string()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_new_column_defaults() {
        let mut table = Table::new(TableId(0), Identifier::new("t"));
        let id = table.locate_or_create_column(Identifier::new("c"));
        let column = table.column(id.position()).unwrap();

        assert!(column.data_type().is_none());
        assert!(column.is_nullable());
        assert!(!column.is_unique());
        assert_eq!(table.primary_key().column_span(), 0);
    }

    #[test]
    fn test_unique_keys_deduplicated() {
        let mut table = Table::new(TableId(0), Identifier::new("t"));
        let id = table.locate_or_create_column(Identifier::new("c"));
        table.add_unique_key(vec![id]);
        table.add_unique_key(vec![id]);
        assert_eq!(table.unique_keys().len(), 1);
    }

    #[test]
    fn test_value_table() {
        let column = ColumnId {
            table: TableId(2),
            position: 0,
        };
        assert_eq!(Value::Column(column).table(), TableId(2));
        let derived = Value::Derived(DerivedValue {
            table: TableId(5),
            expression: "upper(name)".into(),
        });
        assert_eq!(derived.table(), TableId(5));
        assert!(derived.as_column().is_none());
    }
}

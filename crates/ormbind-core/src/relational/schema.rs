//! Table and column registry.

use super::{Column, ColumnId, Identifier, Table, TableId};
use std::collections::HashMap;
use tracing::debug;

/// Registry of every table built during one binding pass.
///
/// Two references to the same normalized table name resolve to the same
/// [`TableId`], and columns are likewise unique per table. Handles are only
/// meaningful for the schema that issued them; passing a foreign handle panics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    tables: Vec<Table>,
    by_name: HashMap<Identifier, TableId>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the table with this name, creating it on first use.
    pub fn locate_or_create_table(&mut self, name: &Identifier) -> TableId {
        if let Some(id) = self.by_name.get(name) {
            return *id;
        }

        let id = TableId(self.tables.len());
        self.tables.push(Table::new(id, name.clone()));
        self.by_name.insert(name.clone(), id);
        debug!(table = %name, "Registered table");
        id
    }

    /// Find a table by name.
    pub fn locate_table(&self, name: impl Into<Identifier>) -> Option<TableId> {
        self.by_name.get(&name.into()).copied()
    }

    /// Get a table.
    pub fn table(&self, id: TableId) -> &Table {
        &self.tables[id.0]
    }

    /// All tables in creation order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    /// Number of tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Return the column with this name in `table`, creating it on first use.
    pub fn locate_or_create_column(&mut self, table: TableId, name: &Identifier) -> ColumnId {
        self.table_mut(table).locate_or_create_column(name.clone())
    }

    /// Get a column.
    pub fn column(&self, id: ColumnId) -> &Column {
        self.table(id.table)
            .column(id.position)
            .unwrap_or_else(|| panic!("column {id:?} does not belong to this schema"))
    }

    pub(crate) fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        self.table_mut(id.table)
            .column_mut(id.position)
            .unwrap_or_else(|| panic!("column {id:?} does not belong to this schema"))
    }

    pub(crate) fn set_primary_key(&mut self, table: TableId, columns: Vec<ColumnId>) {
        debug_assert!(columns.iter().all(|c| c.table == table));
        self.table_mut(table).set_primary_key(columns);
    }

    pub(crate) fn add_unique_key(&mut self, table: TableId, columns: Vec<ColumnId>) {
        if let [single] = columns.as_slice() {
            self.column_mut(*single).set_unique(true);
        }
        self.table_mut(table).add_unique_key(columns);
    }

    fn table_mut(&mut self, id: TableId) -> &mut Table {
        &mut self.tables[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relational::JdbcType;

    #[test]
    fn test_table_identity() {
        let mut schema = Schema::new();
        let a = schema.locate_or_create_table(&Identifier::new("Person"));
        let b = schema.locate_or_create_table(&Identifier::new("PERSON"));
        let c = schema.locate_or_create_table(&Identifier::new("`person`"));
        let d = schema.locate_or_create_table(&Identifier::new("`Person`"));

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_ne!(a, d);
        assert_eq!(schema.table_count(), 2);
        assert_eq!(schema.locate_table("person"), Some(a));
        assert_eq!(schema.locate_table("other"), None);
    }

    #[test]
    fn test_column_identity() {
        let mut schema = Schema::new();
        let table = schema.locate_or_create_table(&Identifier::new("Person"));
        let id = schema.locate_or_create_column(table, &Identifier::new("id"));
        let again = schema.locate_or_create_column(table, &Identifier::new("ID"));

        assert_eq!(id, again);
        assert_eq!(id.table(), table);
        assert_eq!(schema.column(id).name().text(), "id");
    }

    #[test]
    fn test_same_column_name_in_different_tables() {
        let mut schema = Schema::new();
        let t1 = schema.locate_or_create_table(&Identifier::new("a"));
        let t2 = schema.locate_or_create_table(&Identifier::new("b"));
        let c1 = schema.locate_or_create_column(t1, &Identifier::new("id"));
        let c2 = schema.locate_or_create_column(t2, &Identifier::new("id"));
        assert_ne!(c1, c2);
    }

    #[test]
    fn test_column_mutation_and_keys() {
        let mut schema = Schema::new();
        let table = schema.locate_or_create_table(&Identifier::new("Person"));
        let id = schema.locate_or_create_column(table, &Identifier::new("id"));
        let email = schema.locate_or_create_column(table, &Identifier::new("email"));

        schema.column_mut(id).set_data_type(JdbcType::BigInt);
        schema.set_primary_key(table, vec![id]);
        schema.add_unique_key(table, vec![email]);

        assert_eq!(schema.column(id).data_type(), Some(JdbcType::BigInt));
        assert_eq!(schema.table(table).primary_key().columns(), &[id]);
        assert!(schema.column(email).is_unique());
        assert_eq!(schema.table(table).unique_keys().len(), 1);
    }
}

//! Foreign keys.

use super::{ColumnId, TableId};
use serde::{Deserialize, Serialize};

/// Action taken on referencing rows when a referenced row changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferentialAction {
    /// Reject the change at the end of the statement.
    #[default]
    NoAction,
    /// Propagate the change.
    Cascade,
    /// Set referencing columns to NULL.
    SetNull,
    /// Set referencing columns to their defaults.
    SetDefault,
    /// Reject the change immediately.
    Restrict,
}

/// A resolved foreign key.
///
/// Source and target columns are positionally paired and always the same
/// length. The name stays `None` until the naming pass assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    name: Option<String>,
    source_table: TableId,
    source_columns: Vec<ColumnId>,
    target_table: TableId,
    target_columns: Vec<ColumnId>,
    delete_rule: ReferentialAction,
    update_rule: ReferentialAction,
}

impl ForeignKey {
    pub(crate) fn new(
        source_table: TableId,
        source_columns: Vec<ColumnId>,
        target_table: TableId,
        target_columns: Vec<ColumnId>,
    ) -> Self {
        debug_assert_eq!(source_columns.len(), target_columns.len());
        Self {
            name: None,
            source_table,
            source_columns,
            target_table,
            target_columns,
            delete_rule: ReferentialAction::default(),
            update_rule: ReferentialAction::default(),
        }
    }

    pub(crate) fn with_rules(
        mut self,
        delete_rule: ReferentialAction,
        update_rule: ReferentialAction,
    ) -> Self {
        self.delete_rule = delete_rule;
        self.update_rule = update_rule;
        self
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Constraint name, if assigned.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The referencing table.
    pub fn source_table(&self) -> TableId {
        self.source_table
    }

    /// The constrained columns; same as [`source_columns`](Self::source_columns).
    pub fn columns(&self) -> &[ColumnId] {
        &self.source_columns
    }

    /// The referencing columns.
    pub fn source_columns(&self) -> &[ColumnId] {
        &self.source_columns
    }

    /// The referenced table.
    pub fn target_table(&self) -> TableId {
        self.target_table
    }

    /// The referenced columns.
    pub fn target_columns(&self) -> &[ColumnId] {
        &self.target_columns
    }

    /// Number of column pairs.
    pub fn column_span(&self) -> usize {
        self.source_columns.len()
    }

    /// (source, target) column pairs.
    pub fn column_pairs(&self) -> impl Iterator<Item = (ColumnId, ColumnId)> + '_ {
        self.source_columns
            .iter()
            .copied()
            .zip(self.target_columns.iter().copied())
    }

    /// ON DELETE action.
    pub fn delete_rule(&self) -> ReferentialAction {
        self.delete_rule
    }

    /// ON UPDATE action.
    pub fn update_rule(&self) -> ReferentialAction {
        self.update_rule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(table: usize, position: usize) -> ColumnId {
        ColumnId {
            table: TableId(table),
            position,
        }
    }

    #[test]
    fn test_defaults() {
        let fk = ForeignKey::new(TableId(1), vec![col(1, 0)], TableId(0), vec![col(0, 0)]);

        assert!(fk.name().is_none());
        assert_eq!(fk.column_span(), 1);
        assert_eq!(fk.columns(), fk.source_columns());
        assert_eq!(fk.delete_rule(), ReferentialAction::NoAction);
        assert_eq!(fk.update_rule(), ReferentialAction::NoAction);
    }

    #[test]
    fn test_rules_and_name() {
        let mut fk = ForeignKey::new(TableId(1), vec![col(1, 0)], TableId(0), vec![col(0, 0)])
            .with_rules(ReferentialAction::Cascade, ReferentialAction::Restrict);
        fk.set_name("FK_child_parent");

        assert_eq!(fk.delete_rule(), ReferentialAction::Cascade);
        assert_eq!(fk.update_rule(), ReferentialAction::Restrict);
        assert_eq!(fk.name(), Some("FK_child_parent"));
    }

    #[test]
    fn test_column_pairs() {
        let fk = ForeignKey::new(
            TableId(1),
            vec![col(1, 0), col(1, 1)],
            TableId(0),
            vec![col(0, 2), col(0, 3)],
        );
        let pairs: Vec<_> = fk.column_pairs().collect();
        assert_eq!(pairs, vec![(col(1, 0), col(0, 2)), (col(1, 1), col(0, 3))]);
    }
}

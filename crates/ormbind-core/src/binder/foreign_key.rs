//! Foreign-key resolution.

use crate::binding::SingularAttributeBinding;
use crate::error::{BindingError, Result};
use crate::relational::{ColumnId, ForeignKey, ReferentialAction, Schema, TableId};
use tracing::debug;

/// The referenced side of a foreign key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTarget {
    /// Referenced table.
    pub table: TableId,
    /// Referenced columns in key order.
    pub columns: Vec<ColumnId>,
}

impl KeyTarget {
    /// Target the columns of an attribute of `entity_name`.
    ///
    /// Fails when the attribute maps to a formula or to nothing.
    pub fn from_attribute(
        context: &str,
        entity_name: &str,
        table: TableId,
        attribute: &SingularAttributeBinding,
    ) -> Result<Self> {
        let target_error = |reason: &str| BindingError::ForeignKeyTarget {
            context: context.to_string(),
            entity: entity_name.to_string(),
            attribute: attribute.attribute_name().to_string(),
            reason: reason.to_string(),
        };

        if attribute.relational_value_bindings().is_empty() {
            return Err(target_error("attribute maps no columns"));
        }
        if attribute.relational_value_bindings().iter().any(|b| b.is_derived()) {
            return Err(target_error("attribute is mapped to a formula"));
        }

        Ok(Self {
            table,
            columns: attribute.columns().collect(),
        })
    }
}

/// Builds validated foreign keys against one schema.
pub struct ForeignKeyResolver<'a> {
    schema: &'a mut Schema,
}

impl<'a> ForeignKeyResolver<'a> {
    /// Create a resolver.
    pub fn new(schema: &'a mut Schema) -> Self {
        Self { schema }
    }

    /// Build a foreign key from `source_columns` of `source_table` to `target`.
    ///
    /// Source columns without a data type take their target column's type.
    /// The key is left unnamed.
    pub fn resolve(
        &mut self,
        context: &str,
        source_table: TableId,
        source_columns: Vec<ColumnId>,
        target: &KeyTarget,
        on_delete: ReferentialAction,
        on_update: ReferentialAction,
    ) -> Result<ForeignKey> {
        if source_columns.len() != target.columns.len() {
            return Err(BindingError::ForeignKeyArityMismatch {
                context: context.to_string(),
                source_columns: source_columns.len(),
                target_columns: target.columns.len(),
            });
        }

        for (source, target_column) in source_columns.iter().zip(&target.columns) {
            let Some(expected) = self.schema.column(*target_column).data_type() else {
                continue;
            };
            let column = self.schema.column_mut(*source);
            match column.data_type() {
                None => column.set_data_type(expected),
                Some(actual) if actual == expected => {}
                Some(actual) => {
                    return Err(BindingError::ForeignKeyTypeMismatch {
                        context: context.to_string(),
                        column: column.name().to_string(),
                        expected,
                        actual,
                    });
                }
            }
        }

        debug!(
            context,
            source_table = %self.schema.table(source_table).logical_name(),
            target_table = %self.schema.table(target.table).logical_name(),
            span = source_columns.len(),
            "Resolved foreign key"
        );

        Ok(
            ForeignKey::new(source_table, source_columns, target.table, target.columns.clone())
                .with_rules(on_delete, on_update),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relational::{Identifier, JdbcType};

    struct Fixture {
        schema: Schema,
        owner: TableId,
        owner_id: ColumnId,
        child: TableId,
    }

    fn fixture() -> Fixture {
        let mut schema = Schema::new();
        let owner = schema.locate_or_create_table(&Identifier::new("Owner"));
        let owner_id = schema.locate_or_create_column(owner, &Identifier::new("id"));
        schema.column_mut(owner_id).set_data_type(JdbcType::BigInt);
        let child = schema.locate_or_create_table(&Identifier::new("Owner_items"));
        Fixture {
            schema,
            owner,
            owner_id,
            child,
        }
    }

    #[test]
    fn test_copies_target_type() {
        let mut f = fixture();
        let source = f.schema.locate_or_create_column(f.child, &Identifier::new("owner_id"));
        let target = KeyTarget {
            table: f.owner,
            columns: vec![f.owner_id],
        };

        let fk = ForeignKeyResolver::new(&mut f.schema)
            .resolve(
                "Owner.items",
                f.child,
                vec![source],
                &target,
                Default::default(),
                Default::default(),
            )
            .unwrap();

        assert_eq!(f.schema.column(source).data_type(), Some(JdbcType::BigInt));
        assert_eq!(fk.source_table(), f.child);
        assert_eq!(fk.target_table(), f.owner);
        assert_eq!(fk.target_columns(), &[f.owner_id]);
        assert_eq!(fk.delete_rule(), ReferentialAction::NoAction);
        assert!(fk.name().is_none());
    }

    #[test]
    fn test_arity_mismatch() {
        let mut f = fixture();
        let a = f.schema.locate_or_create_column(f.child, &Identifier::new("a"));
        let b = f.schema.locate_or_create_column(f.child, &Identifier::new("b"));
        let target = KeyTarget {
            table: f.owner,
            columns: vec![f.owner_id],
        };

        let err = ForeignKeyResolver::new(&mut f.schema)
            .resolve(
                "Owner.items",
                f.child,
                vec![a, b],
                &target,
                Default::default(),
                Default::default(),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            BindingError::ForeignKeyArityMismatch {
                source_columns: 2,
                target_columns: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_type_mismatch() {
        let mut f = fixture();
        let source = f.schema.locate_or_create_column(f.child, &Identifier::new("owner_id"));
        f.schema.column_mut(source).set_data_type(JdbcType::Varchar);
        let target = KeyTarget {
            table: f.owner,
            columns: vec![f.owner_id],
        };

        let err = ForeignKeyResolver::new(&mut f.schema)
            .resolve(
                "Owner.items",
                f.child,
                vec![source],
                &target,
                Default::default(),
                Default::default(),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            BindingError::ForeignKeyTypeMismatch {
                expected: JdbcType::BigInt,
                actual: JdbcType::Varchar,
                ..
            }
        ));
    }

    #[test]
    fn test_matching_type_and_custom_actions() {
        let mut f = fixture();
        let source = f.schema.locate_or_create_column(f.child, &Identifier::new("owner_id"));
        f.schema.column_mut(source).set_data_type(JdbcType::BigInt);
        let target = KeyTarget {
            table: f.owner,
            columns: vec![f.owner_id],
        };

        let fk = ForeignKeyResolver::new(&mut f.schema)
            .resolve(
                "Owner.items",
                f.child,
                vec![source],
                &target,
                ReferentialAction::Cascade,
                ReferentialAction::SetNull,
            )
            .unwrap();

        assert_eq!(fk.delete_rule(), ReferentialAction::Cascade);
        assert_eq!(fk.update_rule(), ReferentialAction::SetNull);
    }
}

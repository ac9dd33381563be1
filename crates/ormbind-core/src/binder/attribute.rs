//! Singular attribute binding.

use super::NamingStrategy;
use crate::binding::{RelationalValueBinding, SingularAttributeBinding, ValueOwnership};
use crate::error::{BindingError, Result};
use crate::relational::{ColumnId, DerivedValue, Identifier, Schema, TableId, Value};
use crate::source::{ColumnSource, SingularAttributeSource};
use crate::types::{TypeRegistry, TypeResolver};
use tracing::debug;

/// Binds identifiers, basic properties and component attributes to columns
/// of one table.
pub struct AttributeBinder<'a> {
    schema: &'a mut Schema,
    types: TypeResolver<'a>,
    naming: &'a dyn NamingStrategy,
}

impl<'a> AttributeBinder<'a> {
    /// Create a binder over `schema`.
    pub fn new(
        schema: &'a mut Schema,
        registry: &'a TypeRegistry,
        naming: &'a dyn NamingStrategy,
    ) -> Self {
        Self {
            schema,
            types: TypeResolver::new(registry),
            naming,
        }
    }

    /// Bind `source` to columns of `table`.
    ///
    /// `owner` names the entity or collection role the attribute belongs to.
    /// Identifier columns are never nullable and become the table's primary key.
    pub fn bind_singular(
        &mut self,
        owner: &str,
        table: TableId,
        source: &SingularAttributeSource,
        identifier: bool,
    ) -> Result<SingularAttributeBinding> {
        let context = format!("{owner}.{}", source.name);
        let descriptor = self.types.resolve_basic(
            &context,
            source.type_name.as_deref(),
            source.java_type.as_deref(),
            &source.type_parameters,
        )?;

        if let Some(formula) = &source.formula {
            if !source.columns.is_empty() {
                return Err(BindingError::invalid(
                    &context,
                    "both a formula and columns are mapped",
                ));
            }
            if identifier {
                return Err(BindingError::invalid(&context, "an identifier cannot be a formula"));
            }
            let value = RelationalValueBinding::derived(Value::Derived(DerivedValue {
                table,
                expression: formula.clone(),
            }));
            return Ok(SingularAttributeBinding::new(
                &source.name,
                descriptor,
                vec![value],
                false,
                false,
            ));
        }

        let defaulted;
        let columns = if source.columns.is_empty() {
            defaulted = [ColumnSource::new(self.naming.attribute_column_name(&source.name))];
            &defaulted[..]
        } else {
            &source.columns[..]
        };
        if columns.len() > 1 {
            return Err(BindingError::invalid(
                &context,
                format!("a basic value maps one column, {} declared", columns.len()),
            ));
        }

        let jdbc_type = descriptor.resolved_type_mapping().jdbc_type();
        let mut values = Vec::with_capacity(columns.len());
        let mut ids: Vec<ColumnId> = Vec::with_capacity(columns.len());
        let mut unique = source.unique;

        for column_source in columns {
            let name = Identifier::new(&column_source.name);
            let existed = self.schema.table(table).locate_column(name.clone()).is_some();
            let id = self.schema.locate_or_create_column(table, &name);

            let nullable = column_source
                .nullable
                .or(source.nullable)
                .unwrap_or(!identifier);
            if identifier && nullable {
                return Err(BindingError::invalid(
                    &context,
                    format!("identifier column '{name}' cannot be nullable"),
                ));
            }

            let column = self.schema.column_mut(id);
            if let Some(expected) = jdbc_type {
                match column.data_type() {
                    None => column.set_data_type(expected),
                    Some(actual) if actual == expected => {}
                    Some(actual) => {
                        return Err(BindingError::invalid(
                            &context,
                            format!(
                                "column '{name}' is already mapped as {actual}, not {expected}"
                            ),
                        ));
                    }
                }
            }
            if !existed || !nullable {
                column.set_nullable(nullable);
            }
            // A shared NOT NULL column stays NOT NULL for every attribute mapping it.
            let nullable = column.is_nullable();

            if column_source.unique {
                self.schema.add_unique_key(table, vec![id]);
                unique = true;
            }

            let ownership = if existed {
                ValueOwnership::Shared
            } else {
                ValueOwnership::Exclusive
            };
            values.push(RelationalValueBinding::column(id, nullable, ownership));
            ids.push(id);
        }

        if source.unique {
            self.schema.add_unique_key(table, ids.clone());
        }
        if identifier {
            self.schema.set_primary_key(table, ids);
        }

        debug!(attribute = %context, identifier, unique, "Bound singular attribute");

        Ok(SingularAttributeBinding::new(
            &source.name,
            descriptor,
            values,
            identifier,
            unique,
        ))
    }
}

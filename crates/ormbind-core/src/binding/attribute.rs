//! Singular attribute bindings and their relational values.

use super::PluralAttributeBinding;
use crate::relational::{ColumnId, Value};
use crate::types::TypeDescriptor;

/// Whether a binding created its value or reuses one owned elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOwnership {
    /// Created for this binding.
    Exclusive,
    /// Already mapped by another binding.
    Shared,
}

/// Links an attribute to one column or formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationalValueBinding {
    value: Value,
    nullable: bool,
    insertable: bool,
    updatable: bool,
    ownership: ValueOwnership,
}

impl RelationalValueBinding {
    pub(crate) fn column(column: ColumnId, nullable: bool, ownership: ValueOwnership) -> Self {
        Self {
            value: Value::Column(column),
            nullable,
            insertable: true,
            updatable: true,
            ownership,
        }
    }

    pub(crate) fn derived(value: Value) -> Self {
        Self {
            value,
            nullable: true,
            insertable: false,
            updatable: false,
            ownership: ValueOwnership::Exclusive,
        }
    }

    /// The bound column or formula.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether the value may be NULL.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Whether the value is written on insert.
    pub fn is_includable_in_insert(&self) -> bool {
        self.insertable
    }

    /// Whether the value is written on update.
    pub fn is_includable_in_update(&self) -> bool {
        self.updatable
    }

    /// Whether the value was created for this binding.
    pub fn ownership(&self) -> ValueOwnership {
        self.ownership
    }

    /// Whether this is a formula rather than a column.
    pub fn is_derived(&self) -> bool {
        matches!(self.value, Value::Derived(_))
    }
}

/// Binding of a single-valued attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct SingularAttributeBinding {
    name: String,
    type_descriptor: TypeDescriptor,
    relational_value_bindings: Vec<RelationalValueBinding>,
    identifier: bool,
    unique: bool,
}

impl SingularAttributeBinding {
    pub(crate) fn new(
        name: impl Into<String>,
        type_descriptor: TypeDescriptor,
        relational_value_bindings: Vec<RelationalValueBinding>,
        identifier: bool,
        unique: bool,
    ) -> Self {
        Self {
            name: name.into(),
            type_descriptor,
            relational_value_bindings,
            identifier,
            unique,
        }
    }

    /// Attribute name.
    pub fn attribute_name(&self) -> &str {
        &self.name
    }

    /// Resolved type.
    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.type_descriptor
    }

    /// Bound values in column order.
    pub fn relational_value_bindings(&self) -> &[RelationalValueBinding] {
        &self.relational_value_bindings
    }

    /// Bound columns, skipping formulas.
    pub fn columns(&self) -> impl Iterator<Item = ColumnId> + '_ {
        self.relational_value_bindings
            .iter()
            .filter_map(|b| b.value().as_column())
    }

    /// Whether any bound value may be NULL.
    pub fn is_nullable(&self) -> bool {
        self.relational_value_bindings.iter().any(|b| b.is_nullable())
    }

    /// Whether this is the entity identifier.
    pub fn is_identifier(&self) -> bool {
        self.identifier
    }

    /// Whether the attribute's values are unique.
    pub fn is_unique(&self) -> bool {
        self.unique || self.identifier
    }
}

/// Any attribute binding of an entity.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeBinding {
    /// Single-valued attribute.
    Singular(SingularAttributeBinding),
    /// Collection attribute.
    Plural(PluralAttributeBinding),
}

impl AttributeBinding {
    /// Attribute name.
    pub fn attribute_name(&self) -> &str {
        match self {
            AttributeBinding::Singular(binding) => binding.attribute_name(),
            AttributeBinding::Plural(binding) => binding.attribute_name(),
        }
    }

    /// Resolved type.
    pub fn type_descriptor(&self) -> &TypeDescriptor {
        match self {
            AttributeBinding::Singular(binding) => binding.type_descriptor(),
            AttributeBinding::Plural(binding) => binding.type_descriptor(),
        }
    }

    pub fn as_singular(&self) -> Option<&SingularAttributeBinding> {
        match self {
            AttributeBinding::Singular(binding) => Some(binding),
            AttributeBinding::Plural(_) => None,
        }
    }

    pub fn as_plural(&self) -> Option<&PluralAttributeBinding> {
        match self {
            AttributeBinding::Plural(binding) => Some(binding),
            AttributeBinding::Singular(_) => None,
        }
    }

    pub fn is_plural(&self) -> bool {
        matches!(self, AttributeBinding::Plural(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relational::{DerivedValue, Identifier, Schema};
    use crate::types::{TypeRegistry, TypeResolver};
    use indexmap::IndexMap;

    fn string_descriptor() -> TypeDescriptor {
        let registry = TypeRegistry::default();
        TypeResolver::new(&registry)
            .resolve_basic("T.a", None, Some("java.lang.String"), &IndexMap::new())
            .unwrap()
    }

    #[test]
    fn test_singular_binding_accessors() {
        let mut schema = Schema::new();
        let table = schema.locate_or_create_table(&Identifier::new("T"));
        let column = schema.locate_or_create_column(table, &Identifier::new("a"));

        let binding = SingularAttributeBinding::new(
            "a",
            string_descriptor(),
            vec![RelationalValueBinding::column(column, false, ValueOwnership::Exclusive)],
            false,
            true,
        );

        assert_eq!(binding.attribute_name(), "a");
        assert_eq!(binding.columns().collect::<Vec<_>>(), vec![column]);
        assert!(!binding.is_nullable());
        assert!(binding.is_unique());
        assert!(!binding.is_identifier());

        let wrapped = AttributeBinding::Singular(binding);
        assert!(!wrapped.is_plural());
        assert!(wrapped.as_singular().is_some());
        assert_eq!(wrapped.attribute_name(), "a");
    }

    #[test]
    fn test_derived_values_are_read_only() {
        let mut schema = Schema::new();
        let table = schema.locate_or_create_table(&Identifier::new("T"));
        let value = RelationalValueBinding::derived(Value::Derived(DerivedValue {
            table,
            expression: "lower(a)".into(),
        }));

        assert!(value.is_derived());
        assert!(value.is_nullable());
        assert!(!value.is_includable_in_insert());
        assert!(!value.is_includable_in_update());
    }

    #[test]
    fn test_identifier_is_unique() {
        let binding =
            SingularAttributeBinding::new("id", string_descriptor(), Vec::new(), true, false);
        assert!(binding.is_unique());
    }
}

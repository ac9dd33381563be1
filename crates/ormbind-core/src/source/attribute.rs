//! Singular attribute and column sources.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A column declared in a mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSource {
    /// Column name; quoted names keep their case.
    pub name: String,
    /// Explicit nullability; defaulted by the binder when absent.
    #[serde(default)]
    pub nullable: Option<bool>,
    /// Whether this single column is unique.
    #[serde(default)]
    pub unique: bool,
}

impl ColumnSource {
    /// Create a column with defaulted nullability.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: None,
            unique: false,
        }
    }

    /// Mark as NOT NULL.
    pub fn not_null(mut self) -> Self {
        self.nullable = Some(false);
        self
    }

    /// Mark as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = Some(true);
        self
    }

    /// Mark as unique.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// A single-valued attribute: identifier or basic property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingularAttributeSource {
    /// Attribute name, unique within its entity.
    pub name: String,
    /// Declared class of the attribute.
    #[serde(default)]
    pub java_type: Option<String>,
    /// Explicit type name.
    #[serde(default)]
    pub type_name: Option<String>,
    /// Type parameters, attached verbatim.
    #[serde(default)]
    pub type_parameters: IndexMap<String, String>,
    /// Mapped columns; one column named after the attribute when empty.
    #[serde(default)]
    pub columns: Vec<ColumnSource>,
    /// SQL formula used instead of columns.
    #[serde(default)]
    pub formula: Option<String>,
    /// Attribute-level nullability, applied to columns without their own setting.
    #[serde(default)]
    pub nullable: Option<bool>,
    /// Whether the attribute's columns are unique together.
    #[serde(default)]
    pub unique: bool,
}

impl SingularAttributeSource {
    /// Create an attribute typed by its declared class.
    pub fn new(name: impl Into<String>, java_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            java_type: Some(java_type.into()),
            type_name: None,
            type_parameters: IndexMap::new(),
            columns: Vec::new(),
            formula: None,
            nullable: None,
            unique: false,
        }
    }

    /// Create an attribute typed by an explicit type name.
    pub fn typed(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            java_type: None,
            type_name: Some(type_name.into()),
            type_parameters: IndexMap::new(),
            columns: Vec::new(),
            formula: None,
            nullable: None,
            unique: false,
        }
    }

    /// Set the explicit type name.
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Add a type parameter.
    pub fn with_type_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.type_parameters.insert(name.into(), value.into());
        self
    }

    /// Add a column.
    pub fn with_column(mut self, column: ColumnSource) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a column by name.
    pub fn with_column_name(self, name: impl Into<String>) -> Self {
        self.with_column(ColumnSource::new(name))
    }

    /// Map to a formula instead of a column.
    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    /// Mark as NOT NULL.
    pub fn not_null(mut self) -> Self {
        self.nullable = Some(false);
        self
    }

    /// Mark as unique.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_builder() {
        let attr = SingularAttributeSource::new("name", "java.lang.String")
            .with_column(ColumnSource::new("`name`").not_null())
            .unique();

        assert_eq!(attr.name, "name");
        assert_eq!(attr.java_type.as_deref(), Some("java.lang.String"));
        assert_eq!(attr.columns.len(), 1);
        assert_eq!(attr.columns[0].nullable, Some(false));
        assert!(attr.unique);
        assert!(attr.formula.is_none());
    }

    #[test]
    fn test_typed_attribute() {
        let attr = SingularAttributeSource::typed("total", "big_decimal")
            .with_type_parameter("precision", "10")
            .with_type_parameter("scale", "2");

        assert!(attr.java_type.is_none());
        let keys: Vec<_> = attr.type_parameters.keys().cloned().collect();
        assert_eq!(keys, vec!["precision", "scale"]);
    }

    #[test]
    fn test_deserialize_minimal() {
        let attr: SingularAttributeSource =
            serde_json::from_str(r#"{ "name": "age", "java_type": "int" }"#).unwrap();

        assert_eq!(attr, SingularAttributeSource::new("age", "int"));
    }
}

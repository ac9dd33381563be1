//! Registry of basic types by name and by class.

use super::BasicType;
use crate::relational::JdbcType;
use std::collections::HashMap;

/// Known basic types, addressable by registered name or by Java class name.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    by_name: HashMap<String, BasicType>,
    by_class: HashMap<String, String>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for (name, class, jdbc_type, aliases) in DEFAULT_TYPES {
            registry.register(BasicType::new(*name, *class, *jdbc_type), aliases);
        }
        registry
    }
}

/// (name, returned class, column type, additional classes)
const DEFAULT_TYPES: &[(&str, &str, JdbcType, &[&str])] = &[
    ("string", "java.lang.String", JdbcType::Varchar, &[]),
    ("character", "java.lang.Character", JdbcType::Char, &["char"]),
    ("boolean", "java.lang.Boolean", JdbcType::Boolean, &["boolean"]),
    ("byte", "java.lang.Byte", JdbcType::TinyInt, &["byte"]),
    ("short", "java.lang.Short", JdbcType::SmallInt, &["short"]),
    ("integer", "java.lang.Integer", JdbcType::Integer, &["int"]),
    ("long", "java.lang.Long", JdbcType::BigInt, &["long"]),
    ("float", "java.lang.Float", JdbcType::Real, &["float"]),
    ("double", "java.lang.Double", JdbcType::Double, &["double"]),
    ("big_decimal", "java.math.BigDecimal", JdbcType::Numeric, &[]),
    ("big_integer", "java.math.BigInteger", JdbcType::Numeric, &[]),
    ("date", "java.sql.Date", JdbcType::Date, &["java.time.LocalDate"]),
    ("time", "java.sql.Time", JdbcType::Time, &["java.time.LocalTime"]),
    (
        "timestamp",
        "java.sql.Timestamp",
        JdbcType::Timestamp,
        &["java.util.Date", "java.time.LocalDateTime", "java.time.Instant"],
    ),
    ("binary", "[B", JdbcType::VarBinary, &["byte[]"]),
    ("uuid", "java.util.UUID", JdbcType::Other, &[]),
];

impl TypeRegistry {
    /// A registry with no types.
    pub fn empty() -> Self {
        Self {
            by_name: HashMap::new(),
            by_class: HashMap::new(),
        }
    }

    /// Register a type under its name, its returned class, and extra class names.
    ///
    /// Later registrations replace earlier ones for the same keys.
    pub fn register(&mut self, basic: BasicType, extra_classes: &[&str]) {
        let name = basic.name().to_string();
        self.by_class
            .insert(basic.returned_class().to_string(), name.clone());
        for class in extra_classes {
            self.by_class.insert((*class).to_string(), name.clone());
        }
        self.by_name.insert(name, basic);
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_type(mut self, basic: BasicType, extra_classes: &[&str]) -> Self {
        self.register(basic, extra_classes);
        self
    }

    /// Look up a type by registered name, falling back to class name.
    pub fn lookup(&self, name: &str) -> Option<&BasicType> {
        self.by_name.get(name).or_else(|| self.by_class(name))
    }

    /// Look up the type registered for a class.
    pub fn by_class(&self, class_name: &str) -> Option<&BasicType> {
        self.by_class
            .get(class_name)
            .and_then(|name| self.by_name.get(name))
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let registry = TypeRegistry::default();

        assert_eq!(registry.len(), DEFAULT_TYPES.len());
        assert_eq!(
            registry.lookup("string").map(|t| t.jdbc_type()),
            Some(JdbcType::Varchar)
        );
        assert_eq!(
            registry.by_class("java.lang.Integer").map(|t| t.name()),
            Some("integer")
        );
        assert_eq!(registry.by_class("int").map(|t| t.name()), Some("integer"));
        assert_eq!(
            registry.by_class("java.util.Date").map(|t| t.name()),
            Some("timestamp")
        );
    }

    #[test]
    fn test_lookup_by_class_name() {
        let registry = TypeRegistry::default();
        assert_eq!(
            registry.lookup("java.lang.Long").map(|t| t.name()),
            Some("long")
        );
        assert!(registry.lookup("money").is_none());
    }

    #[test]
    fn test_custom_registration() {
        let registry = TypeRegistry::empty().with_type(
            BasicType::new("yes_no", "java.lang.Boolean", JdbcType::Char),
            &[],
        );

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.lookup("yes_no").map(|t| t.jdbc_type()),
            Some(JdbcType::Char)
        );
        assert!(!registry.is_empty());
        assert!(TypeRegistry::empty().is_empty());
    }
}

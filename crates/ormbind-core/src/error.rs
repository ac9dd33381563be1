//! Binding error types.

use crate::relational::JdbcType;
use thiserror::Error;

/// Result alias used throughout the binding engine.
pub type Result<T> = std::result::Result<T, BindingError>;

/// What a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// An entity binding by entity name.
    Entity,
    /// A collection binding by role.
    Collection,
    /// An attribute binding by attribute name.
    Attribute,
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupKind::Entity => write!(f, "entity"),
            LookupKind::Collection => write!(f, "collection"),
            LookupKind::Attribute => write!(f, "attribute"),
        }
    }
}

/// Errors raised while resolving mapping sources into bindings.
///
/// All of these are resolution-time failures over fixed input; none are retryable.
#[derive(Debug, Error)]
pub enum BindingError {
    /// An explicit type name is not present in the type registry.
    #[error("unknown type '{type_name}' for {context}")]
    UnknownType {
        /// The explicit type name that was requested.
        type_name: String,
        /// The attribute or collection being resolved.
        context: String,
    },

    /// No type could be inferred from the declared class.
    #[error("cannot resolve type for {context}: {reason}")]
    UnresolvedType {
        /// The attribute or collection being resolved.
        context: String,
        /// Why inference failed.
        reason: String,
    },

    /// Source and target column counts differ.
    #[error(
        "foreign key arity mismatch for {context}: {source_columns} source column(s), {target_columns} target column(s)"
    )]
    ForeignKeyArityMismatch {
        /// The key being resolved.
        context: String,
        /// Number of source columns.
        source_columns: usize,
        /// Number of target columns.
        target_columns: usize,
    },

    /// A source column already carries a type different from its target column.
    #[error(
        "foreign key type mismatch for {context}: column '{column}' is {actual:?}, target expects {expected:?}"
    )]
    ForeignKeyTypeMismatch {
        /// The key being resolved.
        context: String,
        /// The offending source column.
        column: String,
        /// The target column's type.
        expected: JdbcType,
        /// The source column's type.
        actual: JdbcType,
    },

    /// The attribute a key should reference cannot serve as a foreign-key target.
    #[error("invalid foreign key target {entity}.{attribute} for {context}: {reason}")]
    ForeignKeyTarget {
        /// The key being resolved.
        context: String,
        /// Entity owning the referenced attribute.
        entity: String,
        /// The referenced attribute.
        attribute: String,
        /// Why the attribute was rejected.
        reason: String,
    },

    /// Two attributes with the same name in one entity.
    #[error("duplicate attribute '{attribute}' in entity '{entity}'")]
    DuplicateAttribute {
        /// The entity name.
        entity: String,
        /// The repeated attribute name.
        attribute: String,
    },

    /// Two entity sources with the same name.
    #[error("duplicate entity '{entity}'")]
    DuplicateEntity {
        /// The repeated entity name.
        entity: String,
    },

    /// A descriptor combination that cannot be bound.
    #[error("invalid descriptor for {context}: {message}")]
    InvalidDescriptor {
        /// The attribute or collection being resolved.
        context: String,
        /// Description of the contradiction.
        message: String,
    },

    /// A lookup on published metadata found nothing.
    #[error("{kind} not found: {name}")]
    NotFound {
        /// What was looked up.
        kind: LookupKind,
        /// The name or role that was requested.
        name: String,
    },

    /// Source documents could not be read.
    #[error("invalid mapping source: {0}")]
    Source(#[from] serde_json::Error),
}

impl BindingError {
    /// Check if this error came from foreign-key resolution.
    pub fn is_foreign_key_error(&self) -> bool {
        matches!(
            self,
            BindingError::ForeignKeyArityMismatch { .. }
                | BindingError::ForeignKeyTypeMismatch { .. }
                | BindingError::ForeignKeyTarget { .. }
        )
    }

    pub(crate) fn not_found(kind: LookupKind, name: impl Into<String>) -> Self {
        BindingError::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub(crate) fn invalid(context: impl Into<String>, message: impl Into<String>) -> Self {
        BindingError::InvalidDescriptor {
            context: context.into(),
            message: message.into(),
        }
    }
}

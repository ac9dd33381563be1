//! Closed classifications shared by sources and bindings.

use serde::{Deserialize, Serialize};

/// Collection semantics of a plural attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralAttributeNature {
    /// Unordered, duplicates allowed.
    Bag,
    /// Unordered, no duplicates.
    Set,
    /// Ordered by an index column.
    List,
    /// Keyed by a map-key column.
    Map,
}

impl PluralAttributeNature {
    /// Registered name of the collection type.
    pub fn type_name(&self) -> &'static str {
        match self {
            PluralAttributeNature::Bag => "bag",
            PluralAttributeNature::Set => "set",
            PluralAttributeNature::List => "list",
            PluralAttributeNature::Map => "map",
        }
    }

    /// Interface class assumed when no class is declared.
    pub fn interface_class(&self) -> &'static str {
        match self {
            PluralAttributeNature::Bag => "java.util.Collection",
            PluralAttributeNature::Set => "java.util.Set",
            PluralAttributeNature::List => "java.util.List",
            PluralAttributeNature::Map => "java.util.Map",
        }
    }

    /// Whether a declared class can hold this kind of collection.
    pub fn accepts_class(&self, class_name: &str) -> bool {
        match self {
            PluralAttributeNature::Bag => {
                matches!(class_name, "java.util.Collection" | "java.util.List")
            }
            PluralAttributeNature::Set => {
                matches!(class_name, "java.util.Set" | "java.util.SortedSet")
            }
            PluralAttributeNature::List => class_name == "java.util.List",
            PluralAttributeNature::Map => {
                matches!(class_name, "java.util.Map" | "java.util.SortedMap")
            }
        }
    }

    /// Whether rows are addressed by an index or key column.
    pub fn is_indexed(&self) -> bool {
        matches!(self, PluralAttributeNature::List | PluralAttributeNature::Map)
    }
}

impl std::fmt::Display for PluralAttributeNature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// What a collection holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralAttributeElementNature {
    /// Single basic value per row.
    Basic,
    /// Embedded value object spanning several columns.
    Composite,
    /// Reference to another entity through the collection table.
    ManyToMany,
}

impl std::fmt::Display for PluralAttributeElementNature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluralAttributeElementNature::Basic => write!(f, "basic"),
            PluralAttributeElementNature::Composite => write!(f, "composite"),
            PluralAttributeElementNature::ManyToMany => write!(f, "many-to-many"),
        }
    }
}

/// When a collection's contents are loaded, from eager to most deferred.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FetchTiming {
    /// Loaded with the owner.
    #[default]
    Immediate,
    /// Loaded on first access.
    Delayed,
    /// Individual operations (size, contains) may run without loading the collection.
    ExtraDelayed,
}

impl FetchTiming {
    /// Whether this timing defers loading.
    pub fn is_lazy(&self) -> bool {
        *self != FetchTiming::Immediate
    }
}

impl std::fmt::Display for FetchTiming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchTiming::Immediate => write!(f, "immediate"),
            FetchTiming::Delayed => write!(f, "delayed"),
            FetchTiming::ExtraDelayed => write!(f, "extra-delayed"),
        }
    }
}

//! Binder configuration.

use crate::binding::FetchTiming;
use serde::{Deserialize, Serialize};

/// Settings applied while binding sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinderConfig {
    /// Fetch timing for collections that do not declare one.
    pub default_fetch_timing: FetchTiming,

    /// Run the foreign-key naming pass after all bindings are built.
    /// Foreign keys stay unnamed when this is off.
    pub name_foreign_keys: bool,

    /// Prefix of generated foreign-key names.
    pub foreign_key_prefix: String,

    /// Column name for basic collection elements without an explicit column.
    pub element_column: String,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            default_fetch_timing: FetchTiming::Immediate,
            name_foreign_keys: false,
            foreign_key_prefix: "FK".to_string(),
            element_column: "elt".to_string(),
        }
    }
}

impl BinderConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default fetch timing.
    pub fn with_default_fetch_timing(mut self, timing: FetchTiming) -> Self {
        self.default_fetch_timing = timing;
        self
    }

    /// Enable the foreign-key naming pass.
    pub fn with_foreign_key_names(mut self) -> Self {
        self.name_foreign_keys = true;
        self
    }

    /// Set the foreign-key name prefix.
    pub fn with_foreign_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.foreign_key_prefix = prefix.into();
        self
    }

    /// Set the default element column name.
    pub fn with_element_column(mut self, column: impl Into<String>) -> Self {
        self.element_column = column.into();
        self
    }
}

//! Normalized relational names.

use std::hash::{Hash, Hasher};

/// A table or column name.
///
/// Names wrapped in backticks or double quotes are quoted: the quotes are
/// stripped and the text compares case-sensitively. Unquoted names compare
/// case-insensitively. The comparison key is computed once at construction.
#[derive(Debug, Clone)]
pub struct Identifier {
    text: String,
    quoted: bool,
    normalized: String,
}

impl Identifier {
    /// Create an identifier, detecting quoting.
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref().trim();
        let quoted_text = strip_quotes(name, '`').or_else(|| strip_quotes(name, '"'));

        match quoted_text {
            Some(inner) => Self {
                text: inner.to_string(),
                quoted: true,
                normalized: inner.to_string(),
            },
            None => Self {
                text: name.to_string(),
                quoted: false,
                normalized: name.to_lowercase(),
            },
        }
    }

    /// Create an identifier that is always quoted.
    pub fn quoted(name: impl Into<String>) -> Self {
        let text = name.into();
        Self {
            normalized: text.clone(),
            text,
            quoted: true,
        }
    }

    /// The name as written, without quotes.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the name was quoted.
    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// The comparison key.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

fn strip_quotes(name: &str, quote: char) -> Option<&str> {
    let inner = name.strip_prefix(quote)?.strip_suffix(quote)?;
    (!inner.is_empty()).then_some(inner)
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.quoted {
            write!(f, "`{}`", self.text)
        } else {
            write!(f, "{}", self.text)
        }
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::new(name)
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Identifier::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unquoted_is_case_insensitive() {
        assert_eq!(Identifier::new("owner_id"), Identifier::new("OWNER_ID"));
        assert!(!Identifier::new("owner_id").is_quoted());
        assert_eq!(Identifier::new("OWNER_ID").text(), "OWNER_ID");
    }

    #[test]
    fn test_quoted_names() {
        let name = Identifier::new("`name`");
        assert!(name.is_quoted());
        assert_eq!(name.text(), "name");
        assert_eq!(name.to_string(), "`name`");

        assert_eq!(Identifier::new("\"Name\""), Identifier::quoted("Name"));
        assert_ne!(Identifier::new("`Name`"), Identifier::new("name"));
        assert_eq!(Identifier::new("`name`"), Identifier::new("name"));
    }

    #[test]
    fn test_degenerate_quotes() {
        let empty = Identifier::new("``");
        assert!(!empty.is_quoted());
        assert_eq!(empty.text(), "``");
    }
}

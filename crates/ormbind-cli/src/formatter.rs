//! Output formatters for binding reports.

use crate::report::EntityReport;
use clap::ValueEnum;
use comfy_table::{Cell, Table};

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format
    Table,
    /// JSON format
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Trait for formatting output.
pub trait Formatter {
    /// Format entity reports.
    fn format_report(&self, entities: &[EntityReport]) -> String;

    /// Format an error message.
    fn format_error(&self, error: &str) -> String;
}

/// Create a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Table formatter using comfy-table.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_report(&self, entities: &[EntityReport]) -> String {
        if entities.is_empty() {
            return "No entities".to_string();
        }

        let mut summary = Table::new();
        summary.set_header(vec!["Entity", "Table", "Identifier", "Attributes", "Collections"]);
        for entity in entities {
            summary.add_row(vec![
                Cell::new(&entity.name),
                Cell::new(&entity.table),
                Cell::new(&entity.identifier),
                Cell::new(entity.attributes),
                Cell::new(entity.collections.len()),
            ]);
        }

        let mut output = summary.to_string();

        let collections: Vec<_> = entities.iter().flat_map(|e| &e.collections).collect();
        if !collections.is_empty() {
            let mut table = Table::new();
            table.set_header(vec![
                "Role",
                "Nature",
                "Table",
                "Element",
                "Key",
                "Index",
                "Primary key",
                "Fetch",
                "Foreign keys",
            ]);
            for collection in collections {
                let foreign_keys: Vec<String> = collection
                    .foreign_keys
                    .iter()
                    .map(|fk| {
                        format!(
                            "{}({}) -> {}({})",
                            fk.name.as_deref().unwrap_or("<unnamed>"),
                            fk.columns.join(", "),
                            fk.references,
                            fk.target_columns.join(", ")
                        )
                    })
                    .collect();

                table.add_row(vec![
                    Cell::new(&collection.role),
                    Cell::new(&collection.nature),
                    Cell::new(&collection.table),
                    Cell::new(format!("{} {}", collection.element, collection.element_type)),
                    Cell::new(collection.key_columns.join(", ")),
                    Cell::new(collection.index_column.as_deref().unwrap_or("-")),
                    Cell::new(collection.primary_key.join(", ")),
                    Cell::new(&collection.fetch_timing),
                    Cell::new(foreign_keys.join("\n")),
                ]);
            }
            output.push_str("\n\n");
            output.push_str(&table.to_string());
        }

        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_report(&self, entities: &[EntityReport]) -> String {
        serde_json::to_string_pretty(entities).unwrap_or_else(|_| "[]".to_string())
    }

    fn format_error(&self, error: &str) -> String {
        serde_json::json!({
            "error": error
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{CollectionReport, ForeignKeyReport};

    fn sample() -> Vec<EntityReport> {
        vec![EntityReport {
            name: "org.example.Person".to_string(),
            table: "Person".to_string(),
            identifier: "id".to_string(),
            attributes: 2,
            collections: vec![CollectionReport {
                role: "org.example.Person.nicknames".to_string(),
                nature: "bag".to_string(),
                table: "Person_nicknames".to_string(),
                element: "basic".to_string(),
                element_type: "java.lang.String".to_string(),
                key_columns: vec!["Person_id".to_string()],
                index_column: None,
                primary_key: Vec::new(),
                fetch_timing: "immediate".to_string(),
                lazy: false,
                foreign_keys: vec![ForeignKeyReport {
                    name: None,
                    columns: vec!["Person_id".to_string()],
                    references: "Person".to_string(),
                    target_columns: vec!["id".to_string()],
                    on_delete: "NoAction".to_string(),
                }],
            }],
        }]
    }

    #[test]
    fn test_table_format() {
        let output = TableFormatter.format_report(&sample());
        assert!(output.contains("org.example.Person.nicknames"));
        assert!(output.contains("<unnamed>(Person_id) -> Person(id)"));
        assert_eq!(TableFormatter.format_report(&[]), "No entities");
    }

    #[test]
    fn test_json_format() {
        let output = JsonFormatter.format_report(&sample());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["collections"][0]["key_columns"][0], "Person_id");
        assert_eq!(value[0]["collections"][0]["foreign_keys"][0]["name"], serde_json::Value::Null);
    }

    #[test]
    fn test_error_format() {
        assert_eq!(TableFormatter.format_error("boom"), "Error: boom");
        assert_eq!(JsonFormatter.format_error("boom"), r#"{"error":"boom"}"#);
    }
}

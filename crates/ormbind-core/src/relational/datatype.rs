//! Column data types.

use serde::{Deserialize, Serialize};

/// JDBC-style column type tag.
///
/// Columns paired across a foreign key must carry the same tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JdbcType {
    /// BOOLEAN.
    Boolean,
    /// TINYINT.
    TinyInt,
    /// SMALLINT.
    SmallInt,
    /// INTEGER.
    Integer,
    /// BIGINT.
    BigInt,
    /// REAL.
    Real,
    /// DOUBLE.
    Double,
    /// NUMERIC.
    Numeric,
    /// CHAR.
    Char,
    /// VARCHAR.
    Varchar,
    /// DATE.
    Date,
    /// TIME.
    Time,
    /// TIMESTAMP.
    Timestamp,
    /// VARBINARY.
    VarBinary,
    /// Vendor specific.
    Other,
}

impl JdbcType {
    /// The `java.sql.Types` code for this tag.
    pub fn code(&self) -> i32 {
        match self {
            JdbcType::Boolean => 16,
            JdbcType::TinyInt => -6,
            JdbcType::SmallInt => 5,
            JdbcType::Integer => 4,
            JdbcType::BigInt => -5,
            JdbcType::Real => 7,
            JdbcType::Double => 8,
            JdbcType::Numeric => 2,
            JdbcType::Char => 1,
            JdbcType::Varchar => 12,
            JdbcType::Date => 91,
            JdbcType::Time => 92,
            JdbcType::Timestamp => 93,
            JdbcType::VarBinary => -3,
            JdbcType::Other => 1111,
        }
    }

    /// Look up a tag by its `java.sql.Types` code.
    pub fn from_code(code: i32) -> Option<Self> {
        let ty = match code {
            16 => JdbcType::Boolean,
            -6 => JdbcType::TinyInt,
            5 => JdbcType::SmallInt,
            4 => JdbcType::Integer,
            -5 => JdbcType::BigInt,
            7 => JdbcType::Real,
            8 => JdbcType::Double,
            2 => JdbcType::Numeric,
            1 => JdbcType::Char,
            12 => JdbcType::Varchar,
            91 => JdbcType::Date,
            92 => JdbcType::Time,
            93 => JdbcType::Timestamp,
            -3 => JdbcType::VarBinary,
            1111 => JdbcType::Other,
            _ => return None,
        };
        Some(ty)
    }
}

impl std::fmt::Display for JdbcType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            JdbcType::Boolean => "BOOLEAN",
            JdbcType::TinyInt => "TINYINT",
            JdbcType::SmallInt => "SMALLINT",
            JdbcType::Integer => "INTEGER",
            JdbcType::BigInt => "BIGINT",
            JdbcType::Real => "REAL",
            JdbcType::Double => "DOUBLE",
            JdbcType::Numeric => "NUMERIC",
            JdbcType::Char => "CHAR",
            JdbcType::Varchar => "VARCHAR",
            JdbcType::Date => "DATE",
            JdbcType::Time => "TIME",
            JdbcType::Timestamp => "TIMESTAMP",
            JdbcType::VarBinary => "VARBINARY",
            JdbcType::Other => "OTHER",
        };
        write!(f, "{name}")
    }
}

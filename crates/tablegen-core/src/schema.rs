//! Tabular schema descriptions consumed by the DDL generator.
//!
//! A [`TableSpec`] is an ordered list of [`ColumnSpec`]s plus an ordered
//! (possibly empty) list of primary-key column names. Column order is
//! significant: it defines the column order of the generated DDL. All of
//! this state is per-call; nothing outlives a single generation.

use core::fmt;

/// Logical column types a caller-supplied schema can carry.
///
/// Only a subset has a SQL Server mapping rule; see
/// [`type_token`](crate::generator::type_token). The remaining variants
/// (`Char`, `TimeSpan`, `Binary`) are valid schema descriptions that the
/// generator rejects with [`DdlError::UnsupportedType`](crate::DdlError).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalType {
    /// True/false flag.
    Boolean,
    /// Unsigned 8-bit integer.
    Byte,
    /// Unicode character string.
    String,
    /// Fixed-point decimal number.
    Decimal,
    /// 64-bit floating point number.
    Double,
    /// 32-bit floating point number.
    Single,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// Date and time of day.
    DateTime,
    /// Globally unique identifier.
    Guid,
    /// Single character. No mapping rule.
    Char,
    /// Duration. No mapping rule.
    TimeSpan,
    /// Raw byte sequence. No mapping rule.
    Binary,
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::String => "String",
            Self::Decimal => "Decimal",
            Self::Double => "Double",
            Self::Single => "Single",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::DateTime => "DateTime",
            Self::Guid => "Guid",
            Self::Char => "Char",
            Self::TimeSpan => "TimeSpan",
            Self::Binary => "Binary",
        };
        f.write_str(name)
    }
}

/// A single column description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Column name, unique within its table.
    pub name: String,
    /// Logical data type.
    pub logical_type: LogicalType,
    /// Character length for string columns; `None` means unbounded.
    pub size: Option<u32>,
    /// Total number of digits for decimal columns.
    pub precision: Option<u8>,
    /// Digits after the decimal point for decimal columns.
    pub scale: Option<u8>,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Whether the column auto-increments.
    pub auto_increment: bool,
}

impl ColumnSpec {
    /// Creates a new column description. Columns are nullable and unbounded
    /// by default.
    #[must_use]
    pub fn new(name: impl Into<String>, logical_type: LogicalType) -> Self {
        Self {
            name: name.into(),
            logical_type,
            size: None,
            precision: None,
            scale: None,
            nullable: true,
            auto_increment: false,
        }
    }

    /// Marks the column as NOT NULL.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Marks the column as auto-incrementing.
    #[must_use]
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Sets the character length for string columns.
    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Marks the column as unbounded (the default).
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.size = None;
        self
    }

    /// Sets precision and scale for decimal columns.
    #[must_use]
    pub fn precision_scale(mut self, precision: u8, scale: u8) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }
}

/// An ordered table description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    /// Table name.
    pub name: String,
    /// Columns in declaration order.
    pub columns: Vec<ColumnSpec>,
    /// Primary-key column names in declaration order. Empty means no
    /// primary-key constraint is emitted.
    pub primary_key: Vec<String>,
}

impl TableSpec {
    /// Creates an empty table description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            primary_key: Vec::new(),
        }
    }

    /// Appends a column.
    #[must_use]
    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    /// Appends a primary-key column name.
    #[must_use]
    pub fn primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_key.push(column.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_column() {
        let col = ColumnSpec::new("Message", LogicalType::String);
        assert_eq!(col.name, "Message");
        assert_eq!(col.logical_type, LogicalType::String);
        assert!(col.nullable);
        assert!(!col.auto_increment);
        assert_eq!(col.size, None);
    }

    #[test]
    fn test_column_builders() {
        let col = ColumnSpec::new("ID", LogicalType::Int32)
            .not_null()
            .auto_increment();
        assert!(!col.nullable);
        assert!(col.auto_increment);

        let col = ColumnSpec::new("Level", LogicalType::String).size(128);
        assert_eq!(col.size, Some(128));

        let col = ColumnSpec::new("Amount", LogicalType::Decimal).precision_scale(18, 0);
        assert_eq!(col.precision, Some(18));
        assert_eq!(col.scale, Some(0));
    }

    #[test]
    fn test_table_builder_preserves_order() {
        let table = TableSpec::new("Logs")
            .column(ColumnSpec::new("ID", LogicalType::Int32))
            .column(ColumnSpec::new("Message", LogicalType::String))
            .primary_key("ID");

        assert_eq!(table.name, "Logs");
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[0].name, "ID");
        assert_eq!(table.columns[1].name, "Message");
        assert_eq!(table.primary_key, vec!["ID"]);
    }

    #[test]
    fn test_logical_type_display() {
        assert_eq!(LogicalType::Int32.to_string(), "Int32");
        assert_eq!(LogicalType::TimeSpan.to_string(), "TimeSpan");
        assert_eq!(LogicalType::Guid.to_string(), "Guid");
    }
}

//! T-SQL generation for guarded CREATE TABLE and CREATE SCHEMA statements.
//!
//! Every statement this module emits is wrapped in a catalog existence
//! check (`sys.tables` / `sys.schemas`), so repeated execution is a no-op.
//! Generation is all-or-nothing: an unmapped logical type aborts with
//! [`DdlError::UnsupportedType`] before any SQL text is returned.

use crate::error::{DdlError, Result};
use crate::schema::{ColumnSpec, LogicalType, TableSpec};

/// Target schema used when none is configured.
pub const DEFAULT_SCHEMA: &str = "dbo";

/// Precision substituted when a decimal column leaves it unset.
const DEFAULT_PRECISION: u8 = 10;

/// Scale substituted when a decimal column leaves it unset.
const DEFAULT_SCALE: u8 = 2;

/// Maps a logical type to its exact T-SQL type token.
///
/// `size` applies to string columns (`None` renders `NVARCHAR(MAX)`);
/// `precision` and `scale` apply to decimal columns and fall back to the
/// fixed defaults 10 and 2 when unset. The decimal rule is deliberately
/// quirky: scale > 0 maps to `REAL`, otherwise precision > 10 maps to
/// `BIGINT` and anything else to `INT`. An unannotated decimal therefore
/// always maps to `REAL`.
pub fn type_token(
    logical_type: LogicalType,
    size: Option<u32>,
    precision: Option<u8>,
    scale: Option<u8>,
) -> Result<String> {
    let token = match logical_type {
        LogicalType::Boolean => String::from("BIT"),
        LogicalType::Byte => String::from("TINYINT"),
        LogicalType::String => match size {
            Some(n) => format!("NVARCHAR({n})"),
            None => String::from("NVARCHAR(MAX)"),
        },
        LogicalType::Decimal => {
            let precision = precision.unwrap_or(DEFAULT_PRECISION);
            let scale = scale.unwrap_or(DEFAULT_SCALE);
            if scale > 0 {
                String::from("REAL")
            } else if precision > 10 {
                String::from("BIGINT")
            } else {
                String::from("INT")
            }
        }
        LogicalType::Double | LogicalType::Single => String::from("REAL"),
        LogicalType::Int64 => String::from("BIGINT"),
        LogicalType::Int16 | LogicalType::Int32 => String::from("INT"),
        LogicalType::DateTime => String::from("DATETIME"),
        LogicalType::Guid => String::from("UNIQUEIDENTIFIER"),
        LogicalType::Char | LogicalType::TimeSpan | LogicalType::Binary => {
            return Err(DdlError::UnsupportedType(logical_type));
        }
    };
    Ok(token)
}

/// Maps a logical type to its T-SQL type token plus nullability clause,
/// e.g. `NVARCHAR(MAX) NULL` or `INT NOT NULL`.
pub fn column_type(
    logical_type: LogicalType,
    size: Option<u32>,
    precision: Option<u8>,
    scale: Option<u8>,
    nullable: bool,
) -> Result<String> {
    let token = type_token(logical_type, size, precision, scale)?;
    Ok(format!("{token}{}", null_clause(nullable)))
}

fn null_clause(nullable: bool) -> &'static str {
    if nullable { " NULL" } else { " NOT NULL" }
}

/// Quotes an identifier using SQL Server's square bracket syntax, doubling
/// any closing brackets the name contains.
#[must_use]
pub fn quote_identifier(ident: &str) -> String {
    format!("[{}]", ident.replace(']', "]]"))
}

/// Escapes the body of a single-quoted T-SQL string literal.
fn escape_literal(s: &str) -> String {
    s.replace('\'', "''")
}

/// Generates guarded, idempotent T-SQL DDL for one target schema.
#[derive(Debug, Clone)]
pub struct DdlGenerator {
    schema: String,
}

impl Default for DdlGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEMA)
    }
}

impl DdlGenerator {
    /// Creates a generator targeting the given schema. A blank or
    /// whitespace-only name falls back to `dbo`.
    #[must_use]
    pub fn new(schema: impl Into<String>) -> Self {
        let schema = schema.into();
        let schema = if schema.trim().is_empty() {
            String::from(DEFAULT_SCHEMA)
        } else {
            schema
        };
        Self { schema }
    }

    /// Returns the target schema name.
    #[must_use]
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Produces a single guarded `CREATE TABLE` statement for the table.
    ///
    /// Two name-driven rules apply before type mapping:
    /// - a column named `ID` (case-insensitive) always receives
    ///   `IDENTITY(1,1)` and is the only column that keeps its declared
    ///   nullability; every other column renders ` NULL` regardless of its
    ///   flag;
    /// - a column named `PROPERTIES` (case-insensitive) always maps to
    ///   `XML`, whatever its declared logical type.
    ///
    /// Columns appear in declaration order, comma-separated with no
    /// trailing comma. A non-empty `primary_key` list adds a named
    /// `CONSTRAINT [PK_<table>] PRIMARY KEY CLUSTERED (...)` clause over
    /// exactly those columns in order.
    pub fn create_table_sql(&self, table: &TableSpec) -> Result<String> {
        let mut sql = format!(
            "IF NOT EXISTS (SELECT s.name, t.name FROM sys.tables t JOIN sys.schemas s \
             ON t.schema_id = s.schema_id WHERE s.name = '{}' AND t.name = '{}') BEGIN\n",
            escape_literal(&self.schema),
            escape_literal(&table.name),
        );
        sql.push_str(&format!(
            "CREATE TABLE {}.{} (",
            quote_identifier(&self.schema),
            quote_identifier(&table.name),
        ));

        let columns: Vec<String> = table
            .columns
            .iter()
            .map(column_ddl)
            .collect::<Result<_>>()?;
        sql.push('\n');
        sql.push_str(&columns.join(",\n"));

        if table.primary_key.is_empty() {
            sql.push(')');
        } else {
            sql.push_str(&format!(
                " CONSTRAINT {} PRIMARY KEY CLUSTERED (",
                quote_identifier(&format!("PK_{}", table.name)),
            ));
            let keys: Vec<String> = table
                .primary_key
                .iter()
                .map(|name| quote_identifier(name))
                .collect();
            sql.push_str(&keys.join(", "));
            sql.push_str("))");
        }
        sql.push_str(" END");

        Ok(sql)
    }

    /// Produces a guarded `CREATE SCHEMA` statement, or `None` when the
    /// target schema is `dbo` (any case) and nothing needs creating.
    ///
    /// The returned statement is executed separately, before the table
    /// statement.
    #[must_use]
    pub fn create_schema_sql(&self) -> Option<String> {
        if self.schema.trim().eq_ignore_ascii_case(DEFAULT_SCHEMA) {
            return None;
        }
        let create = format!(
            "CREATE SCHEMA {} AUTHORIZATION [dbo]",
            quote_identifier(&self.schema),
        );
        Some(format!(
            "IF NOT EXISTS(SELECT * FROM sys.schemas WHERE name = N'{}') EXEC('{}');",
            escape_literal(&self.schema),
            escape_literal(&create),
        ))
    }
}

/// Renders one column definition, applying the ID and PROPERTIES overrides.
fn column_ddl(column: &ColumnSpec) -> Result<String> {
    let is_id = column.name.eq_ignore_ascii_case("ID");

    // Every column except ID is forced nullable.
    let nullable = if is_id { column.nullable } else { true };

    let token = if column.name.eq_ignore_ascii_case("PROPERTIES") {
        String::from("XML")
    } else {
        type_token(column.logical_type, column.size, column.precision, column.scale)?
    };

    let mut sql = format!("{} {token}", quote_identifier(&column.name));
    if is_id || column.auto_increment {
        sql.push_str(" IDENTITY(1,1)");
    }
    sql.push_str(null_clause(nullable));
    Ok(sql)
}

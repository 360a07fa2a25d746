//! # tablegen-core
//!
//! Schema descriptions and idempotent T-SQL DDL generation for SQL Server.
//!
//! Given a [`TableSpec`] (ordered columns with logical types, nullability
//! and identity flags, plus optional primary-key columns), the generator
//! emits a single `CREATE TABLE` statement guarded by a catalog existence
//! check, and optionally a guarded `CREATE SCHEMA` statement for
//! non-default schemas. Executing either repeatedly is a no-op.
//!
//! ```rust
//! use tablegen_core::{ColumnSpec, DdlGenerator, LogicalType, TableSpec};
//!
//! let table = TableSpec::new("Logs")
//!     .column(ColumnSpec::new("ID", LogicalType::Int32).not_null())
//!     .column(ColumnSpec::new("Message", LogicalType::String))
//!     .primary_key("ID");
//!
//! let sql = DdlGenerator::default().create_table_sql(&table)?;
//! assert!(sql.contains("[ID] INT IDENTITY(1,1) NOT NULL"));
//! assert!(sql.contains("CONSTRAINT [PK_Logs] PRIMARY KEY CLUSTERED ([ID])"));
//! # Ok::<(), tablegen_core::DdlError>(())
//! ```
//!
//! Generation is pure text assembly; executing the statements against a
//! server lives in the `tablegen-mssql` crate.

pub mod error;
pub mod generator;
pub mod schema;

pub use error::{DdlError, Result};
pub use generator::{DEFAULT_SCHEMA, DdlGenerator, column_type, quote_identifier, type_token};
pub use schema::{ColumnSpec, LogicalType, TableSpec};

//! # tablegen-mssql
//!
//! Executes the guarded DDL produced by `tablegen-core` against a SQL
//! Server instance over [tiberius](https://docs.rs/tiberius).
//!
//! The surface is intentionally small: [`TableCreator::ensure_schema`]
//! and [`TableCreator::create_table`]. Both open one connection, run one
//! statement and return the affected-row count the server reports (for
//! DDL this is meaningless beyond "no error occurred"). Blank inputs are
//! treated as no-op successes rather than errors.
//!
//! ```rust,no_run
//! use tablegen_core::{ColumnSpec, LogicalType, TableSpec};
//! use tablegen_mssql::TableCreator;
//!
//! # async fn provision() -> tablegen_mssql::Result<()> {
//! let table = TableSpec::new("Logs")
//!     .column(ColumnSpec::new("ID", LogicalType::Int32).not_null())
//!     .column(ColumnSpec::new("Message", LogicalType::String))
//!     .primary_key("ID");
//!
//! let creator = TableCreator::new(
//!     "Server=localhost,1433;Database=logs;User Id=sa;Password=secret",
//!     "dbo",
//! );
//! creator.create_table(&table).await?;
//! # Ok(())
//! # }
//! ```

pub mod creator;
pub mod error;

pub use creator::TableCreator;
pub use error::{CreateTableError, Result};

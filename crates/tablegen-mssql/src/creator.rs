//! Idempotent schema and table provisioning against a live SQL Server.

use tiberius::{Client, Config};
use tokio::net::TcpStream;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};
use tracing::debug;

use tablegen_core::{DdlGenerator, TableSpec};

use crate::error::Result;

/// Creates schemas and tables from [`TableSpec`] descriptions.
///
/// Each operation opens its own connection, runs exactly one statement and
/// drops the connection before returning, on success and failure alike.
/// The generated statements are guarded by catalog existence checks, so
/// calling these operations repeatedly is harmless; callers that may run
/// them concurrently against the same table or schema must serialize
/// themselves, since the guard is advisory rather than transactional.
///
/// The connection string is an opaque ADO-style string handed to the
/// client unexamined.
#[derive(Debug, Clone)]
pub struct TableCreator {
    connection_string: String,
    generator: DdlGenerator,
}

impl TableCreator {
    /// Creates a provisioner for the given connection string and target
    /// schema name.
    #[must_use]
    pub fn new(connection_string: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            generator: DdlGenerator::new(schema),
        }
    }

    /// Returns the target schema name.
    #[must_use]
    pub fn schema(&self) -> &str {
        self.generator.schema()
    }

    /// Creates the target schema if it does not exist yet.
    ///
    /// Resolves to `Ok(0)` without touching the server when the target is
    /// `dbo` (nothing to create) or the connection string is blank.
    /// Otherwise returns whatever affected-row count the server reports
    /// for the guarded `CREATE SCHEMA`; callers should rely only on the
    /// absence of an error, not on the count.
    pub async fn ensure_schema(&self) -> Result<u64> {
        let Some(sql) = self.generator.create_schema_sql() else {
            return Ok(0);
        };
        if self.connection_string.trim().is_empty() {
            debug!(schema = %self.schema(), "no connection string, skipping schema creation");
            return Ok(0);
        }
        self.execute(&sql).await
    }

    /// Creates the described table if it does not exist yet, creating the
    /// target schema first when needed.
    ///
    /// A blank table name or connection string resolves to `Ok(0)` without
    /// touching the server; callers that depend on the table existing must
    /// check those preconditions themselves. Generation failures abort
    /// before any connection is opened.
    pub async fn create_table(&self, table: &TableSpec) -> Result<u64> {
        self.ensure_schema().await?;

        if table.name.trim().is_empty() || self.connection_string.trim().is_empty() {
            debug!(
                table = %table.name,
                "blank table name or connection string, skipping table creation"
            );
            return Ok(0);
        }

        let sql = self.generator.create_table_sql(table)?;
        self.execute(&sql).await
    }

    /// Runs one statement on a fresh connection and returns the reported
    /// affected-row count.
    async fn execute(&self, sql: &str) -> Result<u64> {
        let mut client = self.connect().await?;
        debug!(sql = %sql, "executing DDL");
        let result = client.execute(sql, &[]).await?;
        let affected = result.rows_affected().iter().sum::<u64>();
        debug!(affected_rows = affected, "DDL executed");
        Ok(affected)
    }

    async fn connect(&self) -> Result<Client<Compat<TcpStream>>> {
        let config = Config::from_ado_string(&self.connection_string)?;
        let tcp = TcpStream::connect(config.get_addr()).await?;
        tcp.set_nodelay(true)?;
        let client = Client::connect(config, tcp.compat_write()).await?;
        debug!("connected to SQL Server");
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CreateTableError;
    use tablegen_core::{ColumnSpec, LogicalType};

    fn logs_table() -> TableSpec {
        TableSpec::new("Logs")
            .column(ColumnSpec::new("ID", LogicalType::Int32).not_null())
            .column(ColumnSpec::new("Message", LogicalType::String))
            .primary_key("ID")
    }

    #[tokio::test]
    async fn test_blank_connection_string_is_noop() {
        let creator = TableCreator::new("", "dbo");
        let affected = creator.create_table(&logs_table()).await.unwrap();
        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn test_blank_table_name_is_noop() {
        let creator = TableCreator::new("Server=localhost;Database=logs", "dbo");
        let table = TableSpec::new("   ");
        let affected = creator.create_table(&table).await.unwrap();
        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn test_ensure_schema_noop_for_dbo() {
        let creator = TableCreator::new("Server=localhost;Database=logs", "DBO");
        let affected = creator.ensure_schema().await.unwrap();
        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn test_ensure_schema_noop_without_connection_string() {
        let creator = TableCreator::new("  ", "telemetry");
        let affected = creator.ensure_schema().await.unwrap();
        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn test_generation_error_surfaces_before_connecting() {
        let creator = TableCreator::new("Server=localhost;Database=logs", "dbo");
        let table =
            TableSpec::new("Events").column(ColumnSpec::new("Payload", LogicalType::Binary));
        let err = creator.create_table(&table).await.unwrap_err();
        assert!(matches!(err, CreateTableError::Generate(_)));
    }

    #[test]
    fn test_blank_schema_defaults_to_dbo() {
        let creator = TableCreator::new("Server=localhost", "");
        assert_eq!(creator.schema(), "dbo");
    }

    // Requires a reachable SQL Server; point TABLEGEN_TEST_MSSQL at it,
    // e.g. "Server=localhost,1433;User Id=sa;Password=...;TrustServerCertificate=true".
    #[tokio::test]
    #[ignore]
    async fn test_create_table_against_live_server() {
        let connection_string =
            std::env::var("TABLEGEN_TEST_MSSQL").expect("TABLEGEN_TEST_MSSQL not set");
        let creator = TableCreator::new(connection_string, "dbo");

        creator.create_table(&logs_table()).await.unwrap();
        // Second run hits the existence guard and is a no-op.
        creator.create_table(&logs_table()).await.unwrap();
    }
}

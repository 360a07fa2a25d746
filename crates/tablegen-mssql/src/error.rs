//! Error types for table provisioning.

/// Errors that can occur while provisioning schemas and tables.
///
/// Connection and execution failures from the underlying client propagate
/// through the `Tiberius` and `Io` variants unmodified; nothing is retried
/// or suppressed here.
#[derive(Debug, thiserror::Error)]
pub enum CreateTableError {
    /// DDL generation failed before anything was executed.
    #[error("DDL generation failed: {0}")]
    Generate(#[from] tablegen_core::DdlError),

    /// The SQL Server client reported an error.
    #[error("SQL Server error: {0}")]
    Tiberius(#[from] tiberius::error::Error),

    /// Network-level failure while opening the connection.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for provisioning operations.
pub type Result<T> = std::result::Result<T, CreateTableError>;

//! Error types for DDL generation.

use crate::schema::LogicalType;

/// Errors that can occur while generating DDL.
///
/// Generation is all-or-nothing: on error no partial SQL is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DdlError {
    /// A logical type has no SQL Server mapping rule.
    #[error("logical type {0} has no SQL Server type mapping")]
    UnsupportedType(LogicalType),
}

/// Result type for DDL generation.
pub type Result<T> = std::result::Result<T, DdlError>;

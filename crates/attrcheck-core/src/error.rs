use thiserror::Error;

/// Core error type shared across attrcheck crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A required configuration value is absent.
    #[error("{0} not found in environment")]
    MissingConfig(String),
    /// The catalog reported no columns for the inspected table.
    #[error("{0} table doesn't exist!")]
    TableMissing(String),
    /// Database error or adapter failure.
    #[error("Database error: {0}")]
    Db(String),
    /// Writing the report failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results returned by attrcheck crates.
pub type Result<T> = std::result::Result<T, Error>;

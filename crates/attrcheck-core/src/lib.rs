//! Core contracts and helpers for attrcheck.
//!
//! This crate defines the table contract checked against the database, the
//! transient records produced by the catalog and aggregate queries, and the
//! rendering of those records into report lines.

pub mod contract;
pub mod error;
pub mod model;
pub mod redaction;
pub mod report;
pub mod validation;

pub use contract::{POST_ATTRIBUTION, TableContract};
pub use error::{Error, Result};
pub use model::{ColumnDescriptor, RecentWindowStats};
pub use redaction::redact_connection_string;
pub use validation::missing_essential_columns;

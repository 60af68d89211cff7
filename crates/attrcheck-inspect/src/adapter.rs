use async_trait::async_trait;

use attrcheck_core::{ColumnDescriptor, RecentWindowStats, Result, TableContract};

/// Trait implemented by databases that can answer the three check queries.
///
/// Queries take `&mut self` so an implementation can own a single connection.
#[async_trait]
pub trait AttributionSource {
    /// Returns the engine identifier (e.g. `postgres`).
    fn engine(&self) -> &'static str;

    /// Columns of the contract's table in ordinal order; empty when the table is absent.
    async fn list_columns(&mut self, contract: &TableContract) -> Result<Vec<ColumnDescriptor>>;

    /// Total number of rows in the contract's table.
    async fn count_rows(&mut self, contract: &TableContract) -> Result<i64>;

    /// Aggregates over rows whose timestamp falls inside the contract's window.
    async fn recent_window_stats(&mut self, contract: &TableContract) -> Result<RecentWindowStats>;
}

use std::io::Write;

use attrcheck_core::report::{
    render_columns, render_missing_columns, render_recent_window, render_row_count,
};
use attrcheck_core::{
    ColumnDescriptor, Error, RecentWindowStats, Result, TableContract, missing_essential_columns,
};

use crate::adapter::AttributionSource;

/// What a completed check found.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub columns: Vec<ColumnDescriptor>,
    pub missing_columns: Vec<String>,
    pub row_count: i64,
    /// `None` when the table is empty and the window query was skipped.
    pub recent: Option<RecentWindowStats>,
}

/// Run the schema check against `source`, writing report lines to `out` as
/// each step completes.
///
/// Missing essential columns are reported but do not fail the check. An
/// absent table fails with [`Error::TableMissing`] before any row is counted.
pub async fn run_check<S, W>(
    source: &mut S,
    contract: &TableContract,
    out: &mut W,
) -> Result<CheckOutcome>
where
    S: AttributionSource + Send + ?Sized,
    W: Write,
{
    let columns = source.list_columns(contract).await?;
    tracing::info!(
        event = "columns_listed",
        engine = source.engine(),
        table = contract.table,
        count = columns.len()
    );
    if columns.is_empty() {
        return Err(Error::TableMissing(contract.table.to_string()));
    }
    write_lines(out, render_columns(contract, &columns))?;

    let missing_columns = missing_essential_columns(contract, &columns);
    if !missing_columns.is_empty() {
        tracing::warn!(
            event = "essential_columns_missing",
            table = contract.table,
            missing = ?missing_columns
        );
    }
    write_lines(out, render_missing_columns(&missing_columns))?;

    let row_count = source.count_rows(contract).await?;
    tracing::info!(event = "row_count", table = contract.table, rows = row_count);
    write_lines(out, render_row_count(contract, row_count))?;

    let recent = if row_count > 0 {
        let stats = source.recent_window_stats(contract).await?;
        tracing::info!(
            event = "recent_window_loaded",
            window_days = contract.window_days,
            posts = stats.total_posts
        );
        write_lines(out, render_recent_window(contract, &stats))?;
        Some(stats)
    } else {
        tracing::info!(event = "recent_window_skipped", reason = "empty table");
        None
    };

    Ok(CheckOutcome {
        columns,
        missing_columns,
        row_count,
        recent,
    })
}

fn write_lines<W: Write>(out: &mut W, lines: Vec<String>) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

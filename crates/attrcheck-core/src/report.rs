//! Rendering of check results into the operator-facing report.
//!
//! Each function returns the lines for one step of the check so the caller
//! can emit them as soon as that step completes.

use chrono::{DateTime, Timelike, Utc};

use crate::contract::TableContract;
use crate::model::{ColumnDescriptor, RecentWindowStats};

pub fn render_header(contract: &TableContract) -> Vec<String> {
    vec![format!("🔍 Checking {} table schema...", contract.table)]
}

pub fn render_columns(contract: &TableContract, columns: &[ColumnDescriptor]) -> Vec<String> {
    let mut lines = Vec::with_capacity(columns.len() + 1);
    lines.push(format!(
        "📋 Found {} columns in {} table:",
        columns.len(),
        contract.table
    ));
    for column in columns {
        let nullability = if column.is_nullable { "NULL" } else { "NOT NULL" };
        lines.push(format!(
            "  - {}: {} ({nullability})",
            column.name, column.data_type
        ));
    }
    lines
}

pub fn render_missing_columns(missing: &[String]) -> Vec<String> {
    if missing.is_empty() {
        return vec![String::new(), "✅ All essential columns exist!".to_string()];
    }

    vec![
        String::new(),
        format!(
            "❌ MISSING ESSENTIAL COLUMNS: [{}]",
            missing
                .iter()
                .map(|name| format!("'{name}'"))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        "🔧 These columns are required for learning loops to work!".to_string(),
    ]
}

pub fn render_row_count(contract: &TableContract, count: i64) -> Vec<String> {
    vec![
        String::new(),
        format!("📈 Total posts in {}: {count}", contract.table),
    ]
}

/// Averages missing from an empty window are shown as zero, a missing
/// timestamp as `None`.
pub fn render_recent_window(contract: &TableContract, stats: &RecentWindowStats) -> Vec<String> {
    let engagement = stats.avg_engagement.unwrap_or(0.0) * 100.0;
    let views = stats.avg_views.unwrap_or(0.0);
    let followers = stats.avg_followers.unwrap_or(0.0);
    let most_recent = stats
        .most_recent_post
        .map(format_timestamp)
        .unwrap_or_else(|| "None".to_string());

    vec![
        format!("📊 Last {} days stats:", contract.window_days),
        format!("  - Posts: {}", stats.total_posts),
        format!("  - Avg Engagement: {engagement:.2}%"),
        format!("  - Avg Views: {views:.0}"),
        format!("  - Avg Followers: {followers:.1}"),
        format!("  - Most Recent: {most_recent}"),
    ]
}

/// Microseconds are printed only when non-zero.
fn format_timestamp(ts: DateTime<Utc>) -> String {
    if ts.nanosecond() == 0 {
        ts.format("%Y-%m-%d %H:%M:%S%:z").to_string()
    } else {
        ts.format("%Y-%m-%d %H:%M:%S%.6f%:z").to_string()
    }
}

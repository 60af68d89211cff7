/// Shape a table must have for the downstream learning loops to consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableContract {
    /// Table name as it appears in `information_schema.columns`.
    pub table: &'static str,
    /// Column holding the posting timestamp; drives the recent window.
    pub timestamp_column: &'static str,
    /// Columns required downstream, in reporting order.
    pub essential_columns: &'static [&'static str],
    /// Length of the recent window in days.
    pub window_days: i32,
}

/// The `post_attribution` table written by the collection pipeline.
pub const POST_ATTRIBUTION: TableContract = TableContract {
    table: "post_attribution",
    timestamp_column: "posted_at",
    essential_columns: &[
        "engagement_rate",
        "impressions",
        "followers_gained",
        "hook_pattern",
        "topic",
        "generator_used",
    ],
    window_days: 7,
};

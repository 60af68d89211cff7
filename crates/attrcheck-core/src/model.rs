use chrono::{DateTime, Utc};

/// Column metadata as reported by `information_schema.columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub data_type: String,
    pub is_nullable: bool,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>, is_nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            is_nullable,
        }
    }
}

/// Aggregates over the rows posted inside the recent window.
///
/// Null metric values count as zero before averaging. The averages are only
/// `None` when the window holds no rows at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecentWindowStats {
    pub total_posts: i64,
    pub avg_engagement: Option<f64>,
    pub avg_views: Option<f64>,
    pub avg_followers: Option<f64>,
    pub most_recent_post: Option<DateTime<Utc>>,
}

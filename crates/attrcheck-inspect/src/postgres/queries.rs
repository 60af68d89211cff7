use chrono::{DateTime, Utc};
use sqlx::PgConnection;

use attrcheck_core::{Error, Result, TableContract};

#[derive(sqlx::FromRow)]
pub struct RawColumn {
    pub column_name: String,
    pub data_type: String,
    pub is_nullable: bool,
}

/// Catalog columns for `table` across every schema, in ordinal order.
pub async fn list_columns(conn: &mut PgConnection, table: &str) -> Result<Vec<RawColumn>> {
    sqlx::query_as::<_, RawColumn>(
        r#"
        select
          column_name::text as column_name,
          data_type::text as data_type,
          (is_nullable = 'YES') as is_nullable
        from information_schema.columns
        where table_name = $1
        order by ordinal_position
        "#,
    )
    .bind(table)
    .fetch_all(conn)
    .await
    .map_err(|err| Error::Db(err.to_string()))
}

/// Table names come from [`TableContract`] constants, never from input.
pub fn count_rows_sql(contract: &TableContract) -> String {
    format!("select count(*) from {}", contract.table)
}

pub async fn count_rows(conn: &mut PgConnection, contract: &TableContract) -> Result<i64> {
    sqlx::query_scalar::<_, i64>(&count_rows_sql(contract))
        .fetch_one(conn)
        .await
        .map_err(|err| Error::Db(err.to_string()))
}

#[derive(sqlx::FromRow)]
pub struct RawRecentWindow {
    pub total_posts: i64,
    pub avg_engagement: Option<f64>,
    pub avg_views: Option<f64>,
    pub avg_followers: Option<f64>,
    pub most_recent_post: Option<DateTime<Utc>>,
}

/// Null metrics are coalesced to zero before averaging, not skipped.
/// The window length is bound as `$1`.
pub fn recent_window_sql(contract: &TableContract) -> String {
    let ts = contract.timestamp_column;
    format!(
        r#"
        select
          count(*) as total_posts,
          avg(coalesce(engagement_rate, 0))::float8 as avg_engagement,
          avg(coalesce(impressions, 0))::float8 as avg_views,
          avg(coalesce(followers_gained, 0))::float8 as avg_followers,
          max({ts})::timestamptz as most_recent_post
        from {table}
        where {ts} > now() - make_interval(days => $1)
        "#,
        table = contract.table,
    )
}

pub async fn recent_window(
    conn: &mut PgConnection,
    contract: &TableContract,
) -> Result<RawRecentWindow> {
    sqlx::query_as::<_, RawRecentWindow>(&recent_window_sql(contract))
        .bind(contract.window_days)
        .fetch_one(conn)
        .await
        .map_err(|err| Error::Db(err.to_string()))
}

#[cfg(test)]
mod tests {
    use attrcheck_core::POST_ATTRIBUTION;

    use super::*;

    fn squash(sql: &str) -> String {
        sql.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn counts_rows_of_contract_table() {
        assert_eq!(
            count_rows_sql(&POST_ATTRIBUTION),
            "select count(*) from post_attribution"
        );
    }

    #[test]
    fn recent_window_treats_null_metrics_as_zero() {
        let sql = squash(&recent_window_sql(&POST_ATTRIBUTION));
        for metric in ["engagement_rate", "impressions", "followers_gained"] {
            assert!(
                sql.contains(&format!("avg(coalesce({metric}, 0))")),
                "{metric} must be coalesced inside avg: {sql}"
            );
        }
        assert!(!sql.contains("avg(engagement_rate)"));
    }

    #[test]
    fn recent_window_filters_on_timestamp_column() {
        let sql = squash(&recent_window_sql(&POST_ATTRIBUTION));
        assert!(sql.contains("max(posted_at)::timestamptz as most_recent_post"));
        assert!(sql.contains("from post_attribution where posted_at > now() - make_interval(days => $1)"));
    }
}

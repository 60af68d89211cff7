use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, Connection};

use attrcheck_core::{ColumnDescriptor, Error, RecentWindowStats, Result, TableContract};

use crate::adapter::AttributionSource;

mod queries;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Adapter for PostgreSQL databases, holding the single connection a check runs on.
pub struct PostgresSource {
    conn: PgConnection,
}

impl PostgresSource {
    /// Wrap an already-open connection.
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }

    /// Open one connection, without retrying.
    ///
    /// Driver failures keep their native message; only a handshake that
    /// outlasts the connect timeout is reported as a timeout.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options =
            PgConnectOptions::from_str(database_url).map_err(|err| Error::Db(err.to_string()))?;

        let conn = tokio::time::timeout(CONNECT_TIMEOUT, options.connect())
            .await
            .map_err(|_| {
                Error::Db(format!(
                    "timed out after {}s connecting to database",
                    CONNECT_TIMEOUT.as_secs()
                ))
            })?
            .map_err(|err| Error::Db(err.to_string()))?;

        Ok(Self::new(conn))
    }

    /// Send the termination message and drop the connection.
    pub async fn close(self) -> Result<()> {
        self.conn
            .close()
            .await
            .map_err(|err| Error::Db(err.to_string()))
    }
}

#[async_trait::async_trait]
impl AttributionSource for PostgresSource {
    fn engine(&self) -> &'static str {
        "postgres"
    }

    async fn list_columns(&mut self, contract: &TableContract) -> Result<Vec<ColumnDescriptor>> {
        let raw = queries::list_columns(&mut self.conn, contract.table).await?;
        Ok(raw
            .into_iter()
            .map(|col| ColumnDescriptor {
                name: col.column_name,
                data_type: col.data_type,
                is_nullable: col.is_nullable,
            })
            .collect())
    }

    async fn count_rows(&mut self, contract: &TableContract) -> Result<i64> {
        queries::count_rows(&mut self.conn, contract).await
    }

    async fn recent_window_stats(&mut self, contract: &TableContract) -> Result<RecentWindowStats> {
        let raw = queries::recent_window(&mut self.conn, contract).await?;
        Ok(RecentWindowStats {
            total_posts: raw.total_posts,
            avg_engagement: raw.avg_engagement,
            avg_views: raw.avg_views,
            avg_followers: raw.avg_followers,
            most_recent_post: raw.most_recent_post,
        })
    }
}

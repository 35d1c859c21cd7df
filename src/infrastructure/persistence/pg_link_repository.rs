//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::utils::db_error::map_sqlx_error;

/// Row shape shared by every query returning a full link.
#[derive(Debug, FromRow)]
struct LinkRow {
    code: String,
    target_url: String,
    total_clicks: i64,
    last_clicked: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(
            r.code,
            r.target_url,
            r.total_clicks,
            r.last_clicked,
            r.created_at,
        )
    }
}

/// PostgreSQL repository for link storage and click accounting.
///
/// Every operation is a single statement, so atomicity comes from the
/// database: inserts rely on the primary key for uniqueness and clicks are
/// recorded with one `UPDATE ... RETURNING`.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (code, target_url)
            VALUES ($1, $2)
            RETURNING code, target_url, total_clicks, last_clicked, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.target_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error(e, &new_link.code))?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Link>, StoreError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, target_url, total_clicks, last_clicked, created_at
            FROM links
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error(e, ""))?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, target_url, total_clicks, last_clicked, created_at
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error(e, code))?;

        Ok(row.map(Link::from))
    }

    async fn delete_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            DELETE FROM links
            WHERE code = $1
            RETURNING code, target_url, total_clicks, last_clicked, created_at
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error(e, code))?;

        Ok(row.map(Link::from))
    }

    async fn increment_click(&self, code: &str) -> Result<Option<String>, StoreError> {
        sqlx::query_scalar::<_, String>(
            r#"
            UPDATE links
            SET total_clicks = total_clicks + 1,
                last_clicked = NOW()
            WHERE code = $1
            RETURNING target_url
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error(e, code))
    }
}

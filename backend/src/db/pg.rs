use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgPool;

use super::NewsStore;
use crate::models::news::ActiveNews;

/// Postgres-backed store over the pipeline-owned `news_art` table.
///
/// The table schema and its migrations live with the pipeline's tooling;
/// this side only issues reads.
pub struct PgNewsStore {
    pool: PgPool,
}

impl PgNewsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsStore for PgNewsStore {
    async fn active_entry(&self) -> Result<Option<ActiveNews>> {
        // No ORDER BY: a second active row would violate the pipeline's
        // invariant, and which one comes back is left undefined.
        let entry = sqlx::query_as::<_, ActiveNews>(
            "SELECT headline, description, image_url
             FROM news_art
             WHERE is_active = TRUE
             LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }
}

use anyhow::{Context, Result};
use sqlx::PgPool;
use std::collections::HashMap;

use crate::models::ConnectorRecord;

pub struct ConnectorRepository {
    pool: PgPool,
}

impl ConnectorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connectors persisted in a space, in creation order. The catalog relies
    /// on this order as the stable tiebreak for its name sort.
    pub async fn find_by_space(&self, space_id: &str) -> Result<Vec<ConnectorRecord>> {
        let connectors = sqlx::query_as::<_, ConnectorRecord>(
            r#"
            SELECT id, space_id, action_type_id, name, config,
                   is_deprecated, is_missing_secrets, created_at, updated_at
            FROM connectors
            WHERE space_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(space_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to find connectors by space")?;

        Ok(connectors)
    }

    /// Per-connector count of case entities referencing it within a space.
    pub async fn reference_counts(&self, space_id: &str) -> Result<HashMap<String, i64>> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT connector_id, COUNT(*)
            FROM cases
            WHERE space_id = $1 AND connector_id IS NOT NULL
            GROUP BY connector_id
            "#,
        )
        .bind(space_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to count case references")?;

        Ok(rows.into_iter().collect())
    }
}

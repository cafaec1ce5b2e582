use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use tracing::warn;

use casehub_models::{ConnectorStore, PersistedConnector, StoreError};

use crate::repositories::{ConnectorRepository, SpaceRepository};

/// Postgres-backed implementation of the catalog's store seam.
pub struct PgConnectorStore {
    spaces: SpaceRepository,
    connectors: ConnectorRepository,
}

impl PgConnectorStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            spaces: SpaceRepository::new(pool.clone()),
            connectors: ConnectorRepository::new(pool),
        }
    }
}

fn unavailable(err: anyhow::Error) -> StoreError {
    // Pool-level failures (connect/acquire) and query failures both mean the
    // caller should retry later; the distinction only matters for logs.
    warn!("Connector store query failed: {:#}", err);
    match err.downcast_ref::<sqlx::Error>() {
        Some(sqlx::Error::Io(_))
        | Some(sqlx::Error::PoolTimedOut)
        | Some(sqlx::Error::PoolClosed) => StoreError::Unavailable(err.to_string()),
        _ => StoreError::QueryFailed(err.to_string()),
    }
}

#[async_trait]
impl ConnectorStore for PgConnectorStore {
    async fn space_exists(&self, space: &str) -> Result<bool, StoreError> {
        self.spaces.exists(space).await.map_err(unavailable)
    }

    async fn connectors_in_space(
        &self,
        space: &str,
    ) -> Result<Vec<PersistedConnector>, StoreError> {
        let records = self
            .connectors
            .find_by_space(space)
            .await
            .map_err(unavailable)?;

        Ok(records.into_iter().map(PersistedConnector::from).collect())
    }

    async fn reference_counts(&self, space: &str) -> Result<HashMap<String, i64>, StoreError> {
        self.connectors
            .reference_counts(space)
            .await
            .map_err(unavailable)
    }
}

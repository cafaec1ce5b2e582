// Test doubles shared by the catalog service and handler tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use uuid::Uuid;

use casehub_config::PreconfiguredRegistry;
use casehub_models::{ConnectorStore, PersistedConnector, PreconfiguredConnector, StoreError};

/// In-memory `ConnectorStore` with switchable outage and latency.
#[derive(Default)]
pub struct InMemoryStore {
    spaces: HashSet<String>,
    connectors: HashMap<String, Vec<PersistedConnector>>,
    references: HashMap<String, HashMap<String, i64>>,
    outage: bool,
    latency: Option<Duration>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default().with_space("default")
    }

    pub fn with_space(mut self, space: &str) -> Self {
        self.spaces.insert(space.to_string());
        self
    }

    pub fn with_connector(mut self, space: &str, connector: PersistedConnector) -> Self {
        self.spaces.insert(space.to_string());
        self.connectors
            .entry(space.to_string())
            .or_default()
            .push(connector);
        self
    }

    pub fn with_reference_count(mut self, space: &str, connector_id: &str, count: i64) -> Self {
        self.references
            .entry(space.to_string())
            .or_default()
            .insert(connector_id.to_string(), count);
        self
    }

    pub fn failing(mut self) -> Self {
        self.outage = true;
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    async fn gate(&self) -> Result<(), StoreError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.outage {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ConnectorStore for InMemoryStore {
    async fn space_exists(&self, space: &str) -> Result<bool, StoreError> {
        self.gate().await?;
        Ok(self.spaces.contains(space))
    }

    async fn connectors_in_space(
        &self,
        space: &str,
    ) -> Result<Vec<PersistedConnector>, StoreError> {
        self.gate().await?;
        Ok(self.connectors.get(space).cloned().unwrap_or_default())
    }

    async fn reference_counts(&self, space: &str) -> Result<HashMap<String, i64>, StoreError> {
        self.gate().await?;
        Ok(self.references.get(space).cloned().unwrap_or_default())
    }
}

/// Persisted connector fixture with a fresh uuid id.
pub fn persisted(
    space: &str,
    name: &str,
    action_type_id: &str,
    config: serde_json::Value,
) -> PersistedConnector {
    PersistedConnector {
        id: Uuid::new_v4().to_string(),
        space_id: space.to_string(),
        action_type_id: action_type_id.to_string(),
        name: name.to_string(),
        config: config.as_object().cloned().unwrap_or_default(),
        is_deprecated: false,
        is_missing_secrets: false,
        created_at: Utc::now(),
    }
}

/// The single-connector registry the reference environment runs with.
pub fn servicenow_registry() -> PreconfiguredRegistry {
    PreconfiguredRegistry::new(vec![PreconfiguredConnector {
        id: "preconfigured-servicenow".to_string(),
        action_type_id: ".servicenow".to_string(),
        name: "preconfigured-servicenow".to_string(),
        is_deprecated: false,
    }])
    .expect("static registry fixture is valid")
}

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

use casehub_config::PreconfiguredRegistry;
use casehub_models::{is_supported_action_type, Connector, ConnectorStore, StoreError};

#[derive(Debug, Clone)]
pub enum CatalogError {
    /// The requested space is not known.
    SpaceNotFound(String),
    /// The persistence layer failed or timed out; the caller may retry.
    UpstreamUnavailable(String),
    /// A persisted connector id collides with a preconfigured id. The winner
    /// is undefined, so the whole call fails instead of guessing.
    DuplicateConnectorId(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::SpaceNotFound(space) => write!(f, "Space '{}' not found", space),
            CatalogError::UpstreamUnavailable(msg) => write!(f, "Upstream unavailable: {}", msg),
            CatalogError::DuplicateConnectorId(id) => {
                write!(f, "Connector id '{}' exists both persisted and preconfigured", id)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        CatalogError::UpstreamUnavailable(err.to_string())
    }
}

/// Locale-aware name ordering: case-insensitive primary comparison, with
/// lowercase ordered before uppercase when names differ only by case (the
/// collation tertiary rule). Full ties are left to the caller's stable sort,
/// which preserves fetch order.
pub(crate) fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    match folded {
        // Reversed raw comparison puts lowercase first at the first
        // case difference.
        Ordering::Equal => b.cmp(a),
        other => other,
    }
}

/// Space-scoped connector read model: persisted connectors merged with the
/// process-wide preconfigured set, restricted to case-supported action types
/// and sorted by name.
///
/// Stateless and read-only; concurrent calls are independent.
pub struct ConnectorCatalog {
    store: Arc<dyn ConnectorStore>,
    preconfigured: PreconfiguredRegistry,
    query_timeout: Duration,
}

impl ConnectorCatalog {
    pub fn new(
        store: Arc<dyn ConnectorStore>,
        preconfigured: PreconfiguredRegistry,
        query_timeout: Duration,
    ) -> Self {
        Self {
            store,
            preconfigured,
            query_timeout,
        }
    }

    pub fn preconfigured_count(&self) -> usize {
        self.preconfigured.all().len()
    }

    /// List every connector visible in a space.
    ///
    /// Fails as a whole on any upstream problem; a partial list is never
    /// returned.
    pub async fn list_connectors(&self, space: &str) -> Result<Vec<Connector>, CatalogError> {
        let fetched = timeout(self.query_timeout, self.fetch_space(space)).await;
        let (persisted, reference_counts) = match fetched {
            Ok(result) => result?,
            Err(_) => {
                warn!("⏱️  Connector fetch for space '{}' timed out", space);
                return Err(CatalogError::UpstreamUnavailable(format!(
                    "connector fetch timed out after {:?}",
                    self.query_timeout
                )));
            }
        };

        let preconfigured_ids: HashSet<&str> = self.preconfigured.ids();
        let mut connectors = Vec::with_capacity(persisted.len() + preconfigured_ids.len());

        for record in persisted
            .iter()
            .filter(|record| is_supported_action_type(&record.action_type_id))
        {
            if preconfigured_ids.contains(record.id.as_str()) {
                return Err(CatalogError::DuplicateConnectorId(record.id.clone()));
            }
            let references = reference_counts.get(&record.id).copied().unwrap_or(0);
            connectors.push(Connector::from_persisted(record, references));
        }

        for preconfigured in self.preconfigured.supported() {
            let references = reference_counts.get(&preconfigured.id).copied().unwrap_or(0);
            connectors.push(Connector::from_preconfigured(preconfigured, references));
        }

        // Stable sort: equal names keep fetch order.
        connectors.sort_by(|a, b| locale_cmp(&a.name, &b.name));

        debug!(
            "Listed {} connector(s) for space '{}' ({} persisted, {} preconfigured)",
            connectors.len(),
            space,
            persisted.len(),
            self.preconfigured.supported().len()
        );
        Ok(connectors)
    }

    async fn fetch_space(
        &self,
        space: &str,
    ) -> Result<
        (
            Vec<casehub_models::PersistedConnector>,
            std::collections::HashMap<String, i64>,
        ),
        CatalogError,
    > {
        if !self.store.space_exists(space).await? {
            return Err(CatalogError::SpaceNotFound(space.to_string()));
        }
        let persisted = self.store.connectors_in_space(space).await?;
        let reference_counts = self.store.reference_counts(space).await?;
        Ok((persisted, reference_counts))
    }
}

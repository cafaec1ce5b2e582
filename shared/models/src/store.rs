use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::connector::PersistedConnector;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StoreError {
    /// The persistence layer could not be reached or timed out.
    Unavailable(String),
    /// The persistence layer answered but the query itself failed.
    QueryFailed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {}", msg),
            StoreError::QueryFailed(msg) => write!(f, "Store query failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Read-only view over the connector persistence layer.
///
/// The catalog never writes through this seam; connector lifecycle is owned
/// by the external actions subsystem.
#[async_trait]
pub trait ConnectorStore: Send + Sync {
    /// Whether the given space is known. The default space always exists.
    async fn space_exists(&self, space: &str) -> Result<bool, StoreError>;

    /// All connectors persisted in the given space, in creation order.
    async fn connectors_in_space(&self, space: &str)
        -> Result<Vec<PersistedConnector>, StoreError>;

    /// Number of case entities referencing each connector in the space,
    /// keyed by connector id. Connectors with no references are absent.
    async fn reference_counts(&self, space: &str) -> Result<HashMap<String, i64>, StoreError>;
}

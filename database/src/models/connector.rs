use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use casehub_models::PersistedConnector;

/// A connector row as stored by the actions subsystem. Secrets never reach
/// this table; only the is_missing_secrets flag it maintains does.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ConnectorRecord {
    pub id: Uuid,
    pub space_id: String,
    pub action_type_id: String,
    pub name: String,
    pub config: Value,
    pub is_deprecated: bool,
    pub is_missing_secrets: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ConnectorRecord> for PersistedConnector {
    fn from(record: ConnectorRecord) -> Self {
        PersistedConnector {
            id: record.id.to_string(),
            space_id: record.space_id,
            action_type_id: record.action_type_id,
            name: record.name,
            config: record.config.as_object().cloned().unwrap_or_default(),
            is_deprecated: record.is_deprecated,
            is_missing_secrets: record.is_missing_secrets,
            created_at: record.created_at,
        }
    }
}

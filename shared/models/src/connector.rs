use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Action types the case subsystem knows how to drive. Connectors of any
/// other kind (email, webhooks, ...) exist in the actions subsystem but are
/// never listed for cases.
pub const SUPPORTED_ACTION_TYPES: &[&str] = &[
    ".jira",
    ".servicenow",
    ".servicenow-sir",
    ".resilient",
    ".swimlane",
];

pub fn is_supported_action_type(action_type_id: &str) -> bool {
    SUPPORTED_ACTION_TYPES.contains(&action_type_id)
}

/// Wire-level connector projection returned by the catalog.
///
/// Preconfigured connectors never expose `config` or `isMissingSecrets`,
/// so both are skipped entirely when absent rather than serialized as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    pub id: String,
    pub action_type_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Map<String, Value>>,
    pub is_preconfigured: bool,
    pub is_deprecated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_missing_secrets: Option<bool>,
    pub referenced_by_count: i64,
}

impl Connector {
    pub fn from_persisted(persisted: &PersistedConnector, referenced_by_count: i64) -> Self {
        Self {
            id: persisted.id.clone(),
            action_type_id: persisted.action_type_id.clone(),
            name: persisted.name.clone(),
            config: Some(persisted.config.clone()),
            is_preconfigured: false,
            is_deprecated: persisted.is_deprecated,
            is_missing_secrets: Some(persisted.is_missing_secrets),
            referenced_by_count,
        }
    }

    pub fn from_preconfigured(
        preconfigured: &PreconfiguredConnector,
        referenced_by_count: i64,
    ) -> Self {
        Self {
            id: preconfigured.id.clone(),
            action_type_id: preconfigured.action_type_id.clone(),
            name: preconfigured.name.clone(),
            config: None,
            is_preconfigured: true,
            is_deprecated: preconfigured.is_deprecated,
            is_missing_secrets: None,
            referenced_by_count,
        }
    }
}

/// A space-scoped connector row as the actions subsystem persisted it.
/// This crate only ever reads these; writes happen elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedConnector {
    pub id: String,
    pub space_id: String,
    pub action_type_id: String,
    pub name: String,
    pub config: serde_json::Map<String, Value>,
    pub is_deprecated: bool,
    pub is_missing_secrets: bool,
    pub created_at: DateTime<Utc>,
}

/// A connector defined in static process configuration. Visible in every
/// space, immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreconfiguredConnector {
    pub id: String,
    pub action_type_id: String,
    pub name: String,
    #[serde(default)]
    pub is_deprecated: bool,
}

use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{info, warn};

use casehub_models::{is_supported_action_type, PreconfiguredConnector};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read preconfigured connectors from {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse preconfigured connectors: {0}")]
    Malformed(#[from] serde_yaml::Error),
    #[error("Preconfigured connector at index {index} has an empty '{field}'")]
    EmptyField { index: usize, field: &'static str },
    #[error("Duplicate preconfigured connector id '{0}'")]
    DuplicateId(String),
}

/// Process-wide immutable set of preconfigured connectors.
///
/// Loaded once at startup and injected into the catalog; validated eagerly
/// so id collisions and malformed entries fail the boot instead of a query.
#[derive(Clone, Debug, Default)]
pub struct PreconfiguredRegistry {
    connectors: Vec<PreconfiguredConnector>,
}

#[derive(Debug, Deserialize, Default)]
struct RegistryFile {
    #[serde(default)]
    connectors: Vec<PreconfiguredConnector>,
}

impl PreconfiguredRegistry {
    pub fn new(connectors: Vec<PreconfiguredConnector>) -> Result<Self, ConfigError> {
        let registry = Self { connectors };
        registry.validate()?;
        Ok(registry)
    }

    /// Load from a YAML file. A missing file is not an error: the service
    /// then simply has no preconfigured connectors.
    pub fn from_path(path: &str) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("⚠️  No preconfigured connectors file at {}, starting with none", path);
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::Unreadable {
                    path: path.to_string(),
                    source: e,
                })
            }
        };

        let registry = Self::from_yaml(&content)?;
        info!(
            "🔌 Loaded {} preconfigured connector(s) from {}",
            registry.connectors.len(),
            path
        );
        Ok(registry)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let file: RegistryFile = serde_yaml::from_str(content)?;
        Self::new(file.connectors)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for (index, connector) in self.connectors.iter().enumerate() {
            for (field, value) in [
                ("id", &connector.id),
                ("name", &connector.name),
                ("actionTypeId", &connector.action_type_id),
            ] {
                if value.trim().is_empty() {
                    return Err(ConfigError::EmptyField { index, field });
                }
            }
            if !seen.insert(connector.id.as_str()) {
                return Err(ConfigError::DuplicateId(connector.id.clone()));
            }
            if !is_supported_action_type(&connector.action_type_id) {
                warn!(
                    "⚠️  Preconfigured connector '{}' has action type '{}' not supported for cases; it will be hidden from case listings",
                    connector.id, connector.action_type_id
                );
            }
        }
        Ok(())
    }

    /// All registered connectors, in configuration order.
    pub fn all(&self) -> &[PreconfiguredConnector] {
        &self.connectors
    }

    /// Connectors whose action type the case subsystem supports.
    pub fn supported(&self) -> Vec<&PreconfiguredConnector> {
        self.connectors
            .iter()
            .filter(|c| is_supported_action_type(&c.action_type_id))
            .collect()
    }

    /// Ids of every registered connector, used for collision detection.
    pub fn ids(&self) -> HashSet<&str> {
        self.connectors.iter().map(|c| c.id.as_str()).collect()
    }
}

// Shared domain types for CaseHub services

pub mod connector;
pub mod store;

pub use connector::{
    is_supported_action_type, Connector, PersistedConnector, PreconfiguredConnector,
    SUPPORTED_ACTION_TYPES,
};
pub use store::{ConnectorStore, StoreError};

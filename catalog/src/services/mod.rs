pub mod catalog;

pub use catalog::{CatalogError, ConnectorCatalog};

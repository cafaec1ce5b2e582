pub mod connector;
pub mod space;

pub use connector::ConnectorRecord;
pub use space::DEFAULT_SPACE;

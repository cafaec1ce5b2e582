pub mod connector;
pub mod space;

pub use connector::ConnectorRepository;
pub use space::SpaceRepository;

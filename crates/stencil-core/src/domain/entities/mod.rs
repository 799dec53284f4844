pub mod coordinate;
pub mod properties;

pub use crate::domain::DomainError;
pub use coordinate::ArtifactCoordinate;
pub use properties::EngineProperties;

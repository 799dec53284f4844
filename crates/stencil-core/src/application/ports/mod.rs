//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stencil-adapters` implement
//! most of them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `PropertySink`: Engine property target
//!   - `EngineConfigurator`: Engine property producer
//!   - `PropertiesFormatter`: Property serialization
//!   - `Filesystem`: File operations

pub mod output;

pub use output::{EngineConfigurator, Filesystem, PropertiesFormatter, PropertySink};

#[cfg(test)]
pub use output::MockFilesystem;

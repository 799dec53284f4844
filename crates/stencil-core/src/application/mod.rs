//! Application layer for Stencil.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ModeConfigurator, EngineService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Mode options and
//! coordinate rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{EngineService, ModeConfigurator};

// Re-export port traits (for adapter implementation)
pub use ports::{EngineConfigurator, Filesystem, PropertiesFormatter, PropertySink};

pub use error::ApplicationError;

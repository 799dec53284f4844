//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "configure an engine" or "export its properties".

pub mod engine_service;
pub mod mode_configurator;

pub use engine_service::EngineService;
pub use mode_configurator::ModeConfigurator;

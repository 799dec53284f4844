// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stencil.
//!
//! This module contains pure logic with no I/O. Writing properties to an
//! engine and exporting them to disk are handled via ports (traits) defined
//! in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Value semantics**: All domain objects are Clone + PartialEq
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{coordinate::ArtifactCoordinate, properties::EngineProperties};

pub use error::DomainError;

pub use value_objects::{ModeOptions, RenderMode, keys};
